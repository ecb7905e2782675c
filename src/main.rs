use debquery::{println_error, PackageRecord};

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;

/// Print the control metadata of a Debian binary package
#[derive(Parser)]
#[clap(about, version)]
struct Opts {
    #[clap(help = "Path of the deb file to query")]
    package: PathBuf,
}

/// Exit codes:
/// 2 => malformed or unreadable package
fn main() {
    let opts = Opts::parse();
    let pkg = match PackageRecord::query(&opts.package) {
        Ok(pkg) => pkg,
        Err(err) => {
            println_error!("{}", err);
            exit(2);
        }
    };

    println!(
        "{} {} {} {}",
        pkg.name(),
        pkg.version(),
        pkg.release(),
        pkg.arch()
    );
    println!("{}", pkg.description());
    println!("##########");
    for entry in pkg.provides() {
        println!("{}", entry);
    }
    println!("##########");
    for entry in pkg.requires() {
        println!("{}", entry);
    }
}
