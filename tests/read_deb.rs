// End to end reads over synthetic .deb containers assembled in memory.

use debquery::{PackageRecord, QueryError};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::cmp::Ordering;
use std::io::{Cursor, Write};

const CONTROL: &str = "\
Package: foo
Version: 2:1.4-3
Architecture: amd64
Section: utils
Description: An example package
 spread over two lines
Provides: bar (= 1.0)
Depends: baz, qux
";

fn control_tar(entry: &str) -> Vec<u8> {
    control_tar_with(CONTROL, entry)
}

fn control_tar_with(text: &str, entry: &str) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    let mut header = tar::Header::new_gnu();
    header.set_size(text.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder
        .append_data(&mut header, entry, text.as_bytes())
        .unwrap();
    builder.into_inner().unwrap()
}

fn gz(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn xz(data: &[u8]) -> Vec<u8> {
    let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn build_deb(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = ar::Builder::new(Vec::new());
    for (name, data) in members {
        let header = ar::Header::new(name.as_bytes().to_vec(), data.len() as u64);
        builder.append(&header, *data).unwrap();
    }
    builder.into_inner().unwrap()
}

fn standard_deb() -> Vec<u8> {
    let control = gz(&control_tar("control"));
    build_deb(&[
        ("debian-binary", b"2.0\n"),
        ("control.tar.gz", &control),
        ("data.tar.gz", b"never read"),
    ])
}

#[test]
fn reads_record_from_gz_control() {
    let pkg = PackageRecord::read_from(Cursor::new(standard_deb())).unwrap();
    assert_eq!(pkg.name(), "foo");
    assert_eq!(pkg.epoch(), "2");
    assert_eq!(pkg.version(), "1.4");
    assert_eq!(pkg.release(), "3");
    assert_eq!(pkg.arch(), "amd64");
    assert_eq!(
        pkg.description(),
        "An example package\nspread over two lines"
    );
    assert_eq!(pkg.provides(), ["bar (= 1.0)", "foo = 1.4-3"]);
    assert_eq!(pkg.requires(), ["baz", "qux"]);
    assert!(pkg.pre_depends().is_empty());
    assert_eq!(pkg.get_tag("section"), Some("utils"));
}

#[test]
fn reads_xz_control_with_dotted_entry() {
    let control = xz(&control_tar("./control"));
    let deb = build_deb(&[("debian-binary", b"2.0\n"), ("control.tar.xz", &control)]);
    let pkg = PackageRecord::read_from(Cursor::new(deb)).unwrap();
    assert_eq!(pkg.name(), "foo");
    assert_eq!(pkg.pkg_version().to_string(), "2:1.4-3");
}

#[test]
fn query_reads_from_a_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foo_1.4-3_amd64.deb");
    std::fs::write(&path, standard_deb()).unwrap();

    let pkg = PackageRecord::query(&path).unwrap();
    assert_eq!(pkg.pkg_version().to_string(), "2:1.4-3");
}

#[test]
fn rejects_wrong_format_marker() {
    let control = gz(&control_tar("control"));
    let deb = build_deb(&[("debian-binary", b"3.0\n"), ("control.tar.gz", &control)]);
    let err = PackageRecord::read_from(Cursor::new(deb)).unwrap_err();
    assert!(matches!(err, QueryError::UnsupportedFormat(_)));
}

#[test]
fn rejects_missing_format_marker() {
    let control = gz(&control_tar("control"));
    let deb = build_deb(&[("control.tar.gz", &control)]);
    let err = PackageRecord::read_from(Cursor::new(deb)).unwrap_err();
    assert!(matches!(err, QueryError::MissingMember(_)));
}

#[test]
fn rejects_missing_control_archive() {
    let deb = build_deb(&[("debian-binary", b"2.0\n"), ("data.tar.gz", b"never read")]);
    let err = PackageRecord::read_from(Cursor::new(deb)).unwrap_err();
    assert!(matches!(err, QueryError::MissingMember(_)));
}

#[test]
fn rejects_missing_control_entry() {
    let control = gz(&control_tar_with(CONTROL, "changelog"));
    let deb = build_deb(&[("debian-binary", b"2.0\n"), ("control.tar.gz", &control)]);
    let err = PackageRecord::read_from(Cursor::new(deb)).unwrap_err();
    assert!(matches!(err, QueryError::MissingControlEntry(_)));
}

#[test]
fn rejects_garbage_container() {
    let bytes = b"certainly not an ar archive".to_vec();
    let err = PackageRecord::read_from(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, QueryError::ArchiveFormat(_)));
}

#[test]
fn orders_two_packages() {
    let old = "Package: foo\nVersion: 9.9-9\nArchitecture: amd64\n";
    let new = "Package: foo\nVersion: 1:0.1-1\nArchitecture: amd64\n";

    let read = |text: &str| {
        let control = gz(&control_tar_with(text, "control"));
        let deb = build_deb(&[("debian-binary", b"2.0\n"), ("control.tar.gz", &control)]);
        PackageRecord::read_from(Cursor::new(deb)).unwrap()
    };

    assert_eq!(read(new).vercmp(&read(old)), Ordering::Greater);
    assert_eq!(read(old).vercmp(&read(new)), Ordering::Less);
}
