
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::cmp::Ordering;
use std::fmt;

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new("[0-9]+").unwrap();
}

// Digit runs are left-padded to this width so they compare positionally like
// numbers. Runs longer than 32 digits lose their leading characters and will
// compare wrong; existing orderings depend on the bound, so it stays.
const DIGIT_RUN_WIDTH: usize = 32;

fn pad_digit_runs(version: &str) -> String {
    DIGIT_RUN
        .replace_all(version, |caps: &Captures| {
            let run = &caps[0];
            if run.len() >= DIGIT_RUN_WIDTH {
                run[run.len() - DIGIT_RUN_WIDTH..].to_string()
            } else {
                format!("{:0>width$}", run, width = DIGIT_RUN_WIDTH)
            }
        })
        .into_owned()
}

// Non-alphanumerics rank above everything else, 256 codepoints up.
fn char_rank(c: char) -> u32 {
    match c.is_ascii_alphabetic() || c.is_ascii_digit() {
        true => c as u32,
        false => c as u32 + 256,
    }
}

/// dpkg style comparison of two version strings.
///
/// Pure and total; any pair of strings yields an ordering. `~` sorts below
/// every other character and below running out of string, which is what lets
/// `1.0~beta1` come before `1.0`.
pub fn deb_vercmp(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = pad_digit_runs(a).chars().collect();
    let b: Vec<char> = pad_digit_runs(b).chars().collect();

    for pos in 0..a.len().max(b.len()) {
        let x = a.get(pos).copied();
        let y = b.get(pos).copied();
        if x == y {
            continue;
        }
        match (x, y) {
            (Some(x), Some(y))
                if (x.is_ascii_alphabetic() && y.is_ascii_alphabetic())
                    || (x.is_ascii_digit() && y.is_ascii_digit()) =>
            {
                return x.cmp(&y);
            }
            (Some('~'), _) | (None, _) => return Ordering::Less,
            (_, Some('~')) | (_, None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                return match char_rank(x) > char_rank(y) {
                    true => Ordering::Greater,
                    false => Ordering::Less,
                };
            }
        }
    }

    Ordering::Equal
}

/// A fully split package version.
///
/// Epoch compares as an integer; upstream version and release compare with
/// [`deb_vercmp`], in that order.
#[derive(Debug, Clone, Eq)]
pub struct PkgVersion {
    pub epoch: String,
    pub version: String,
    pub release: String,
}

impl PkgVersion {
    fn epoch_num(&self) -> u64 {
        // A non-numeric epoch counts as no epoch at all.
        self.epoch.parse().unwrap_or(0)
    }
}

impl Ord for PkgVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.epoch_num().cmp(&other.epoch_num()) {
            Ordering::Equal => (),
            uneven => return uneven,
        }
        match deb_vercmp(&self.version, &other.version) {
            Ordering::Equal => (),
            uneven => return uneven,
        }
        deb_vercmp(&self.release, &other.release)
    }
}

impl PartialOrd for PkgVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality has to agree with the ordering, so "01:1.0-0" == "1:1.0-0".
impl PartialEq for PkgVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl fmt::Display for PkgVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.epoch != "0" {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}", self.version)?;
        if self.release != "0" {
            write!(f, "-{}", self.release)?;
        }
        Ok(())
    }
}
