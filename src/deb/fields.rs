use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LIST_SEP: Regex = Regex::new(r",\s*").unwrap();
}

/// Splits a version on its last hyphen into upstream version and release.
/// A version without a release gets "0".
pub fn split_release(version: &str) -> (String, String) {
    match version.rsplit_once('-') {
        Some((version, release)) => (version.to_string(), release.to_string()),
        None => (version.to_string(), "0".to_string()),
    }
}

/// Splits a release-stripped version on its first colon into epoch and
/// upstream version. A version without an epoch gets "0".
pub fn split_epoch(version: &str) -> (String, String) {
    match version.split_once(':') {
        Some((epoch, version)) => (epoch.to_string(), version.to_string()),
        None => ("0".to_string(), version.to_string()),
    }
}

/// Splits a comma separated capability list. Elements are trimmed and empty
/// ones dropped, so an absent or empty field yields an empty list.
pub fn split_list(raw: &str) -> Vec<String> {
    LIST_SEP
        .split(raw)
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn release_split() {
        assert_eq!(split_release("1.4-3"), ("1.4".to_string(), "3".to_string()));
        assert_eq!(split_release("1.4"), ("1.4".to_string(), "0".to_string()));
        // Only the rightmost hyphen separates the release
        assert_eq!(
            split_release("1.2-3-4"),
            ("1.2-3".to_string(), "4".to_string())
        );
    }

    #[test]
    fn epoch_split() {
        assert_eq!(split_epoch("2:1.4"), ("2".to_string(), "1.4".to_string()));
        assert_eq!(split_epoch("1.4"), ("0".to_string(), "1.4".to_string()));
        // Only the first colon separates the epoch
        assert_eq!(split_epoch("2:3:4"), ("2".to_string(), "3:4".to_string()));
    }

    #[test]
    fn list_split() {
        assert_eq!(split_list("baz, qux"), ["baz", "qux"]);
        assert_eq!(split_list("a,b ,  c"), ["a", "b", "c"]);
        assert_eq!(
            split_list("libpcap (>= 1.9.1), zlib1g"),
            ["libpcap (>= 1.9.1)", "zlib1g"]
        );
        assert!(split_list("").is_empty());
        assert!(split_list("  ").is_empty());
        assert!(split_list(",").is_empty());
    }
}
