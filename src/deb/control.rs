use crate::error::{QueryError, Result};

use std::collections::HashMap;

/// Field map of a parsed control block, keyed by normalized field name.
pub type ControlMap = HashMap<String, String>;

/// Parses a debian control block into a field map.
///
/// Field names are lowercased with hyphens turned into underscores, so
/// `Pre-Depends` lands under `pre_depends`. Lines starting with whitespace
/// continue the previous field, trimmed and joined with a newline. A later
/// duplicate field overwrites an earlier one. A blank line ends the block;
/// anything after it is ignored.
pub fn parse_control(text: &str) -> Result<ControlMap> {
    let mut fields = ControlMap::new();
    let mut current: Option<(String, String)> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            break;
        }
        if line.starts_with(char::is_whitespace) {
            if let Some((_, value)) = current.as_mut() {
                value.push('\n');
                value.push_str(line.trim());
                continue;
            }
            // An indented line before any field is treated as a field line.
        }
        if let Some((field, value)) = current.take() {
            fields.insert(field, value);
        }
        current = Some(split_field_line(line)?);
    }
    if let Some((field, value)) = current {
        fields.insert(field, value);
    }

    Ok(fields)
}

// Splits "Field: value" on the first colon, normalizing the field name.
fn split_field_line(line: &str) -> Result<(String, String)> {
    let line = line.trim();
    match line.split_once(':') {
        Some((field, value)) => Ok((
            field.to_ascii_lowercase().replace('-', "_"),
            value.trim_start().to_string(),
        )),
        None => Err(QueryError::MalformedControl(line.to_string())),
    }
}

#[test]
fn parse_basic_fields() {
    let map = parse_control("Package: foo\nVersion: 2:1.4-3\nArchitecture: amd64\n").unwrap();
    assert_eq!(map["package"], "foo");
    assert_eq!(map["version"], "2:1.4-3");
    assert_eq!(map["architecture"], "amd64");
}

#[test]
fn fold_continuation_lines() {
    let map = parse_control("Description: web server\n  high performance\n\tand small \n").unwrap();
    assert_eq!(map["description"], "web server\nhigh performance\nand small");
}

#[test]
fn normalize_field_names() {
    let map = parse_control("Pre-Depends: dpkg\nInstalled-Size: 42\n").unwrap();
    assert_eq!(map["pre_depends"], "dpkg");
    assert_eq!(map["installed_size"], "42");
}

#[test]
fn value_may_contain_colons() {
    let map = parse_control("Homepage: https://example.org\n").unwrap();
    assert_eq!(map["homepage"], "https://example.org");
}

#[test]
fn empty_value_is_kept() {
    let map = parse_control("Provides:\nPackage: foo\n").unwrap();
    assert_eq!(map["provides"], "");
}

#[test]
fn duplicate_field_overwrites() {
    let map = parse_control("Section: web\nSection: utils\n").unwrap();
    assert_eq!(map["section"], "utils");
}

#[test]
fn blank_line_ends_block() {
    let map = parse_control("Package: foo\n\nVersion: 1.0\n").unwrap();
    assert_eq!(map["package"], "foo");
    assert!(!map.contains_key("version"));
}

#[test]
fn missing_colon_is_malformed() {
    let err = parse_control("Package foo\n").unwrap_err();
    assert!(matches!(err, QueryError::MalformedControl(_)));
}
