use std::fs;

use tempfile::TempDir;

use crate::{Error, parse_links, read_links};

#[test]
fn read_links_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.json");
    fs::write(&path, r#"{ "db": { "properties": { "host": "x" } } }"#).unwrap();

    let links = read_links(&path).unwrap();

    assert_eq!(links.keys().collect::<Vec<_>>(), ["db"]);
}

#[test]
fn read_links_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let err = read_links(&path).unwrap_err();

    assert!(matches!(err, Error::Io { ref path, .. } if path.ends_with("missing.json")));
    assert!(err.to_string().starts_with("failed to read "));
}

#[test]
fn parse_links_reports_invalid_json() {
    let err = parse_links("{").unwrap_err();

    assert!(matches!(
        err,
        Error::Core(linktypes_core::Error::Links(_))
    ));
    assert!(err.to_string().starts_with("invalid links document: "));
}
