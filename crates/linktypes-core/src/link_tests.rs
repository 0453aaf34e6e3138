use indoc::indoc;
use serde_json::json;

use crate::{Include, Link, parse_links};

const SAMPLE_LINKS: &str = indoc! {r#"
    {
        "db": {
            "properties": { "host": "x", "port": 5432 }
        },
        "cache": {
            "properties": {},
            "include": [
                { "type": "cloudflare.binding", "binding": "kvNamespaceBindings" },
                { "type": "aws.permission", "actions": ["s3:*"] }
            ]
        }
    }
"#};

#[test]
fn parse_sample_links() {
    let links = parse_links(SAMPLE_LINKS).unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links["db"].properties, json!({ "host": "x", "port": 5432 }));
    assert!(links["db"].include.is_empty());
}

#[test]
fn links_iterate_in_name_order() {
    let links = parse_links(SAMPLE_LINKS).unwrap();
    let names: Vec<_> = links.keys().map(String::as_str).collect();

    assert_eq!(names, ["cache", "db"]);
}

#[test]
fn include_keeps_type_tag_and_other_attributes() {
    let links = parse_links(SAMPLE_LINKS).unwrap();
    let include = &links["cache"].include;

    assert_eq!(include.len(), 2);
    assert_eq!(include[0].kind, "cloudflare.binding");
    assert_eq!(include[0].get("binding"), Some(&json!("kvNamespaceBindings")));
    assert!(include[0].get("type").is_none());
    assert_eq!(include[1].kind, "aws.permission");
    assert_eq!(include[1].get("actions"), Some(&json!(["s3:*"])));
}

#[test]
fn missing_fields_default() {
    let links = parse_links(r#"{ "bare": {} }"#).unwrap();

    assert_eq!(links["bare"], Link::default());
    assert!(links["bare"].properties.is_null());
}

#[test]
fn include_without_type_is_rejected() {
    let result = parse_links(r#"{ "x": { "include": [ { "binding": "queueBindings" } ] } }"#);

    assert!(result.is_err());
}

#[test]
fn non_object_document_is_rejected() {
    assert!(parse_links("[]").is_err());
    assert!(parse_links("not json").is_err());
}

#[test]
fn builder_matches_parsed_link() {
    let built = Link::new(json!({})).with_include(
        Include::new("cloudflare.binding").attr("binding", "kvNamespaceBindings"),
    );
    let parsed = parse_links(indoc! {r#"
        { "cache": { "properties": {}, "include": [
            { "type": "cloudflare.binding", "binding": "kvNamespaceBindings" } ] } }
    "#})
    .unwrap();

    assert_eq!(parsed["cache"], built);
}
