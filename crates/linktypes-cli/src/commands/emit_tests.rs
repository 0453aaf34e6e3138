use std::path::PathBuf;

use linktypes_lib::parse_links;

use super::emit::{EmitArgs, render};

const LINKS: &str = r#"{
    "db": { "properties": { "host": "x" } },
    "cache": {
        "properties": {},
        "include": [ { "type": "cloudflare.binding", "binding": "kvNamespaceBindings" } ]
    }
}"#;

fn args(platform_types: bool) -> EmitArgs {
    EmitArgs {
        links_path: PathBuf::from("links.json"),
        platform_types,
        module: None,
        interface: None,
        output: None,
        color: false,
    }
}

#[test]
fn render_generic() {
    let links = parse_links(LINKS).unwrap();

    let out = render(&links, &args(false)).unwrap();

    assert!(out.contains("    \"cache\": {\n    }\n"));
    assert!(!out.contains("cloudflare"));
}

#[test]
fn render_with_platform_types() {
    let links = parse_links(LINKS).unwrap();

    let out = render(&links, &args(true)).unwrap();

    assert!(out.contains("import * as cloudflare from \"@cloudflare/workers-types\";\n"));
    assert!(out.contains("    \"cache\": cloudflare.KVNamespace\n"));
}

#[test]
fn render_colored() {
    let links = parse_links(LINKS).unwrap();
    let mut colored = args(false);
    colored.color = true;

    let out = render(&links, &colored).unwrap();

    assert!(out.contains('\x1b'));
}

#[test]
fn render_malformed_binding() {
    let links = parse_links(
        r#"{ "bad": { "include": [ { "type": "cloudflare.binding", "binding": 1 } ] } }"#,
    )
    .unwrap();

    let err = render(&links, &args(true)).unwrap_err();

    assert_eq!(
        err.to_string(),
        "link `bad`: `binding` attribute must be a string, found number"
    );
}
