//! Structural type inference over property trees.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::{Colors, PropValue};

/// One level of indentation.
pub const INDENT: &str = "  ";

/// Member that keeps its string value as a literal type at the top level.
pub const DISCRIMINANT: &str = "type";

/// Render `fields` as an object type literal.
///
/// Members appear in byte order of their keys, one per line, indented one
/// level past `indent`; the closing brace sits at `indent`. Only when
/// `top_level` is set does a string-valued `type` member render as its
/// quoted value instead of `string`.
pub fn infer(fields: &BTreeMap<String, PropValue>, top_level: bool, indent: &str) -> String {
    infer_colored(fields, top_level, indent, Colors::OFF)
}

/// Same as [`infer`], with keys, literals and punctuation colored.
pub fn infer_colored(
    fields: &BTreeMap<String, PropValue>,
    top_level: bool,
    indent: &str,
    colors: Colors,
) -> String {
    let mut out = String::new();
    write_object(&mut out, fields, top_level, indent, colors);
    out
}

fn write_object(
    out: &mut String,
    fields: &BTreeMap<String, PropValue>,
    top_level: bool,
    indent: &str,
    c: Colors,
) {
    out.push_str(&format!("{}{{{}\n", c.dim, c.reset));

    let inner = format!("{indent}{INDENT}");
    for (key, value) in fields {
        out.push_str(&format!(
            "{}{}\"{}\"{}{}:{} ",
            inner,
            c.blue,
            quote(key),
            c.reset,
            c.dim,
            c.reset
        ));

        match value {
            PropValue::String(s) if top_level && key == DISCRIMINANT => {
                out.push_str(&format!("{}\"{}\"{}", c.green, quote(s), c.reset));
            }
            PropValue::Literal(text) => out.push_str(text),
            PropValue::String(_) => out.push_str("string"),
            PropValue::Number => out.push_str("number"),
            PropValue::Boolean => out.push_str("boolean"),
            PropValue::Object(nested) => write_object(out, nested, false, &inner, c),
            PropValue::Unknown => out.push_str("any"),
        }
        out.push('\n');
    }

    out.push_str(&format!("{}{}}}{}", indent, c.dim, c.reset));
}

/// Escape text for a double-quoted TypeScript string.
fn quote(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '"', '\n', '\r']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
