//! Platform binding resolution.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::trace;

use crate::{Error, Links, Platform, Result};

/// Link name -> declared platform type (unqualified, e.g. `KVNamespace`).
///
/// For each link only the first descriptor tagged with the platform's binding
/// tag is consulted. If its kind is unknown to the platform the link stays
/// generic. A tagged descriptor whose `binding` attribute is missing or not a
/// string is malformed upstream data and aborts resolution.
pub fn resolve_bindings(links: &Links, platform: &Platform) -> Result<BTreeMap<String, String>> {
    let mut resolved = BTreeMap::new();

    for (name, link) in links {
        let Some(include) = link
            .include
            .iter()
            .find(|include| include.kind == platform.binding_tag())
        else {
            continue;
        };

        let kind = match include.get("binding") {
            Some(Value::String(kind)) => kind,
            other => {
                return Err(Error::MalformedBinding {
                    link: name.clone(),
                    found: json_kind(other),
                });
            }
        };

        match platform.kinds().get(kind) {
            Some(type_name) => {
                resolved.insert(name.clone(), type_name.to_string());
            }
            None => trace!(link = %name, %kind, "binding kind has no platform type"),
        }
    }

    Ok(resolved)
}

fn json_kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
