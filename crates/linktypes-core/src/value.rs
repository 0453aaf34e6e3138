//! Closed value tree for type inference.
//!
//! Link properties arrive as arbitrary JSON. They are converted once into
//! [`PropValue`], which keeps only what inference needs: the string payload
//! (for discriminant literals) and the object structure. Everything
//! inference cannot describe collapses into [`PropValue::Unknown`].

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{Error, Result};

/// Maximum object nesting accepted by [`PropValue::from_json`].
pub const MAX_DEPTH: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropValue {
    String(String),
    Number,
    Boolean,
    /// Nested mapping. `BTreeMap` keeps members in byte order.
    Object(BTreeMap<String, PropValue>),
    /// Text that is already valid type syntax, emitted verbatim.
    ///
    /// Never produced from JSON.
    Literal(String),
    /// `null`, arrays.
    Unknown,
}

impl PropValue {
    /// Convert a JSON value, rejecting objects nested deeper than [`MAX_DEPTH`].
    pub fn from_json(value: &Value) -> Result<Self> {
        Self::convert(value, 0)
    }

    /// Convert every entry of a JSON object.
    pub fn fields_from_json<'a, I>(entries: I) -> Result<BTreeMap<String, PropValue>>
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        Self::convert_fields(entries, 0)
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    fn convert(value: &Value, depth: usize) -> Result<Self> {
        Ok(match value {
            Value::String(s) => Self::String(s.clone()),
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Object(map) => Self::Object(Self::convert_fields(map, depth)?),
            Value::Null | Value::Array(_) => Self::Unknown,
        })
    }

    fn convert_fields<'a, I>(entries: I, depth: usize) -> Result<BTreeMap<String, PropValue>>
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        if depth >= MAX_DEPTH {
            return Err(Error::RecursionLimitExceeded);
        }
        entries
            .into_iter()
            .map(|(key, value)| Ok((key.clone(), Self::convert(value, depth + 1)?)))
            .collect()
    }
}
