//! Ordered key/value payloads shared by the profile and the info panels.
//!
//! DESIGN
//! ======
//! Field semantics are never interpreted; values are kept as JSON scalars (or
//! flat sequences of them) so they can be rendered exactly as received, in the
//! order the server sent them.

#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single JSON scalar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Null,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write_number(f, value),
            Self::Text(value) => f.write_str(value),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Integral floats drop their fractional part (`1.0` shows as `1`), as a
/// browser would print them.
fn write_number(f: &mut fmt::Formatter<'_>, value: &serde_json::Number) -> fmt::Result {
    match value.as_f64() {
        Some(float) if value.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => {
            if float == 0.0 { f.write_str("0") } else { write!(f, "{float:.0}") }
        }
        _ => write!(f, "{value}"),
    }
}

/// Value of one field: a scalar or a sequence of scalars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    List(Vec<Scalar>),
    Scalar(Scalar),
}

impl FieldValue {
    /// Human-readable form; sequence elements are joined with `", "`.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Scalar(scalar) => scalar.to_string(),
            Self::List(items) => items
                .iter()
                .map(|item| match item {
                    Scalar::Null => String::new(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Body shape errors for key/value payloads.
#[derive(Debug, thiserror::Error)]
pub enum EntriesError {
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("unsupported value for field {key:?}")]
    UnsupportedValue { key: String },
}

/// Ordered mapping from string keys to [`FieldValue`]s.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct KeyValues(Vec<(String, FieldValue)>);

/// The authenticated user's profile as returned by `/api/user`.
pub type Profile = KeyValues;

impl KeyValues {
    #[must_use]
    pub fn new(entries: Vec<(String, FieldValue)>) -> Self {
        Self(entries)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[cfg(test)]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Convert a decoded response body, keeping the server's key order.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not an object or a field holds a nested
    /// object / nested sequence.
    pub fn from_json(body: Value) -> Result<Self, EntriesError> {
        let Value::Object(map) = body else {
            return Err(EntriesError::NotAnObject(json_kind(&body)));
        };
        map.into_iter()
            .map(|(key, value)| match serde_json::from_value::<FieldValue>(value) {
                Ok(field) => Ok((key, field)),
                Err(_) => Err(EntriesError::UnsupportedValue { key }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<'de> Deserialize<'de> for KeyValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = KeyValues;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of scalars or scalar sequences")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, FieldValue>()? {
                    entries.push((key, value));
                }
                Ok(KeyValues(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
