//! NodeId value object - canonical identifier of an industry or area node
//!
//! Dictionaries and the settings API send identifiers either as JSON numbers
//! (`7`) or as strings (`"7"`, `"7.540"`). Both are normalized here, at the
//! boundary, so that membership tests never depend on the wire type.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical string form of a node identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Create an identifier from text, trimming surrounding whitespace
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// Canonical form of an integer identifier
    pub fn from_int(value: i64) -> Self {
        Self(value.to_string())
    }

    /// Canonical form of a JSON number.
    ///
    /// Integral floats (`7.0`) collapse to their integer text.
    pub fn from_number(number: &serde_json::Number) -> Self {
        if let Some(i) = number.as_i64() {
            return Self::from_int(i);
        }
        if let Some(u) = number.as_u64() {
            return Self(u.to_string());
        }
        match number.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => Self((f as i64).to_string()),
            _ => Self(number.to_string()),
        }
    }

    /// Normalize a scalar JSON value. Arrays, objects and null yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(Self::new(s)),
            serde_json::Value::Number(n) => Some(Self::from_number(n)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NodeIdVisitor;

        impl Visitor<'_> for NodeIdVisitor {
            type Value = NodeId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer identifier")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NodeId, E> {
                Ok(NodeId::new(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<NodeId, E> {
                Ok(NodeId::from_int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<NodeId, E> {
                Ok(NodeId(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<NodeId, E> {
                match serde_json::Number::from_f64(v) {
                    Some(n) => Ok(NodeId::from_number(&n)),
                    None => Err(E::custom("identifier is not a finite number")),
                }
            }
        }

        deserializer.deserialize_any(NodeIdVisitor)
    }
}
