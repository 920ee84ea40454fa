//! The erased value wrapper.
//!
//! Filterable fields come in heterogeneous types (strings, numbers, enums
//! rendered as strings). [`FilterValue`] stores and compares all of them
//! through one uniform type, so filters never need to know the concrete type
//! of the field they match against.

use std::fmt;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// A filterable field value with its original type erased.
///
/// The variants cover the primitive kinds the raw filter map exchanges.
/// Values of any other kind are captured through their string rendering as
/// [`FilterValue::Other`].
#[derive(Debug, Clone)]
pub enum FilterValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// String rendering of a value of an unknown kind.
    Other(String),
}

impl FilterValue {
    /// Convert a raw wire value into an erased value.
    ///
    /// Scalars convert directly (integers to [`FilterValue::Int`], other
    /// numbers to [`FilterValue::Float`]). `null`, arrays and objects have no
    /// equality-comparable scalar form and yield `None`; the collection
    /// builders drop such entries.
    pub fn from_json(raw: &Json) -> Option<Self> {
        match raw {
            Json::String(s) => Some(Self::Str(s.clone())),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i))
                } else {
                    n.as_f64().map(Self::Float)
                }
            }
            Json::Bool(b) => Some(Self::Bool(*b)),
            Json::Null | Json::Array(_) | Json::Object(_) => None,
        }
    }

    /// Convert back to the raw wire representation.
    ///
    /// `Other` serializes as its rendering, as does a non-finite float (which
    /// JSON numbers cannot carry).
    pub fn to_json(&self) -> Json {
        match self {
            Self::Str(s) => Json::String(s.clone()),
            Self::Int(i) => Json::from(*i),
            Self::Float(x) => serde_json::Number::from_f64(*x)
                .map(Json::Number)
                .unwrap_or_else(|| Json::String(x.to_string())),
            Self::Bool(b) => Json::Bool(*b),
            Self::Other(s) => Json::String(s.clone()),
        }
    }

    /// Structural same-kind comparison: each variant compares against its own
    /// kind only, `Str` exactly (case-sensitive), `Other` by rendering.
    fn same_kind_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Other(a), Self::Other(b)) => a == b,
            _ => false,
        }
    }
}

/// Equality is deliberately two-path: a case-insensitive textual shortcut
/// when both sides are `Str`, then the structural same-kind comparison tried
/// from either side. The textual shortcut relates values the structural rule
/// would not (`"Male"` and `"male"`), so the relation is not guaranteed
/// transitive. Known correctness risk, kept because matching results for
/// existing filter sets depend on it.
impl PartialEq for FilterValue {
    fn eq(&self, other: &Self) -> bool {
        if let (Self::Str(a), Self::Str(b)) = (self, other) {
            if a.to_lowercase() == b.to_lowercase() {
                return true;
            }
        }
        self.same_kind_eq(other) || other.same_kind_eq(self)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) | Self::Other(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for FilterValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for FilterValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for FilterValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FilterValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Json::deserialize(deserializer)?;
        Self::from_json(&raw)
            .ok_or_else(|| D::Error::custom(format!("{raw} has no scalar filter-value form")))
    }
}
