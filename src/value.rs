//! Runtime values, their kinds, and the parameters bound to placeholders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// The closed set of value kinds a filter value is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Number,
    Boolean,
    String,
}

impl ValueKind {
    /// Every kind, in dispatch-table column order.
    pub const ALL: [ValueKind; 3] = [ValueKind::Number, ValueKind::Boolean, ValueKind::String];
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Number => write!(f, "NUMBER"),
            ValueKind::Boolean => write!(f, "BOOLEAN"),
            ValueKind::String => write!(f, "STRING"),
        }
    }
}

impl FromStr for ValueKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "number" | "num" => Ok(ValueKind::Number),
            "boolean" | "bool" => Ok(ValueKind::Boolean),
            "string" | "str" => Ok(ValueKind::String),
            _ => Err(QueryError::UnknownKind(s.to_string())),
        }
    }
}

/// A filter value as handed over by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
}

impl Value {
    /// Classify this value. Total and deterministic over every variant.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::String(_) => ValueKind::String,
        }
    }

    /// Coerce to a 64-bit integer, defaulting to zero when the value does not
    /// parse. Numbers truncate toward zero.
    pub fn coerce_i64(&self) -> i64 {
        match self {
            Value::Number(n) => truncate(*n),
            Value::Bool(b) => i64::from(*b),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .or_else(|_| s.parse::<f64>().map(truncate))
                    .unwrap_or(0)
            }
        }
    }
}

fn truncate(n: f64) -> i64 {
    if n.is_finite() { n as i64 } else { 0 }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "'{}'", s),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// A driver-level value bound to one `?` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Param {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Int(n) => write!(f, "{}", n),
            Param::Float(n) => write!(f, "{}", n),
            Param::Bool(b) => write!(f, "{}", b),
            Param::String(s) => write!(f, "'{}'", s),
        }
    }
}

/// The concrete payload type a handler expects.
///
/// `param` returns `None` when the value's variant is not the expected one,
/// which handlers turn into a no-match.
pub trait Expected {
    fn param(value: &Value) -> Option<Param>;
}

/// Expects [`Value::Number`], bound as a float.
pub struct Numeric;

/// Expects [`Value::Bool`].
pub struct Boolean;

/// Expects [`Value::String`].
pub struct Text;

impl Expected for Numeric {
    fn param(value: &Value) -> Option<Param> {
        match value {
            Value::Number(n) => Some(Param::Float(*n)),
            _ => None,
        }
    }
}

impl Expected for Boolean {
    fn param(value: &Value) -> Option<Param> {
        match value {
            Value::Bool(b) => Some(Param::Bool(*b)),
            _ => None,
        }
    }
}

impl Expected for Text {
    fn param(value: &Value) -> Option<Param> {
        match value {
            Value::String(s) => Some(Param::String(s.clone())),
            _ => None,
        }
    }
}
