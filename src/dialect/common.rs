//! Handlers whose SQL is identical across dialects.
//!
//! The comparison handlers are generic over the payload they expect, so one
//! function serves every kind an operator supports: `eq::<Numeric>`,
//! `eq::<Boolean>`, `eq::<Text>`.

use crate::predicate::Predicate;
use crate::value::{Expected, Param, Text, Value};

fn binary<T: Expected>(key: &str, op: &str, value: &Value) -> Option<Predicate> {
    let param = T::param(value)?;
    Some(Predicate::new(format!("{} {} ?", key, op), vec![param]))
}

pub fn eq<T: Expected>(key: &str, value: &Value) -> Option<Predicate> {
    binary::<T>(key, "=", value)
}

pub fn ne<T: Expected>(key: &str, value: &Value) -> Option<Predicate> {
    binary::<T>(key, "!=", value)
}

pub fn gte<T: Expected>(key: &str, value: &Value) -> Option<Predicate> {
    binary::<T>(key, ">=", value)
}

pub fn lte<T: Expected>(key: &str, value: &Value) -> Option<Predicate> {
    binary::<T>(key, "<=", value)
}

pub fn gt<T: Expected>(key: &str, value: &Value) -> Option<Predicate> {
    binary::<T>(key, ">", value)
}

pub fn lt<T: Expected>(key: &str, value: &Value) -> Option<Predicate> {
    binary::<T>(key, "<", value)
}

pub fn reg(key: &str, value: &Value) -> Option<Predicate> {
    binary::<Text>(key, "REGEXP", value)
}

/// Where the `%` wildcards go around the bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `%value%`
    Anywhere,
    /// `value%`
    Prefix,
    /// `%value`
    Suffix,
}

impl Anchor {
    fn template(&self) -> &'static str {
        match self {
            Anchor::Anywhere => "CONCAT('%', ?, '%')",
            Anchor::Prefix => "CONCAT(?, '%')",
            Anchor::Suffix => "CONCAT('%', ?)",
        }
    }
}

/// Pattern match against a string value. Wildcards live in the SQL, the
/// bound param is the raw value.
pub fn pattern(key: &str, value: &Value, op: &str, anchor: Anchor) -> Option<Predicate> {
    let param = Text::param(value)?;
    Some(Predicate::new(
        format!("{} {} {}", key, op, anchor.template()),
        vec![param],
    ))
}

/// Bitwise-AND test. `column` is the SQL expression for the field (possibly
/// already cast). The value is coerced, never type-checked: anything that
/// does not parse binds as `0`.
pub fn bit_and(column: &str, value: &Value, op: &str) -> Predicate {
    let mask = value.coerce_i64();
    Predicate::new(
        format!("bitAnd({}, ?) {} ?", column, op),
        vec![Param::Int(mask), Param::Int(mask)],
    )
}
