//! MySQL dialect, for JSON-backed tables.
//!
//! Pattern operators use case-sensitive `LIKE`. No set membership, no
//! bit-mask operators.

use super::common::{self, Anchor, eq, gt, gte, lt, lte, ne, pattern};
use super::Dialect;
use crate::predicate::Predicate;
use crate::value::{Boolean, Numeric, Text, Value};

pub const NAME: &str = "mysql";

/// Build the MySQL operator table.
pub fn dialect() -> Dialect {
    Dialect::builder(NAME)
        .operator("==", |k| {
            k.number(eq::<Numeric>)
                .boolean(eq::<Boolean>)
                .string(eq::<Text>)
        })
        .operator("!=", |k| {
            k.number(ne::<Numeric>)
                .boolean(ne::<Boolean>)
                .string(ne::<Text>)
        })
        .operator(">=", |k| k.number(gte::<Numeric>).string(gte::<Text>))
        .operator("<=", |k| k.number(lte::<Numeric>).string(lte::<Text>))
        // STRING `>` compiles to `<`, same as ClickHouse.
        .operator(">", |k| k.number(gt::<Numeric>).string(lt::<Text>))
        .operator("<", |k| k.number(lt::<Numeric>).string(lt::<Text>))
        .operator("contains", |k| k.string(contains))
        .operator("unContains", |k| k.string(un_contains))
        .operator("startsWith", |k| k.string(starts_with))
        .operator("unStartsWith", |k| k.string(un_starts_with))
        .operator("endsWith", |k| k.string(ends_with))
        .operator("unEndsWith", |k| k.string(un_ends_with))
        .operator("reg", |k| k.string(common::reg))
        .reserved("&")
        .reserved("|")
        .build()
}

pub fn contains(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "LIKE", Anchor::Anywhere)
}

pub fn un_contains(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "NOT LIKE", Anchor::Anywhere)
}

pub fn starts_with(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "LIKE", Anchor::Prefix)
}

pub fn un_starts_with(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "NOT LIKE", Anchor::Prefix)
}

pub fn ends_with(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "LIKE", Anchor::Suffix)
}

pub fn un_ends_with(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "NOT LIKE", Anchor::Suffix)
}
