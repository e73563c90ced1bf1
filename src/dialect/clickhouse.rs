//! ClickHouse dialect.
//!
//! Pattern operators use `ILIKE`. Only this dialect supports set membership
//! (`in`, `notIn`) and the bit-mask family.

use super::common::{self, Anchor, bit_and, eq, gt, gte, lt, lte, ne, pattern};
use super::Dialect;
use crate::predicate::Predicate;
use crate::value::{Boolean, Expected, Numeric, Text, Value};

pub const NAME: &str = "clickhouse";

/// Build the ClickHouse operator table.
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
        // STRING `>` is wired to the less-than handler on purpose.
        .operator(">", |k| k.number(gt::<Numeric>).string(lt::<Text>))
        .operator("<", |k| k.number(lt::<Numeric>).string(lt::<Text>))
        .operator("contains", |k| k.string(contains))
        .operator("unContains", |k| k.string(un_contains))
        .operator("startsWith", |k| k.string(starts_with))
        .operator("unStartsWith", |k| k.string(un_starts_with))
        .operator("endsWith", |k| k.string(ends_with))
        .operator("unEndsWith", |k| k.string(un_ends_with))
        .operator("reg", |k| k.string(common::reg))
        .operator("in", |k| k.string(in_set))
        .operator("notIn", |k| k.string(not_in_set))
        .operator("containsBit", |k| {
            k.number(contains_bit).string(contains_bit_str)
        })
        .operator("unContainsBit", |k| {
            k.number(un_contains_bit).string(un_contains_bit_str)
        })
        .reserved("&")
        .reserved("|")
        .build()
}

pub fn contains(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "ILIKE", Anchor::Anywhere)
}

pub fn un_contains(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "NOT ILIKE", Anchor::Anywhere)
}

pub fn starts_with(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "ILIKE", Anchor::Prefix)
}

pub fn un_starts_with(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "NOT ILIKE", Anchor::Prefix)
}

pub fn ends_with(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "ILIKE", Anchor::Suffix)
}

pub fn un_ends_with(key: &str, value: &Value) -> Option<Predicate> {
    pattern(key, value, "NOT ILIKE", Anchor::Suffix)
}

/// Membership in a comma-delimited list; the split happens in ClickHouse.
fn membership(key: &str, value: &Value, cmp: &str) -> Option<Predicate> {
    let param = Text::param(value)?;
    Some(Predicate::new(
        format!("has(splitByChar(',', ?), toString(`{}`)) {} 1", key, cmp),
        vec![param],
    ))
}

pub fn in_set(key: &str, value: &Value) -> Option<Predicate> {
    membership(key, value, "=")
}

pub fn not_in_set(key: &str, value: &Value) -> Option<Predicate> {
    membership(key, value, "!=")
}

// The bit-mask handlers accept any value; see `common::bit_and`.

pub fn contains_bit(key: &str, value: &Value) -> Option<Predicate> {
    Some(bit_and(key, value, "="))
}

pub fn un_contains_bit(key: &str, value: &Value) -> Option<Predicate> {
    Some(bit_and(key, value, "!="))
}

/// Textual field, cast to `UInt64` before masking.
pub fn contains_bit_str(key: &str, value: &Value) -> Option<Predicate> {
    Some(bit_and(&format!("toUInt64({})", key), value, "="))
}

pub fn un_contains_bit_str(key: &str, value: &Value) -> Option<Predicate> {
    Some(bit_and(&format!("toUInt64({})", key), value, "!="))
}
