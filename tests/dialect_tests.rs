use std::sync::Arc;
use std::thread;

use exprsql::dialect::{clickhouse, mysql};
use exprsql::prelude::*;
use pretty_assertions::assert_eq;

const BIT_OPERATORS: [&str; 2] = ["containsBit", "unContainsBit"];

fn sample(kind: ValueKind) -> Value {
    match kind {
        ValueKind::Number => Value::from(5),
        ValueKind::Boolean => Value::from(true),
        ValueKind::String => Value::from("5"),
    }
}

fn dialects() -> Vec<Dialect> {
    vec![clickhouse::dialect(), mysql::dialect()]
}

#[test]
fn test_every_registered_pair_compiles() {
    for dialect in dialects() {
        for op in dialect.operators() {
            for kind in dialect.kinds(op) {
                let p = dialect
                    .compile(op, "field", &sample(kind))
                    .unwrap_or_else(|| panic!("{} {} {} did not compile", dialect.name(), op, kind));
                assert!(!p.sql.is_empty());
                assert_eq!(
                    p.placeholder_count(),
                    p.params.len(),
                    "{} {} {}: {}",
                    dialect.name(),
                    op,
                    kind,
                    p.sql
                );
            }
        }
    }
}

#[test]
fn test_mismatched_value_yields_nothing() {
    for dialect in dialects() {
        for op in dialect.operators() {
            if BIT_OPERATORS.contains(&op) {
                continue;
            }
            for declared in dialect.kinds(op) {
                for actual in ValueKind::ALL.into_iter().filter(|k| *k != declared) {
                    assert_eq!(
                        dialect.compile_as(op, "field", declared, &sample(actual)),
                        None,
                        "{} {} declared {} given {}",
                        dialect.name(),
                        op,
                        declared,
                        actual
                    );
                }
            }
        }
    }
}

#[test]
fn test_boolean_has_no_ordering() {
    for dialect in dialects() {
        for op in [">=", "<=", ">", "<"] {
            assert!(!dialect.supports(op, ValueKind::Boolean));
            assert_eq!(dialect.compile(op, "active", &Value::from(true)), None);
        }
    }
}

#[test]
fn test_equality() {
    for dialect in dialects() {
        let p = exprsql::compile(&dialect, "==", "age", &Value::from(30)).unwrap();
        assert_eq!(p.sql, "age = ?");
        assert_eq!(p.params, vec![Param::Float(30.0)]);

        let p = exprsql::compile(&dialect, "!=", "age", &Value::from(30)).unwrap();
        assert_eq!(p.sql, "age != ?");
        assert_eq!(p.params, vec![Param::Float(30.0)]);
    }
}

#[test]
fn test_string_greater_than_compiles_to_less_than() {
    // STRING `>` is wired to the less-than handler in both dialects.
    for dialect in dialects() {
        let p = dialect.compile(">", "name", &Value::from("m")).unwrap();
        assert_eq!(p.sql, "name < ?");
        let p = dialect.compile("<", "name", &Value::from("m")).unwrap();
        assert_eq!(p.sql, "name < ?");

        let p = dialect.compile(">", "age", &Value::from(3)).unwrap();
        assert_eq!(p.sql, "age > ?");
    }
}

#[test]
fn test_pattern_case_sensitivity_differs() {
    let value = Value::from("bob");
    let ch = clickhouse::dialect().compile("contains", "name", &value).unwrap();
    let my = mysql::dialect().compile("contains", "name", &value).unwrap();
    assert_eq!(ch.sql, "name ILIKE CONCAT('%', ?, '%')");
    assert_eq!(my.sql, "name LIKE CONCAT('%', ?, '%')");
    assert_eq!(ch.params, vec![Param::String("bob".into())]);
    assert_eq!(ch.params, my.params);
}

#[test]
fn test_contains_bit() {
    let dialect = clickhouse::dialect();

    let p = dialect.compile("containsBit", "flags", &Value::from("7")).unwrap();
    assert_eq!(p.sql, "bitAnd(toUInt64(flags), ?) = ?");
    assert_eq!(p.params, vec![Param::Int(7), Param::Int(7)]);

    let p = dialect
        .compile("containsBit", "flags", &Value::from("not-a-number"))
        .unwrap();
    assert_eq!(p.params, vec![Param::Int(0), Param::Int(0)]);
}

#[test]
fn test_dialect_isolation() {
    let ch = clickhouse::dialect();
    let my = mysql::dialect();
    let value = Value::from("a,b");
    for op in ["in", "notIn"] {
        assert!(ch.compile(op, "tag", &value).is_some());
        assert_eq!(my.compile(op, "tag", &value), None);
    }
}

#[test]
fn test_logical_symbols_are_reserved() {
    for dialect in dialects() {
        for op in ["&", "|"] {
            assert!(dialect.has_operator(op));
            for kind in ValueKind::ALL {
                assert_eq!(dialect.compile(op, "a", &sample(kind)), None);
            }
        }
    }
}

#[test]
fn test_unknown_operator() {
    for dialect in dialects() {
        assert_eq!(dialect.compile("~", "name", &Value::from("bob")), None);
    }
}

#[test]
fn test_compile_is_idempotent() {
    let dialect = clickhouse::dialect();
    let value = Value::from("bob");
    let first = dialect.compile("startsWith", "name", &value);
    let second = dialect.compile("startsWith", "name", &value);
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn test_shared_across_threads() {
    let dialect = Arc::new(DialectKind::ClickHouse.build());
    let handles: Vec<_> = (0..4i32)
        .map(|i| {
            let dialect = Arc::clone(&dialect);
            thread::spawn(move || dialect.compile("==", "n", &Value::from(i)))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let p = handle.join().unwrap().unwrap();
        assert_eq!(p.sql, "n = ?");
        assert_eq!(p.params, vec![Param::Float(i as f64)]);
    }
}

/// `(operator, kind, fragment, params)` for field `f` compiled with `sample(kind)`.
type Entry = (&'static str, ValueKind, &'static str, Vec<Param>);

fn comparison_entries() -> Vec<Entry> {
    use ValueKind::*;
    let num = || vec![Param::Float(5.0)];
    let text = || vec![Param::String("5".into())];
    vec![
        ("==", Number, "f = ?", num()),
        ("==", Boolean, "f = ?", vec![Param::Bool(true)]),
        ("==", String, "f = ?", text()),
        ("!=", Number, "f != ?", num()),
        ("!=", Boolean, "f != ?", vec![Param::Bool(true)]),
        ("!=", String, "f != ?", text()),
        (">=", Number, "f >= ?", num()),
        (">=", String, "f >= ?", text()),
        ("<=", Number, "f <= ?", num()),
        ("<=", String, "f <= ?", text()),
        (">", Number, "f > ?", num()),
        (">", String, "f < ?", text()),
        ("<", Number, "f < ?", num()),
        ("<", String, "f < ?", text()),
        ("reg", String, "f REGEXP ?", text()),
    ]
}

fn pattern_entries(like: &str) -> Vec<(&'static str, ValueKind, String, Vec<Param>)> {
    [
        ("contains", "", "CONCAT('%', ?, '%')"),
        ("unContains", "NOT ", "CONCAT('%', ?, '%')"),
        ("startsWith", "", "CONCAT(?, '%')"),
        ("unStartsWith", "NOT ", "CONCAT(?, '%')"),
        ("endsWith", "", "CONCAT('%', ?)"),
        ("unEndsWith", "NOT ", "CONCAT('%', ?)"),
    ]
    .into_iter()
    .map(|(op, not, template)| {
        (
            op,
            ValueKind::String,
            format!("f {}{} {}", not, like, template),
            vec![Param::String("5".into())],
        )
    })
    .collect()
}

fn assert_table(dialect: &Dialect, expected: Vec<(&'static str, ValueKind, String, Vec<Param>)>) {
    let registered: usize = dialect
        .operators()
        .into_iter()
        .map(|op| dialect.kinds(op).len())
        .sum();
    assert_eq!(registered, expected.len(), "{} entry count", dialect.name());

    for (op, kind, sql, params) in expected {
        let p = dialect
            .compile_as(op, "f", kind, &sample(kind))
            .unwrap_or_else(|| panic!("{} {} {} did not compile", dialect.name(), op, kind));
        assert_eq!(p.sql, sql, "{} {} {}", dialect.name(), op, kind);
        assert_eq!(p.params, params, "{} {} {}", dialect.name(), op, kind);
    }
}

fn owned(entries: Vec<Entry>) -> Vec<(&'static str, ValueKind, String, Vec<Param>)> {
    entries
        .into_iter()
        .map(|(op, kind, sql, params)| (op, kind, sql.to_string(), params))
        .collect()
}

#[test]
fn test_clickhouse_table_fragments() {
    use ValueKind::*;
    let mask = || vec![Param::Int(5), Param::Int(5)];
    let mut expected = owned(comparison_entries());
    expected.extend(pattern_entries("ILIKE"));
    expected.extend(owned(vec![
        (
            "in",
            String,
            "has(splitByChar(',', ?), toString(`f`)) = 1",
            vec![Param::String("5".into())],
        ),
        (
            "notIn",
            String,
            "has(splitByChar(',', ?), toString(`f`)) != 1",
            vec![Param::String("5".into())],
        ),
        ("containsBit", Number, "bitAnd(f, ?) = ?", mask()),
        ("containsBit", String, "bitAnd(toUInt64(f), ?) = ?", mask()),
        ("unContainsBit", Number, "bitAnd(f, ?) != ?", mask()),
        ("unContainsBit", String, "bitAnd(toUInt64(f), ?) != ?", mask()),
    ]));
    assert_table(&clickhouse::dialect(), expected);
}

#[test]
fn test_mysql_table_fragments() {
    let mut expected = owned(comparison_entries());
    expected.extend(pattern_entries("LIKE"));
    assert_table(&mysql::dialect(), expected);
}
