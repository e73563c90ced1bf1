//! Dialect dispatch tables.
//!
//! A [`Dialect`] maps an operator symbol and a [`ValueKind`] to the
//! [`Handler`] that compiles that case. Tables are built once through
//! [`DialectBuilder`] and are read-only afterwards, so a single table can be
//! shared across threads without locking.
//!
//! A missing `(operator, kind)` entry is not an error: compiling it yields
//! `None` and the caller drops the clause.

pub mod clickhouse;
pub mod common;
pub mod mysql;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::predicate::Predicate;
use crate::value::{Value, ValueKind};

/// Compiles one `(operator, kind)` case: `(field key, value) -> fragment`.
///
/// Returns `None` when the value's concrete type is not the one the handler
/// expects.
pub type Handler = fn(&str, &Value) -> Option<Predicate>;

/// An immutable operator table for one SQL engine.
#[derive(Clone)]
pub struct Dialect {
    name: &'static str,
    operators: HashMap<String, HashMap<ValueKind, Handler>>,
}

impl Dialect {
    /// Start declaring a new dialect table.
    pub fn builder(name: &'static str) -> DialectBuilder {
        DialectBuilder {
            name,
            operators: HashMap::new(),
        }
    }

    /// Dialect name, as accepted by [`DialectKind`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the handler registered for `(op, kind)`.
    pub fn handler(&self, op: &str, kind: ValueKind) -> Option<Handler> {
        self.operators.get(op)?.get(&kind).copied()
    }

    /// Whether `(op, kind)` has a handler.
    pub fn supports(&self, op: &str, kind: ValueKind) -> bool {
        self.handler(op, kind).is_some()
    }

    /// Whether the symbol is present at all, including reserved entries.
    pub fn has_operator(&self, op: &str) -> bool {
        self.operators.contains_key(op)
    }

    /// All operator symbols, sorted.
    pub fn operators(&self) -> Vec<&str> {
        let mut ops: Vec<&str> = self.operators.keys().map(String::as_str).collect();
        ops.sort_unstable();
        ops
    }

    /// Kinds with a handler under `op`, in [`ValueKind::ALL`] order.
    pub fn kinds(&self, op: &str) -> Vec<ValueKind> {
        ValueKind::ALL
            .into_iter()
            .filter(|kind| self.supports(op, *kind))
            .collect()
    }

    /// Compile a predicate, classifying the value with [`Value::kind`].
    pub fn compile(&self, op: &str, key: &str, value: &Value) -> Option<Predicate> {
        self.compile_as(op, key, value.kind(), value)
    }

    /// Compile a predicate using a kind declared by an external classifier.
    ///
    /// The handler still checks the concrete value, so a declared kind that
    /// disagrees with the value compiles to `None`.
    pub fn compile_as(
        &self,
        op: &str,
        key: &str,
        kind: ValueKind,
        value: &Value,
    ) -> Option<Predicate> {
        let Some(handler) = self.handler(op, kind) else {
            tracing::debug!("{}: no handler for {} {} ({})", self.name, key, op, kind);
            return None;
        };

        let predicate = handler(key, value);
        match &predicate {
            Some(p) => tracing::trace!("{}: {} {} -> {}", self.name, key, op, p.sql),
            None => tracing::debug!(
                "{}: {} {} rejected value {} declared as {}",
                self.name,
                key,
                op,
                value,
                kind
            ),
        }
        predicate
    }
}

impl fmt::Debug for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialect")
            .field("name", &self.name)
            .field("operators", &self.operators())
            .finish()
    }
}

/// Declarative builder for a [`Dialect`].
pub struct DialectBuilder {
    name: &'static str,
    operators: HashMap<String, HashMap<ValueKind, Handler>>,
}

impl DialectBuilder {
    /// Register the handlers of one operator, one per supported kind.
    ///
    /// Kinds left out are unsupported for this operator.
    pub fn operator(
        mut self,
        symbol: &str,
        kinds: impl FnOnce(KindHandlers) -> KindHandlers,
    ) -> Self {
        let entry = kinds(KindHandlers::default());
        self.operators
            .entry(symbol.to_string())
            .or_default()
            .extend(entry.handlers);
        self
    }

    /// Reserve a symbol without any handler.
    pub fn reserved(mut self, symbol: &str) -> Self {
        self.operators.entry(symbol.to_string()).or_default();
        self
    }

    pub fn build(self) -> Dialect {
        Dialect {
            name: self.name,
            operators: self.operators,
        }
    }
}

/// Per-kind handlers of a single operator.
#[derive(Default)]
pub struct KindHandlers {
    handlers: HashMap<ValueKind, Handler>,
}

impl KindHandlers {
    pub fn number(self, handler: Handler) -> Self {
        self.kind(ValueKind::Number, handler)
    }

    pub fn boolean(self, handler: Handler) -> Self {
        self.kind(ValueKind::Boolean, handler)
    }

    pub fn string(self, handler: Handler) -> Self {
        self.kind(ValueKind::String, handler)
    }

    pub fn kind(mut self, kind: ValueKind, handler: Handler) -> Self {
        self.handlers.insert(kind, handler);
        self
    }
}

/// Named dialect selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// Analytical database, case-insensitive pattern matching.
    #[default]
    #[serde(alias = "ch")]
    ClickHouse,
    /// Relational database with JSON columns, case-sensitive `LIKE`.
    #[serde(alias = "mysql-json")]
    MySql,
}

impl DialectKind {
    /// Build the dispatch table for this dialect.
    pub fn build(&self) -> Dialect {
        match self {
            DialectKind::ClickHouse => clickhouse::dialect(),
            DialectKind::MySql => mysql::dialect(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DialectKind::ClickHouse => clickhouse::NAME,
            DialectKind::MySql => mysql::NAME,
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DialectKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clickhouse" | "ch" => Ok(DialectKind::ClickHouse),
            "mysql" | "mysql-json" => Ok(DialectKind::MySql),
            _ => Err(QueryError::UnknownDialect(s.to_string())),
        }
    }
}
