//! Error types for exprsql.
//!
//! Compiling a single predicate never fails: an unresolved predicate is a
//! `None`, not an error. These errors cover the layers around the compiler.

use thiserror::Error;

use crate::value::ValueKind;

/// The main error type for exprsql operations.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A literal could not be classified (e.g. an unterminated quote).
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),

    /// Unknown dialect name.
    #[error("Unknown dialect: '{0}'. Expected: clickhouse or mysql")]
    UnknownDialect(String),

    /// Unknown value kind name.
    #[error("Unknown value kind: '{0}'. Expected: number, boolean or string")]
    UnknownKind(String),

    /// Malformed JSON filter tree.
    #[error("Invalid filter: {0}")]
    InvalidFilter(#[from] serde_json::Error),

    /// A condition resolved to nothing while compiling in strict mode.
    #[error("Unresolved predicate: {field} {op} ({kind})")]
    Unresolved {
        field: String,
        op: String,
        kind: ValueKind,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QueryError {
    /// Create an unresolved-predicate error.
    pub fn unresolved(field: impl Into<String>, op: impl Into<String>, kind: ValueKind) -> Self {
        Self::Unresolved {
            field: field.into(),
            op: op.into(),
            kind,
        }
    }
}

/// Result type alias for exprsql operations.
pub type QueryResult<T> = Result<T, QueryError>;
