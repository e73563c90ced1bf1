//! JSON filter trees composed into a single predicate.
//!
//! This is the caller side of the compiler: each leaf condition is compiled
//! through a [`Dialect`], unresolved leaves are dropped, and groups are
//! joined with `AND` / `OR`.
//!
//! ```json
//! {"op": "&", "children": [
//!     {"field": "age", "op": ">=", "value": 18},
//!     {"op": "|", "children": [
//!         {"field": "name", "op": "startsWith", "value": "bo"},
//!         {"field": "vip", "op": "==", "value": true}
//!     ]}
//! ]}
//! ```

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{QueryError, QueryResult};
use crate::predicate::{LogicalOp, Predicate};
use crate::value::Value;

/// A node of a filter tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    /// Logical group, `&` or `|`.
    Group {
        op: LogicalOp,
        children: Vec<Filter>,
    },
    /// Leaf comparison.
    Condition {
        field: String,
        op: String,
        value: Value,
    },
}

impl Filter {
    pub fn from_json(json: &str) -> QueryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn condition(field: impl Into<String>, op: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Condition {
            field: field.into(),
            op: op.into(),
            value: value.into(),
        }
    }

    pub fn and(children: Vec<Filter>) -> Self {
        Filter::Group {
            op: LogicalOp::And,
            children,
        }
    }

    pub fn or(children: Vec<Filter>) -> Self {
        Filter::Group {
            op: LogicalOp::Or,
            children,
        }
    }

    /// Compile the tree, silently dropping conditions that do not resolve.
    ///
    /// Returns `None` when nothing in the tree applies.
    pub fn compile(&self, dialect: &Dialect) -> Option<Predicate> {
        match self {
            Filter::Group { op, children } => {
                Predicate::join(*op, children.iter().filter_map(|c| c.compile(dialect)))
            }
            Filter::Condition { field, op, value } => dialect.compile(op, field, value),
        }
    }

    /// Compile the tree, failing on the first condition that does not resolve.
    ///
    /// Empty groups still compile to nothing.
    pub fn compile_strict(&self, dialect: &Dialect) -> QueryResult<Option<Predicate>> {
        match self {
            Filter::Group { op, children } => {
                let mut parts = Vec::with_capacity(children.len());
                for child in children {
                    if let Some(p) = child.compile_strict(dialect)? {
                        parts.push(p);
                    }
                }
                Ok(Predicate::join(*op, parts))
            }
            Filter::Condition { field, op, value } => dialect
                .compile(op, field, value)
                .map(Some)
                .ok_or_else(|| QueryError::unresolved(field, op, value.kind())),
        }
    }
}
