//! Compiled predicate fragments and their composition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Param;

/// A SQL boolean fragment with positional `?` placeholders and the params
/// bound to them, left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predicate {
    pub sql: String,
    pub params: Vec<Param>,
}

impl Predicate {
    pub fn new(sql: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Number of `?` placeholders in the fragment.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }

    /// Compose fragments with a logical operator.
    ///
    /// Nothing to join yields `None`; a single fragment is returned as is;
    /// several are parenthesised with params concatenated in fragment order.
    pub fn join(op: LogicalOp, parts: impl IntoIterator<Item = Predicate>) -> Option<Predicate> {
        let mut parts: Vec<Predicate> = parts.into_iter().collect();
        match parts.len() {
            0 => None,
            1 => parts.pop(),
            _ => {
                let joiner = format!(" {} ", op.keyword());
                let sql = parts
                    .iter()
                    .map(|p| p.sql.as_str())
                    .collect::<Vec<_>>()
                    .join(&joiner);
                let params = parts.into_iter().flat_map(|p| p.params).collect();
                Some(Predicate::new(format!("({})", sql), params))
            }
        }
    }

    /// Render as a full `WHERE` clause.
    pub fn to_where_clause(&self) -> String {
        format!("WHERE {}", self.sql)
    }

    /// Split into the SQL text and its params, in placeholder order.
    pub fn into_parts(self) -> (String, Vec<Param>) {
        (self.sql, self.params)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql)
    }
}

/// Logical operator between predicates. Composition is the caller's job;
/// dialect tables only reserve the symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogicalOp {
    #[default]
    #[serde(rename = "&")]
    And,
    #[serde(rename = "|")]
    Or,
}

impl LogicalOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            LogicalOp::And => "&",
            LogicalOp::Or => "|",
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}
