//! # exprsql: typed filter expressions to SQL predicates
//!
//! Given a field key, an operator symbol and a classified value, exprsql
//! resolves the SQL fragment and bound params for a specific dialect.
//!
//! ## Quick Example
//!
//! ```
//! use exprsql::prelude::*;
//!
//! let dialect = DialectKind::ClickHouse.build();
//!
//! let p = exprsql::compile(&dialect, "==", "age", &Value::from(30)).unwrap();
//! assert_eq!(p.sql, "age = ?");
//! assert_eq!(p.params, vec![Param::Float(30.0)]);
//!
//! // No handler for BOOLEAN `>=`: nothing to add to the WHERE clause.
//! assert!(exprsql::compile(&dialect, ">=", "active", &Value::from(true)).is_none());
//! ```
//!
//! ## Operators
//!
//! | Symbol                        | Kinds                   | ClickHouse | MySQL |
//! |-------------------------------|-------------------------|------------|-------|
//! | `==` `!=`                     | NUMBER BOOLEAN STRING   | ✓          | ✓     |
//! | `>=` `<=` `>` `<`             | NUMBER STRING           | ✓          | ✓     |
//! | `contains` `startsWith` ...   | STRING                  | `ILIKE`    | `LIKE`|
//! | `reg`                         | STRING                  | ✓          | ✓     |
//! | `in` `notIn`                  | STRING                  | ✓          |       |
//! | `containsBit` `unContainsBit` | NUMBER STRING           | ✓          |       |
//! | `&` `\|`                      | reserved                | ✓          | ✓     |

pub mod bind;
pub mod config;
pub mod dialect;
pub mod error;
pub mod filter;
pub mod literal;
pub mod predicate;
pub mod value;

pub mod prelude {
    pub use crate::bind::BindParams;
    pub use crate::config::Config;
    pub use crate::dialect::{Dialect, DialectKind, Handler};
    pub use crate::error::*;
    pub use crate::filter::Filter;
    pub use crate::predicate::{LogicalOp, Predicate};
    pub use crate::value::{Param, Value, ValueKind};
}

/// Compile one predicate against a dialect table.
///
/// Returns `None` when the operator is unknown, the value's kind is not
/// supported by it, or the handler rejects the value.
pub fn compile(
    dialect: &dialect::Dialect,
    op: &str,
    key: &str,
    value: &value::Value,
) -> Option<predicate::Predicate> {
    dialect.compile(op, key, value)
}
