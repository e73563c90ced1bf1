//! Binding compiled params onto a sqlx query.
//!
//! Nothing here executes SQL; the caller owns the pool and the query.

use sqlx::any::AnyArguments;
use sqlx::query::Query;
use sqlx::Any;

use crate::value::Param;

/// Bind every [`Param`] in order, one per `?` placeholder.
pub trait BindParams<'q> {
    fn bind_params(self, params: &'q [Param]) -> Self;
}

impl<'q> BindParams<'q> for Query<'q, Any, AnyArguments<'q>> {
    fn bind_params(self, params: &'q [Param]) -> Self {
        params.iter().fold(self, |query, param| match param {
            Param::Int(v) => query.bind(*v),
            Param::Float(v) => query.bind(*v),
            Param::Bool(v) => query.bind(*v),
            Param::String(v) => query.bind(v.as_str()),
        })
    }
}
