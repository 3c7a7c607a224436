//! SQL generation module.
//!
//! The rendering target of compiled specifications: a small, type-safe SQL
//! builder that emits multi-dialect SQL. It includes:
//!
//! - [`query`] - SELECT query builder
//! - [`expr`] - Expression AST and builder DSL
//! - [`token`] - Token types for SQL generation
//! - [`dialect`] - SQL dialect implementations

pub mod dialect;
pub mod expr;
pub mod query;
pub mod token;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types at the sql module level
pub use dialect::{Dialect, SqlDialect};
pub use expr::{
    always_false, always_true, col, func, lit_date, lit_int, lit_str, lit_timestamp, table_col,
    table_star, BinaryOperator, Expr, ExprExt, Literal, SortDir,
};
pub use query::{Join, JoinType, LimitOffset, OrderByExpr, Query, TableRef};
pub use token::{Token, TokenStream};
