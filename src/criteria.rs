//! The condition factory specifications build predicates through.
//!
//! Leaves never construct `Expr` nodes directly; they ask a
//! [`CriteriaBuilder`] for them. [`SqlCriteria`] is the implementation that
//! produces the SQL AST from [`crate::sql`].

use std::fmt;

use crate::sql::expr::{always_false, always_true, func, Expr, ExprExt};
use crate::value::Value;

/// Operations a query engine must offer to evaluate specifications.
pub trait CriteriaBuilder: fmt::Debug {
    fn literal(&self, value: &Value) -> Expr;

    fn equal(&self, left: Expr, right: Expr) -> Expr;
    fn not_equal(&self, left: Expr, right: Expr) -> Expr;
    fn greater_or_equal(&self, left: Expr, right: Expr) -> Expr;
    fn less_or_equal(&self, left: Expr, right: Expr) -> Expr;

    /// `expr LIKE pattern ESCAPE escape`.
    fn like(&self, expr: Expr, pattern: Expr, escape: char) -> Expr;
    fn in_list(&self, expr: Expr, values: Vec<Expr>) -> Expr;
    fn is_null(&self, expr: Expr) -> Expr;
    fn is_not_null(&self, expr: Expr) -> Expr;

    fn and(&self, left: Expr, right: Expr) -> Expr;
    fn or(&self, left: Expr, right: Expr) -> Expr;
    fn not(&self, expr: Expr) -> Expr;
    /// A predicate every row satisfies.
    fn conjunction(&self) -> Expr;
    /// A predicate no row satisfies.
    fn disjunction(&self) -> Expr;

    fn lower(&self, expr: Expr) -> Expr;
    fn truncate_to_date(&self, expr: Expr) -> Expr;
    fn cast_to_text(&self, expr: Expr) -> Expr;
}

/// Builds conditions as [`Expr`] trees.
///
/// Logical combinations are parenthesized so that nesting survives
/// rendering regardless of operator precedence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlCriteria;

impl CriteriaBuilder for SqlCriteria {
    fn literal(&self, value: &Value) -> Expr {
        value.to_expr()
    }

    fn equal(&self, left: Expr, right: Expr) -> Expr {
        left.eq(right)
    }

    fn not_equal(&self, left: Expr, right: Expr) -> Expr {
        left.ne(right)
    }

    fn greater_or_equal(&self, left: Expr, right: Expr) -> Expr {
        left.gte(right)
    }

    fn less_or_equal(&self, left: Expr, right: Expr) -> Expr {
        left.lte(right)
    }

    fn like(&self, expr: Expr, pattern: Expr, escape: char) -> Expr {
        expr.like_escape(pattern, escape)
    }

    fn in_list(&self, expr: Expr, values: Vec<Expr>) -> Expr {
        expr.in_list(values)
    }

    fn is_null(&self, expr: Expr) -> Expr {
        expr.is_null()
    }

    fn is_not_null(&self, expr: Expr) -> Expr {
        expr.is_not_null()
    }

    fn and(&self, left: Expr, right: Expr) -> Expr {
        left.and(right).paren()
    }

    fn or(&self, left: Expr, right: Expr) -> Expr {
        left.or(right).paren()
    }

    fn not(&self, expr: Expr) -> Expr {
        match expr {
            Expr::Paren(_) => expr.not(),
            other => other.paren().not(),
        }
    }

    fn conjunction(&self) -> Expr {
        always_true()
    }

    fn disjunction(&self) -> Expr {
        always_false()
    }

    fn lower(&self, expr: Expr) -> Expr {
        func("LOWER", vec![expr])
    }

    fn truncate_to_date(&self, expr: Expr) -> Expr {
        Expr::TruncateToDate(Box::new(expr))
    }

    fn cast_to_text(&self, expr: Expr) -> Expr {
        Expr::CastText(Box::new(expr))
    }
}
