//! Adapts a resolved path to the type of the value it is compared with.

use crate::criteria::CriteriaBuilder;
use crate::sql::expr::Expr;
use crate::value::Value;

/// Path as it should be compared against `value`.
///
/// Date values compare against the calendar date of the column, so a
/// date-time column matches a date on any time of that day.
pub fn normalize(cb: &dyn CriteriaBuilder, path: Expr, value: &Value) -> Expr {
    match value {
        Value::Date(_) => cb.truncate_to_date(path),
        _ => path,
    }
}

/// Lower-case an expression for case-insensitive comparison.
pub fn fold_case(cb: &dyn CriteriaBuilder, expr: Expr) -> Expr {
    cb.lower(expr)
}

/// Path as character data, for pattern matching.
///
/// Textual values match text columns as-is; any other value type means the
/// column is not text and is cast first.
pub fn as_text(cb: &dyn CriteriaBuilder, path: Expr, value: &Value) -> Expr {
    if value.is_textual() {
        path
    } else {
        cb.cast_to_text(path)
    }
}
