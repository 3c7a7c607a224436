//! MySQL SQL dialect.
//!
//! MySQL differences from ANSI:
//! - Backtick identifier quoting (`` `name` ``)
//! - Backslash is an escape character inside string literals
//! - Boolean is TINYINT(1), returns 1/0
//! - `DATE(x)` to drop the time part
//! - `CAST(x AS CHAR)` for text casts (VARCHAR is not a cast target)

use super::helpers;
use super::SqlDialect;
use crate::sql::token::TokenStream;

/// MySQL SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct MySql;

impl SqlDialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_backtick(ident)
    }

    fn quote_string(&self, s: &str) -> String {
        helpers::quote_string_backslash(s)
    }

    fn format_bool(&self, b: bool) -> &'static str {
        helpers::format_bool_numeric(b)
    }

    // Uses default emit_limit_offset (LIMIT ... OFFSET ...)

    fn emit_date_truncation(&self, inner: &TokenStream) -> TokenStream {
        helpers::emit_date_function(inner)
    }

    fn text_type(&self) -> &'static str {
        "CHAR"
    }
}
