//! SQLite dialect.
//!
//! SQLite stores dates and timestamps as ISO-8601 text, so:
//! - Date and timestamp literals are plain strings
//! - `DATE(x)` drops the time part
//! - Booleans are the integers 1/0
//! - OFFSET is only valid after a LIMIT

use super::helpers;
use super::SqlDialect;
use crate::sql::token::TokenStream;

/// SQLite dialect.
#[derive(Debug, Clone, Copy)]
pub struct Sqlite;

impl SqlDialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_double(ident)
    }

    fn format_bool(&self, b: bool) -> &'static str {
        helpers::format_bool_numeric(b)
    }

    fn emit_limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> TokenStream {
        helpers::emit_limit_offset_sqlite(limit, offset)
    }

    fn format_date_literal(&self, date: &str) -> String {
        helpers::quote_string_single(date)
    }

    fn format_timestamp_literal(&self, ts: &str) -> String {
        helpers::quote_string_single(ts)
    }

    fn emit_date_truncation(&self, inner: &TokenStream) -> TokenStream {
        helpers::emit_date_function(inner)
    }

    fn text_type(&self) -> &'static str {
        "TEXT"
    }
}
