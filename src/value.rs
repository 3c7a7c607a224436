//! Comparison values carried by leaf specifications.
//!
//! A [`Value`] is the runtime payload a criterion compares against. `None`
//! from an `Option<T>` becomes [`Value::Null`], which the guard treats as
//! "criterion absent".

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::sql::expr::{Expr, Literal};

/// A single comparison value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Char(char),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Uuid(Uuid),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for `Null` and for floats with no SQL literal (NaN, infinities).
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(x) => !x.is_finite(),
            _ => false,
        }
    }

    /// True for values compared as character data (`Text` and `Char`).
    pub fn is_textual(&self) -> bool {
        matches!(self, Value::Text(_) | Value::Char(_))
    }

    /// Borrow the text of a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to a SQL literal expression.
    ///
    /// NaN and infinities have no SQL literal and become `NULL`.
    pub fn to_expr(&self) -> Expr {
        Expr::Literal(match self {
            Value::Null => Literal::Null,
            Value::Bool(b) => Literal::Bool(*b),
            Value::Int(n) => Literal::Int(*n),
            Value::Float(f) if f.is_finite() => Literal::Float(*f),
            Value::Float(_) => Literal::Null,
            Value::Text(s) => Literal::String(s.clone()),
            Value::Char(c) => Literal::String(c.to_string()),
            Value::Date(d) => Literal::Date(*d),
            Value::DateTime(dt) => Literal::Timestamp(*dt),
            Value::Uuid(u) => Literal::String(u.hyphenated().to_string()),
        })
    }
}

impl fmt::Display for Value {
    /// The textual form used when a value feeds a LIKE pattern.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            // Matches the SQL text form of a REAL: 3.0 renders as "3.0", not "3"
            Value::Float(x) => f.write_str(ryu::Buffer::new().format(*x)),
            Value::Text(s) => write!(f, "{}", s),
            Value::Char(c) => write!(f, "{}", c),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f")),
            Value::Uuid(u) => write!(f, "{}", u.hyphenated()),
        }
    }
}

macro_rules! value_from {
    ($variant:ident: $($ty:ty),+ => |$v:ident| $conv:expr) => {
        $(
            impl From<$ty> for Value {
                fn from($v: $ty) -> Self {
                    Value::$variant($conv)
                }
            }
        )+
    };
}

value_from!(Int: i8, i16, i32, i64, u8, u16, u32 => |n| n as i64);
value_from!(Float: f32, f64 => |x| x as f64);
value_from!(Bool: bool => |b| b);
value_from!(Char: char => |c| c);
value_from!(Date: NaiveDate => |d| d);
value_from!(DateTime: NaiveDateTime => |dt| dt);
value_from!(Uuid: Uuid => |u| u);
value_from!(Text: String => |s| s);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Marker for types with a total order usable in range comparisons.
///
/// Booleans and UUIDs convert into [`Value`] but are deliberately not
/// `Comparable`, so `GreaterOrEqual::new("flag", true)` does not compile.
pub trait Comparable: Into<Value> {}

macro_rules! comparable {
    ($($ty:ty),+) => {
        $(impl Comparable for $ty {})+
    };
}

comparable!(i8, i16, i32, i64, u8, u16, u32, f32, f64, char, String, NaiveDate, NaiveDateTime);

impl Comparable for &str {}
impl Comparable for &String {}
impl<T: Comparable> Comparable for Option<T> {}
