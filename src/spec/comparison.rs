//! Equality leaves: [`Equal`] and [`NotEqual`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::Specification;
use crate::criteria::CriteriaBuilder;
use crate::error::SpecResult;
use crate::expressions;
use crate::guard;
use crate::path::Fields;
use crate::resolver;
use crate::root::Root;
use crate::sql::expr::Expr;
use crate::value::Value;

/// What an equality leaf does when its value is null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullHandling {
    /// A null value means "no criterion".
    #[default]
    Ignore,
    /// A null value matches rows whose field is (or is not) null.
    MatchNullity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Equal,
    NotEqual,
}

impl Operator {
    fn compare(self, cb: &dyn CriteriaBuilder, left: Expr, right: Expr) -> Expr {
        match self {
            Operator::Equal => cb.equal(left, right),
            Operator::NotEqual => cb.not_equal(left, right),
        }
    }

    fn nullity(self, cb: &dyn CriteriaBuilder, path: Expr) -> Expr {
        match self {
            Operator::Equal => cb.is_null(path),
            Operator::NotEqual => cb.is_not_null(path),
        }
    }
}

/// Shared state and evaluation for both equality leaves.
#[derive(Debug, Clone, PartialEq)]
struct Comparison {
    fields: Fields,
    value: Value,
    null_handling: NullHandling,
    ignore_case: bool,
    op: Operator,
}

impl Comparison {
    fn new(op: Operator, fields: Fields, value: Value) -> Self {
        Self {
            fields,
            value,
            null_handling: NullHandling::default(),
            ignore_case: false,
            op,
        }
    }

    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        if !guard::fields(&self.fields) {
            return Ok(None);
        }
        // An ignored null must not leave a join behind
        if self.value.is_missing() && self.null_handling == NullHandling::Ignore {
            trace!(fields = %self.fields, "null value ignored");
            return Ok(None);
        }
        let path = resolver::resolve(root, &self.fields.to_path()?)?;

        let condition = match &self.value {
            value if value.is_missing() => self.op.nullity(cb, path),
            value if value.is_textual() => self.on_text(cb, path),
            value => self.op.compare(
                cb,
                expressions::normalize(cb, path, value),
                cb.literal(value),
            ),
        };
        Ok(Some(condition))
    }

    fn on_text(&self, cb: &dyn CriteriaBuilder, path: Expr) -> Expr {
        let literal = cb.literal(&self.value);
        if self.ignore_case {
            self.op.compare(
                cb,
                expressions::fold_case(cb, path),
                expressions::fold_case(cb, literal),
            )
        } else {
            self.op.compare(cb, path, literal)
        }
    }
}

macro_rules! comparison_leaf {
    ($(#[$meta:meta])* $name:ident => $op:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(Comparison);

        impl $name {
            pub fn new(fields: impl Into<Fields>, value: impl Into<Value>) -> Self {
                Self(Comparison::new($op, fields.into(), value.into()))
            }

            pub fn with_null_handling(mut self, null_handling: NullHandling) -> Self {
                self.0.null_handling = null_handling;
                self
            }

            /// Shorthand for `with_null_handling(NullHandling::MatchNullity)`.
            pub fn match_nullity(self) -> Self {
                self.with_null_handling(NullHandling::MatchNullity)
            }

            /// Compare text case-insensitively. No effect on other values.
            pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
                self.0.ignore_case = ignore_case;
                self
            }

            pub fn fields(&self) -> &Fields {
                &self.0.fields
            }

            pub fn value(&self) -> &Value {
                &self.0.value
            }

            pub fn null_handling(&self) -> NullHandling {
                self.0.null_handling
            }

            pub fn ignore_case(&self) -> bool {
                self.0.ignore_case
            }
        }

        impl Specification for $name {
            fn to_condition(
                &self,
                root: &mut Root<'_>,
                cb: &dyn CriteriaBuilder,
            ) -> SpecResult<Option<Expr>> {
                self.0.to_condition(root, cb)
            }
        }
    };
}

comparison_leaf! {
    /// `field = value`.
    ///
    /// A null value is ignored unless [`NullHandling::MatchNullity`] is set,
    /// in which case it becomes `field IS NULL`.
    Equal => Operator::Equal
}

comparison_leaf! {
    /// `field <> value`, the complement of [`Equal`] over non-null fields.
    ///
    /// With [`NullHandling::MatchNullity`] a null value becomes
    /// `field IS NOT NULL`.
    NotEqual => Operator::NotEqual
}
