//! Specifications: composable, null-aware filter predicates.
//!
//! A [`Specification`] turns itself into an optional condition against a
//! traversal context. `Ok(None)` means "no condition": the criterion was
//! absent (a null value, a blank field) and the specification stays out of
//! the query entirely. Composites skip such children, so a search form with
//! half its fields empty still compiles to a sensible filter.
//!
//! ```text
//! leaf ──► guard ──► resolver ──► expressions ──► CriteriaBuilder ──► Expr
//!                                                        ▲
//! And / Or / Not ─── fold children, skip neutral ones ───┘
//! ```

mod comparison;
mod composite;
mod membership;
mod nullity;
mod pattern;
mod range;

use std::fmt;

pub use comparison::{Equal, NotEqual, NullHandling};
pub use composite::{And, CompositionMode, Not, Or};
pub use membership::In;
pub use nullity::{IsNotNull, IsNull};
pub use pattern::{Like, LikePattern};
pub use range::{Between, GreaterOrEqual, LessOrEqual, RangeBounds};

use crate::criteria::CriteriaBuilder;
use crate::error::SpecResult;
use crate::root::Root;
use crate::sql::expr::Expr;

/// A filter predicate over an entity.
pub trait Specification: fmt::Debug + Send + Sync {
    /// Build the condition, or `None` when this specification does not
    /// constrain the query.
    fn to_condition(&self, root: &mut Root<'_>, cb: &dyn CriteriaBuilder)
        -> SpecResult<Option<Expr>>;
}

/// An owned, type-erased specification.
pub type BoxedSpecification = Box<dyn Specification>;

impl<S: Specification + ?Sized> Specification for Box<S> {
    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        (**self).to_condition(root, cb)
    }
}

/// The neutral specification: never constrains anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl Specification for Empty {
    fn to_condition(&self, _: &mut Root<'_>, _: &dyn CriteriaBuilder) -> SpecResult<Option<Expr>> {
        Ok(None)
    }
}

/// Fluent composition for any specification.
pub trait SpecificationExt: Specification + Sized + 'static {
    fn and(self, other: impl Specification + 'static) -> And {
        And::new().with(self).with(other)
    }

    fn or(self, other: impl Specification + 'static) -> Or {
        Or::new().with(self).with(other)
    }

    #[allow(clippy::should_implement_trait)]
    fn not(self) -> Not {
        Not::new(self)
    }

    fn boxed(self) -> BoxedSpecification {
        Box::new(self)
    }
}

impl<S: Specification + 'static> SpecificationExt for S {}
