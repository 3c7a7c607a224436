//! Composite specifications: [`And`], [`Or`] and [`Not`].
//!
//! Children are folded left to right. A child that yields no condition is
//! skipped, so `And(a, <neutral>, b)` is `a AND b`. The empty cases are
//! asymmetric: an empty `And` is neutral (matches everything) while an empty
//! `Or` is an explicit `1 = 0` (matches nothing).

use tracing::trace;

use super::{BoxedSpecification, Specification};
use crate::criteria::CriteriaBuilder;
use crate::error::SpecResult;
use crate::root::Root;
use crate::sql::expr::Expr;

/// How [`Not`] combines its children before negating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositionMode {
    #[default]
    And,
    Or,
}

fn fold(
    children: &[BoxedSpecification],
    root: &mut Root<'_>,
    cb: &dyn CriteriaBuilder,
    mode: CompositionMode,
) -> SpecResult<Option<Expr>> {
    let mut acc: Option<Expr> = None;
    for child in children {
        let Some(condition) = child.to_condition(root, cb)? else {
            continue;
        };
        acc = Some(match acc {
            None => condition,
            Some(left) => match mode {
                CompositionMode::And => cb.and(left, condition),
                CompositionMode::Or => cb.or(left, condition),
            },
        });
    }
    Ok(acc)
}

macro_rules! children_builders {
    ($name:ident) => {
        impl $name {
            /// Append a child, consuming and returning the composite.
            pub fn with(mut self, spec: impl Specification + 'static) -> Self {
                self.children.push(Box::new(spec));
                self
            }

            /// Append a child in place.
            pub fn add(&mut self, spec: impl Specification + 'static) -> &mut Self {
                self.children.push(Box::new(spec));
                self
            }

            pub fn len(&self) -> usize {
                self.children.len()
            }

            pub fn is_empty(&self) -> bool {
                self.children.is_empty()
            }
        }

        impl From<Vec<BoxedSpecification>> for $name {
            fn from(children: Vec<BoxedSpecification>) -> Self {
                let mut composite = Self::default();
                composite.children = children;
                composite
            }
        }

        impl FromIterator<BoxedSpecification> for $name {
            fn from_iter<I: IntoIterator<Item = BoxedSpecification>>(iter: I) -> Self {
                Self::from(iter.into_iter().collect::<Vec<_>>())
            }
        }
    };
}

/// All children must hold. With no children, no condition at all.
#[derive(Debug, Default)]
pub struct And {
    children: Vec<BoxedSpecification>,
}

impl And {
    pub fn new() -> Self {
        Self::default()
    }
}

children_builders!(And);

impl Specification for And {
    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        fold(&self.children, root, cb, CompositionMode::And)
    }
}

/// At least one child must hold. With no children, nothing matches.
#[derive(Debug, Default)]
pub struct Or {
    children: Vec<BoxedSpecification>,
}

impl Or {
    pub fn new() -> Self {
        Self::default()
    }
}

children_builders!(Or);

impl Specification for Or {
    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        if self.children.is_empty() {
            trace!("empty disjunction");
            return Ok(Some(cb.disjunction()));
        }
        fold(&self.children, root, cb, CompositionMode::Or)
    }
}

/// Negation of its children, combined by [`CompositionMode`] first.
///
/// When the combined children yield no condition, neither does `Not`:
/// negating "no criterion" is still no criterion.
#[derive(Debug, Default)]
pub struct Not {
    children: Vec<BoxedSpecification>,
    mode: CompositionMode,
}

impl Not {
    pub fn new(spec: impl Specification + 'static) -> Self {
        Self::default().with(spec)
    }

    pub fn with_mode(mut self, mode: CompositionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> CompositionMode {
        self.mode
    }
}

children_builders!(Not);

impl Specification for Not {
    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        match fold(&self.children, root, cb, self.mode)? {
            Some(condition) => Ok(Some(cb.not(condition))),
            None => {
                trace!(children = self.children.len(), "negation of no condition");
                Ok(None)
            }
        }
    }
}
