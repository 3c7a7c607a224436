//! Inclusive range leaves over ordered values.

use super::{And, Specification};
use crate::criteria::CriteriaBuilder;
use crate::error::SpecResult;
use crate::expressions;
use crate::guard;
use crate::path::Fields;
use crate::resolver;
use crate::root::Root;
use crate::sql::expr::Expr;
use crate::value::{Comparable, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Lower,
    Upper,
}

fn bound_condition(
    fields: &Fields,
    value: &Value,
    bound: Bound,
    root: &mut Root<'_>,
    cb: &dyn CriteriaBuilder,
) -> SpecResult<Option<Expr>> {
    if !guard::admits(fields, value) {
        return Ok(None);
    }
    let path = resolver::resolve(root, &fields.to_path()?)?;
    let path = expressions::normalize(cb, path, value);
    let literal = cb.literal(value);
    Ok(Some(match bound {
        Bound::Lower => cb.greater_or_equal(path, literal),
        Bound::Upper => cb.less_or_equal(path, literal),
    }))
}

/// `field >= value`. Null or blank values are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct GreaterOrEqual {
    fields: Fields,
    value: Value,
}

impl GreaterOrEqual {
    pub fn new<T: Comparable>(fields: impl Into<Fields>, value: T) -> Self {
        Self {
            fields: fields.into(),
            value: value.into(),
        }
    }
}

impl Specification for GreaterOrEqual {
    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        bound_condition(&self.fields, &self.value, Bound::Lower, root, cb)
    }
}

/// `field <= value`. Null or blank values are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct LessOrEqual {
    fields: Fields,
    value: Value,
}

impl LessOrEqual {
    pub fn new<T: Comparable>(fields: impl Into<Fields>, value: T) -> Self {
        Self {
            fields: fields.into(),
            value: value.into(),
        }
    }
}

impl Specification for LessOrEqual {
    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        bound_condition(&self.fields, &self.value, Bound::Upper, root, cb)
    }
}

/// Lower and upper bound of a [`Between`], either of which may be open.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeBounds {
    pub lower: Option<Value>,
    pub upper: Option<Value>,
}

impl RangeBounds {
    pub fn closed<T: Comparable>(lower: T, upper: T) -> Self {
        Self {
            lower: present(lower.into()),
            upper: present(upper.into()),
        }
    }

    pub fn at_least<T: Comparable>(lower: T) -> Self {
        Self {
            lower: present(lower.into()),
            upper: None,
        }
    }

    pub fn at_most<T: Comparable>(upper: T) -> Self {
        Self {
            lower: None,
            upper: present(upper.into()),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Read bounds from a bound list: element 0 is the lower bound and
    /// element 1 the upper. Missing or null elements leave that side open.
    pub fn from_values(values: &[Value]) -> Self {
        Self {
            lower: values.first().cloned().and_then(present),
            upper: values.get(1).cloned().and_then(present),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}

fn present(value: Value) -> Option<Value> {
    (!value.is_null()).then_some(value)
}

/// Inclusive range: `field >= lower AND field <= upper`.
///
/// An open side drops its half of the condition; with both sides open the
/// leaf is neutral. Bounds are not checked against each other, so an
/// inverted range simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Between {
    fields: Fields,
    values: Vec<Value>,
}

impl Between {
    /// Build from a bound list `[lower, upper]`. Elements past the second
    /// are ignored; a single element is a lower bound.
    pub fn new<T, I>(fields: impl Into<Fields>, bounds: I) -> Self
    where
        T: Comparable,
        I: IntoIterator<Item = T>,
    {
        Self {
            fields: fields.into(),
            values: bounds.into_iter().map(Into::into).collect(),
        }
    }

    pub fn range(fields: impl Into<Fields>, bounds: RangeBounds) -> Self {
        Self {
            fields: fields.into(),
            values: vec![
                bounds.lower.unwrap_or(Value::Null),
                bounds.upper.unwrap_or(Value::Null),
            ],
        }
    }

    pub fn bounds(&self) -> RangeBounds {
        RangeBounds::from_values(&self.values)
    }
}

impl Specification for Between {
    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        if !guard::admits_all(&self.fields, &self.values) {
            return Ok(None);
        }

        match self.bounds() {
            RangeBounds {
                lower: None,
                upper: None,
            } => Ok(None),
            RangeBounds {
                lower: Some(lower),
                upper: None,
            } => bound_condition(&self.fields, &lower, Bound::Lower, root, cb),
            RangeBounds {
                lower: None,
                upper: Some(upper),
            } => bound_condition(&self.fields, &upper, Bound::Upper, root, cb),
            RangeBounds {
                lower: Some(lower),
                upper: Some(upper),
            } => And::new()
                .with(GreaterOrEqual {
                    fields: self.fields.clone(),
                    value: lower,
                })
                .with(LessOrEqual {
                    fields: self.fields.clone(),
                    value: upper,
                })
                .to_condition(root, cb),
        }
    }
}
