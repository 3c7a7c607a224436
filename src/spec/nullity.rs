//! Nullity leaves: [`IsNull`] and [`IsNotNull`].

use super::Specification;
use crate::criteria::CriteriaBuilder;
use crate::error::SpecResult;
use crate::guard;
use crate::path::Fields;
use crate::resolver;
use crate::root::Root;
use crate::sql::expr::Expr;

fn resolve_admitted(fields: &Fields, root: &mut Root<'_>) -> SpecResult<Option<Expr>> {
    if !guard::fields(fields) {
        return Ok(None);
    }
    resolver::resolve(root, &fields.to_path()?).map(Some)
}

/// `field IS NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct IsNull {
    fields: Fields,
}

impl IsNull {
    pub fn new(fields: impl Into<Fields>) -> Self {
        Self {
            fields: fields.into(),
        }
    }
}

impl Specification for IsNull {
    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        Ok(resolve_admitted(&self.fields, root)?.map(|path| cb.is_null(path)))
    }
}

/// `field IS NOT NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct IsNotNull {
    fields: Fields,
}

impl IsNotNull {
    pub fn new(fields: impl Into<Fields>) -> Self {
        Self {
            fields: fields.into(),
        }
    }
}

impl Specification for IsNotNull {
    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        Ok(resolve_admitted(&self.fields, root)?.map(|path| cb.is_not_null(path)))
    }
}
