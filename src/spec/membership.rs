//! Set membership leaf: [`In`].

use super::Specification;
use crate::criteria::CriteriaBuilder;
use crate::error::SpecResult;
use crate::guard;
use crate::path::Fields;
use crate::resolver;
use crate::root::Root;
use crate::sql::expr::Expr;
use crate::value::Value;

/// `field IN (v1, v2, ...)` over the non-null elements of a collection.
///
/// An empty collection, or one holding only nulls, is neutral.
#[derive(Debug, Clone, PartialEq)]
pub struct In {
    fields: Fields,
    values: Vec<Value>,
}

impl In {
    pub fn new<T, I>(fields: impl Into<Fields>, values: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        Self {
            fields: fields.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Specification for In {
    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        if !guard::admits_all(&self.fields, &self.values) {
            return Ok(None);
        }
        let path = resolver::resolve(root, &self.fields.to_path()?)?;
        let members = self
            .values
            .iter()
            .filter(|v| !v.is_null())
            .map(|v| cb.literal(v))
            .collect();
        Ok(Some(cb.in_list(path, members)))
    }
}
