//! Pattern matching leaf: [`Like`].

use serde::{Deserialize, Serialize};

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

/// Escape character declared on every generated LIKE.
pub const LIKE_ESCAPE: char = '\\';

/// Where wildcards go around the matched text.
///
/// The text is used as given: `%` and `_` inside it keep their wildcard
/// meaning unless the caller escapes them with [`LIKE_ESCAPE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikePattern {
    /// `%text%`: contains.
    #[default]
    Both,
    /// `%text`: ends with.
    PrefixOpen,
    /// `text%`: starts with.
    SuffixOpen,
    /// `text`: exact match.
    None,
}

impl LikePattern {
    pub fn apply(self, text: &str) -> String {
        match self {
            LikePattern::Both => format!("%{}%", text),
            LikePattern::PrefixOpen => format!("%{}", text),
            LikePattern::SuffixOpen => format!("{}%", text),
            LikePattern::None => text.to_string(),
        }
    }
}

/// `field LIKE pattern`.
///
/// Non-text values match against the column cast to text, using the value's
/// display form.
#[derive(Debug, Clone, PartialEq)]
pub struct Like {
    fields: Fields,
    value: Value,
    pattern: LikePattern,
    ignore_case: bool,
}

impl Like {
    pub fn new(fields: impl Into<Fields>, value: impl Into<Value>) -> Self {
        Self {
            fields: fields.into(),
            value: value.into(),
            pattern: LikePattern::default(),
            ignore_case: false,
        }
    }

    pub fn with_pattern(mut self, pattern: LikePattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn pattern(&self) -> LikePattern {
        self.pattern
    }
}

impl Specification for Like {
    fn to_condition(
        &self,
        root: &mut Root<'_>,
        cb: &dyn CriteriaBuilder,
    ) -> SpecResult<Option<Expr>> {
        if !guard::admits(&self.fields, &self.value) {
            return Ok(None);
        }
        let path = resolver::resolve(root, &self.fields.to_path()?)?;
        let path = expressions::as_text(cb, path, &self.value);
        let pattern = cb.literal(&Value::Text(self.pattern.apply(&self.value.to_string())));

        let condition = if self.ignore_case {
            cb.like(
                expressions::fold_case(cb, path),
                expressions::fold_case(cb, pattern),
                LIKE_ESCAPE,
            )
        } else {
            cb.like(path, pattern, LIKE_ESCAPE)
        };
        Ok(Some(condition))
    }
}
