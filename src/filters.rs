//! Leaf factory carrying project-wide defaults.
//!
//! Search endpoints usually want the same null policy and case handling on
//! every field. `Filters` builds leaves with those defaults from the
//! `[defaults]` section of the settings file already applied; each leaf can
//! still override them afterwards.

use crate::config::{Defaults, Settings};
use crate::path::Fields;
use crate::spec::{Equal, Like, NotEqual};
use crate::value::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters {
    defaults: Defaults,
}

impl Filters {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.defaults)
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn equal(&self, fields: impl Into<Fields>, value: impl Into<Value>) -> Equal {
        Equal::new(fields, value)
            .with_null_handling(self.defaults.null_handling)
            .with_ignore_case(self.defaults.ignore_case)
    }

    pub fn not_equal(&self, fields: impl Into<Fields>, value: impl Into<Value>) -> NotEqual {
        NotEqual::new(fields, value)
            .with_null_handling(self.defaults.null_handling)
            .with_ignore_case(self.defaults.ignore_case)
    }

    pub fn like(&self, fields: impl Into<Fields>, value: impl Into<Value>) -> Like {
        Like::new(fields, value)
            .with_pattern(self.defaults.like_pattern)
            .with_ignore_case(self.defaults.ignore_case)
    }
}
