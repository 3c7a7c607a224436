//! # filterspec
//!
//! Composable, null-aware filter specifications that compile to
//! multi-dialect SQL.
//!
//! ## Architecture
//!
//! Callers build a tree of specifications from search criteria. Absent
//! criteria (null values, blank fields) drop out instead of failing, so the
//! same tree serves every combination of filled-in fields:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          Specification tree (leaves + And/Or/Not)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [guard]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Admitted leaves (others become neutral)           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [resolver + root]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Column expressions over deduplicated LEFT JOIN nodes   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [criteria builder]
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Condition (Expr AST)                    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [compile]
//! ┌─────────────────────────────────────────────────────────┐
//! │           SQL Query (Postgres, DuckDB, MySQL,            │
//! │                  T-SQL, SQLite)                          │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod compile;
pub mod config;
pub mod criteria;
pub mod error;
pub mod expressions;
pub mod filters;
pub mod guard;
pub mod path;
pub mod resolver;
pub mod root;
pub mod schema;
pub mod spec;
pub mod sql;
pub mod value;

pub use error::{SpecError, SpecResult};

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::compile::{compile_condition, compile_filter, CompileOptions, CompileOutput};
    pub use crate::config::Settings;
    pub use crate::criteria::{CriteriaBuilder, SqlCriteria};
    pub use crate::error::{SpecError, SpecResult};
    pub use crate::filters::Filters;
    pub use crate::path::{AttributePath, Fields};
    pub use crate::root::Root;
    pub use crate::schema::{EntitySchema, Schema};
    pub use crate::spec::{
        And, Between, BoxedSpecification, CompositionMode, Empty, Equal, GreaterOrEqual, In,
        IsNotNull, IsNull, LessOrEqual, Like, LikePattern, Not, NotEqual, NullHandling, Or,
        RangeBounds, Specification, SpecificationExt,
    };
    pub use crate::sql::{Dialect, SortDir};
    pub use crate::value::{Comparable, Value};
}
