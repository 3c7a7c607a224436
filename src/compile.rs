//! End-to-end compilation from a specification to SQL.
//!
//! This module provides the high-level API for turning a specification into
//! a query over an entity:
//!
//! ```text
//! Schema + entity → Root → register fetches → Specification → condition
//!                                                                │
//!                              SQL ← Query ← joins + ORDER BY ◄──┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use filterspec::compile::{compile_filter, CompileOptions};
//! use filterspec::prelude::*;
//!
//! let schema = Schema::new().entity(
//!     EntitySchema::new("User", "users").attributes(["id", "username", "email"]),
//! );
//!
//! let spec = Equal::new("username", "ann").and(Like::new("email", "example.com"));
//! let options = CompileOptions::default().with_dialect(Dialect::Sqlite);
//! let output = compile_filter(&schema, "User", &spec, options)?;
//! println!("{}", output.sql);
//! ```

use tracing::debug;

use crate::config::Settings;
use crate::criteria::SqlCriteria;
use crate::error::SpecResult;
use crate::path::AttributePath;
use crate::resolver;
use crate::root::{NodeId, Root};
use crate::schema::Schema;
use crate::spec::Specification;
use crate::sql::expr::{Expr, SortDir};
use crate::sql::query::{JoinType, OrderByExpr, Query};
use crate::sql::Dialect;

// ============================================================================
// Options
// ============================================================================

/// Options for compilation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileOptions {
    /// SQL dialect to generate.
    pub dialect: Dialect,

    /// Emit `SELECT DISTINCT`.
    pub distinct: bool,

    /// Association paths to eager-load, e.g. `"comments.author"`.
    pub fetches: Vec<String>,

    /// Sort keys as attribute paths.
    pub order_by: Vec<(String, SortDir)>,

    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl CompileOptions {
    /// Start from the `[sql]` section of loaded settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            dialect: settings.sql.dialect,
            distinct: settings.sql.distinct,
            ..Self::default()
        }
    }

    /// Set the SQL dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// Eager-load an association path. Filters naming the same path reuse
    /// these joins instead of adding their own.
    pub fn with_fetch(mut self, path: impl Into<String>) -> Self {
        self.fetches.push(path.into());
        self
    }

    pub fn with_order_by(mut self, path: impl Into<String>, dir: SortDir) -> Self {
        self.order_by.push((path.into(), dir));
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Result of compiling a specification to SQL.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// The generated SQL string.
    pub sql: String,

    /// The SQL query AST (for further manipulation if needed).
    pub query: Query,

    /// The dialect used for generation.
    pub dialect: Dialect,

    /// Joined nodes in the FROM clause, fetches included.
    pub join_count: usize,
}

// ============================================================================
// Compilation Functions
// ============================================================================

/// Compile a specification over `entity` to a full query.
///
/// # Arguments
///
/// * `schema` - Entity metadata
/// * `entity` - Name of the root entity
/// * `spec` - The filter to apply
/// * `options` - Compilation options (dialect, fetches, ordering, paging)
///
/// # Returns
///
/// A `CompileOutput` containing the SQL string and query AST.
pub fn compile_filter(
    schema: &Schema,
    entity: &str,
    spec: &dyn Specification,
    options: CompileOptions,
) -> SpecResult<CompileOutput> {
    // Step 1: Traversal context with eager fetches registered up front
    let mut root = Root::new(schema, entity)?;
    for fetch in &options.fetches {
        register_fetch(&mut root, &AttributePath::parse(fetch)?)?;
    }

    // Step 2: Condition
    let condition = spec.to_condition(&mut root, &SqlCriteria)?;

    // Step 3: Sort keys (may add joins of their own)
    let mut order_by = Vec::with_capacity(options.order_by.len());
    for (path, dir) in &options.order_by {
        let expr = resolver::resolve(&mut root, &AttributePath::parse(path)?)?;
        order_by.push(OrderByExpr {
            expr,
            dir: Some(*dir),
        });
    }

    // Step 4: Assemble
    let mut query = root.to_query(condition);
    if options.distinct {
        query = query.distinct();
    }
    if !order_by.is_empty() {
        query = query.order_by(order_by);
    }
    if let Some(limit) = options.limit {
        query = query.limit(limit);
    }
    if let Some(offset) = options.offset {
        query = query.offset(offset);
    }

    let sql = query.to_sql(options.dialect);
    debug!(
        entity,
        dialect = %options.dialect,
        joins = root.join_count(),
        filtered = query.where_clause.is_some(),
        "compiled filter"
    );

    Ok(CompileOutput {
        sql,
        join_count: root.join_count(),
        query,
        dialect: options.dialect,
    })
}

/// Compile only the condition, for embedding in a hand-written query.
///
/// Returns `None` when the specification does not constrain anything.
/// Column references use the aliases of [`compile_filter`] (`t0` for the
/// root), so the caller's FROM clause must match.
pub fn compile_condition(
    schema: &Schema,
    entity: &str,
    spec: &dyn Specification,
    dialect: Dialect,
) -> SpecResult<Option<String>> {
    let mut root = Root::new(schema, entity)?;
    let condition: Option<Expr> = spec.to_condition(&mut root, &SqlCriteria)?;
    Ok(condition.map(|c| c.to_sql(dialect)))
}

/// Walk a fetch path, reusing fetch nodes already registered for a prefix.
fn register_fetch(root: &mut Root<'_>, path: &AttributePath) -> SpecResult<NodeId> {
    let mut node = NodeId::ROOT;
    for attribute in path.segments() {
        let existing = root
            .fetches(node)
            .find(|(_, link)| link.attribute == *attribute)
            .map(|(id, _)| id);
        node = match existing {
            Some(id) => id,
            None => root.fetch(node, attribute, JoinType::Left)?,
        };
    }
    Ok(node)
}
