//! Error types for specification construction and compilation.
//!
//! Admission failures (blank fields, absent values) are never errors: they
//! make a specification neutral. Errors are reserved for malformed attribute
//! paths and for references the entity metadata cannot resolve.

use thiserror::Error;

use crate::config::SettingsError;

/// Result type for specification operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while building or compiling specifications.
#[derive(Error, Debug)]
pub enum SpecError {
    /// A dotted path was blank or had a blank segment.
    #[error("invalid attribute path: {0:?}")]
    InvalidAttributePath(String),

    /// The schema has no entity with this name.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// The entity has neither an attribute nor an association with this name.
    #[error("entity {entity} has no attribute {attribute}")]
    UnknownAttribute { entity: String, attribute: String },

    /// A join was requested through a scalar attribute.
    #[error("{entity}.{attribute} is not an association")]
    NotAnAssociation { entity: String, attribute: String },

    /// An association was dereferenced as if it were a scalar column.
    #[error("{entity}.{attribute} is an association, not a comparable attribute")]
    NotAnAttribute { entity: String, attribute: String },

    /// A node id that does not belong to the traversal context.
    #[error("unknown traversal node: {0}")]
    UnknownNode(usize),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
