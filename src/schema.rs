//! Entity metadata: how attribute names map to tables, columns and joins.
//!
//! Specifications only ever talk about attribute names. The schema is what
//! lets the traversal context turn `comments.author.email` into a chain of
//! `LEFT JOIN`s and a qualified column.
//!
//! ```ignore
//! let schema = Schema::new()
//!     .entity(
//!         EntitySchema::new("User", "users")
//!             .attributes(["id", "username", "email"])
//!             .attribute_column("createdAt", "created_at")
//!             .one_to_many("comments", "Comment", "author_id"),
//!     )
//!     .entity(
//!         EntitySchema::new("Comment", "comments")
//!             .attributes(["id", "content"])
//!             .many_to_one("author", "User", "author_id"),
//!     );
//! ```

use std::collections::BTreeMap;

use crate::error::{SpecError, SpecResult};

/// Primary key column assumed by the `many_to_one` / `one_to_many` shorthands.
pub const DEFAULT_KEY_COLUMN: &str = "id";

/// A traversable relationship from one entity to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    /// Target entity name.
    pub target: String,
    /// Column on the owning side used in the ON clause.
    pub local_column: String,
    /// Column on the target side used in the ON clause.
    pub remote_column: String,
}

impl Association {
    pub fn new(target: &str, local_column: &str, remote_column: &str) -> Self {
        Self {
            target: target.into(),
            local_column: local_column.into(),
            remote_column: remote_column.into(),
        }
    }
}

/// Metadata for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "builders have no effect until used"]
pub struct EntitySchema {
    pub name: String,
    pub table: String,
    attributes: BTreeMap<String, String>,
    associations: BTreeMap<String, Association>,
}

impl EntitySchema {
    pub fn new(name: &str, table: &str) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            attributes: BTreeMap::new(),
            associations: BTreeMap::new(),
        }
    }

    /// Attribute stored in a column of the same name.
    pub fn attribute(self, name: &str) -> Self {
        self.attribute_column(name, name)
    }

    /// Several attributes stored in columns of the same name.
    pub fn attributes<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        for name in names {
            self.attributes.insert(name.into(), name.into());
        }
        self
    }

    /// Attribute stored in a differently named column.
    pub fn attribute_column(mut self, name: &str, column: &str) -> Self {
        self.attributes.insert(name.into(), column.into());
        self
    }

    pub fn association(mut self, name: &str, association: Association) -> Self {
        self.associations.insert(name.into(), association);
        self
    }

    /// This entity holds `fk_column` referencing the target's key.
    pub fn many_to_one(self, name: &str, target: &str, fk_column: &str) -> Self {
        self.association(
            name,
            Association::new(target, fk_column, DEFAULT_KEY_COLUMN),
        )
    }

    /// The target holds `fk_column` referencing this entity's key.
    pub fn one_to_many(self, name: &str, target: &str, fk_column: &str) -> Self {
        self.association(
            name,
            Association::new(target, DEFAULT_KEY_COLUMN, fk_column),
        )
    }

    /// Column backing a scalar attribute.
    pub fn column(&self, attribute: &str) -> SpecResult<&str> {
        if let Some(column) = self.attributes.get(attribute) {
            return Ok(column);
        }
        if self.associations.contains_key(attribute) {
            return Err(SpecError::NotAnAttribute {
                entity: self.name.clone(),
                attribute: attribute.into(),
            });
        }
        Err(self.unknown(attribute))
    }

    /// Association reachable through `attribute`.
    pub fn association_for(&self, attribute: &str) -> SpecResult<&Association> {
        if let Some(assoc) = self.associations.get(attribute) {
            return Ok(assoc);
        }
        if self.attributes.contains_key(attribute) {
            return Err(SpecError::NotAnAssociation {
                entity: self.name.clone(),
                attribute: attribute.into(),
            });
        }
        Err(self.unknown(attribute))
    }

    fn unknown(&self, attribute: &str) -> SpecError {
        SpecError::UnknownAttribute {
            entity: self.name.clone(),
            attribute: attribute.into(),
        }
    }
}

/// A set of entities keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "builders have no effect until used"]
pub struct Schema {
    entities: BTreeMap<String, EntitySchema>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity(mut self, entity: EntitySchema) -> Self {
        self.entities.insert(entity.name.clone(), entity);
        self
    }

    pub fn get(&self, name: &str) -> SpecResult<&EntitySchema> {
        self.entities
            .get(name)
            .ok_or_else(|| SpecError::UnknownEntity(name.into()))
    }
}
