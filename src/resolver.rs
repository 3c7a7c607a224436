//! Attribute path resolution with join deduplication.
//!
//! Resolving `comments.author.email` walks `comments` and `author` as joins
//! and dereferences `email` on the last one. For every association segment
//! an existing node is reused before a new one is created:
//!
//! 1. a LEFT fetch under the current node with that attribute,
//! 2. otherwise a LEFT join under the current node with that attribute,
//! 3. otherwise a new LEFT join.
//!
//! So any number of leaves naming paths under `comments.author` share a
//! single pair of joins.

use tracing::debug;

use crate::error::SpecResult;
use crate::path::AttributePath;
use crate::root::{NodeId, Root};
use crate::sql::expr::Expr;
use crate::sql::query::JoinType;

/// Resolve a path to a queryable column expression.
pub fn resolve(root: &mut Root<'_>, path: &AttributePath) -> SpecResult<Expr> {
    let node = resolve_node(root, path.associations())?;
    root.get(node, path.attribute())
}

/// Walk association segments from the root, reusing or creating join nodes.
pub fn resolve_node(root: &mut Root<'_>, associations: &[String]) -> SpecResult<NodeId> {
    let mut node = NodeId::ROOT;
    for attribute in associations {
        node = get_or_create_join(root, node, attribute)?;
    }
    Ok(node)
}

/// Find a reusable LEFT node for `attribute` under `parent`, or create one.
pub fn get_or_create_join(
    root: &mut Root<'_>,
    parent: NodeId,
    attribute: &str,
) -> SpecResult<NodeId> {
    let existing = root
        .fetches(parent)
        .chain(root.joins(parent))
        .find(|(_, link)| link.attribute == attribute && link.join_type == JoinType::Left)
        .map(|(id, link)| (id, link.origin));

    if let Some((id, origin)) = existing {
        debug!(
            parent = parent.index(),
            attribute,
            node = id.index(),
            ?origin,
            "reusing join node"
        );
        return Ok(id);
    }

    root.join(parent, attribute, JoinType::Left)
}
