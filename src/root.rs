//! Traversal context: the arena of join nodes a compilation builds up.
//!
//! Node 0 is the root entity. Every other node records the parent it hangs
//! off, the association attribute that reached it, its join type and whether
//! it was pre-registered as an eager fetch or created as a plain join. Nodes
//! are never removed, so a [`NodeId`] stays valid for the life of the `Root`.

use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::schema::{Association, Schema};
use crate::sql::expr::{table_col, table_star, Expr, ExprExt};
use crate::sql::query::{JoinType, Query, TableRef};

/// Index of a node in the traversal arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root entity.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// How a join node came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOrigin {
    /// Registered up front for eager loading.
    Fetch,
    /// Created on demand.
    Join,
}

/// Edge from a parent node to a joined node.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinLink {
    pub parent: NodeId,
    pub attribute: String,
    pub join_type: JoinType,
    pub origin: JoinOrigin,
    pub association: Association,
}

/// One entity occurrence in the FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalNode {
    pub entity: String,
    pub table: String,
    pub alias: String,
    /// `None` for the root.
    pub link: Option<JoinLink>,
}

/// The per-compilation traversal context.
#[derive(Debug)]
pub struct Root<'s> {
    schema: &'s Schema,
    nodes: Vec<TraversalNode>,
}

impl<'s> Root<'s> {
    pub fn new(schema: &'s Schema, entity: &str) -> SpecResult<Self> {
        let meta = schema.get(entity)?;
        Ok(Self {
            schema,
            nodes: vec![TraversalNode {
                entity: meta.name.clone(),
                table: meta.table.clone(),
                alias: alias_for(0),
                link: None,
            }],
        })
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    pub fn node(&self, id: NodeId) -> SpecResult<&TraversalNode> {
        self.nodes.get(id.0).ok_or(SpecError::UnknownNode(id.0))
    }

    /// Number of joined nodes (excluding the root).
    pub fn join_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Qualified column expression for a scalar attribute of `node`.
    pub fn get(&self, node: NodeId, attribute: &str) -> SpecResult<Expr> {
        let n = self.node(node)?;
        let column = self.schema.get(&n.entity)?.column(attribute)?;
        Ok(table_col(&n.alias, column))
    }

    /// Fetch nodes directly under `node`, in creation order.
    pub fn fetches(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &JoinLink)> + '_ {
        self.children(node, JoinOrigin::Fetch)
    }

    /// Plain join nodes directly under `node`, in creation order.
    pub fn joins(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &JoinLink)> + '_ {
        self.children(node, JoinOrigin::Join)
    }

    /// Create a new join through `attribute`. Never reuses an existing node.
    pub fn join(&mut self, node: NodeId, attribute: &str, join_type: JoinType) -> SpecResult<NodeId> {
        self.attach(node, attribute, join_type, JoinOrigin::Join)
    }

    /// Register an eager fetch through `attribute`. Never reuses an existing node.
    pub fn fetch(
        &mut self,
        node: NodeId,
        attribute: &str,
        join_type: JoinType,
    ) -> SpecResult<NodeId> {
        self.attach(node, attribute, join_type, JoinOrigin::Fetch)
    }

    /// Assemble `SELECT root.* FROM ... LEFT JOIN ... WHERE condition`.
    ///
    /// Fetched nodes contribute their columns to the select list.
    pub fn to_query(&self, condition: Option<Expr>) -> Query {
        let root = &self.nodes[0];
        let mut select = vec![table_star(&root.alias)];
        select.extend(
            self.nodes
                .iter()
                .filter(|n| matches!(&n.link, Some(l) if l.origin == JoinOrigin::Fetch))
                .map(|n| table_star(&n.alias)),
        );

        let mut query = Query::new()
            .select(select)
            .from(TableRef::new(&root.table).with_alias(&root.alias));

        for node in &self.nodes[1..] {
            let Some(link) = &node.link else { continue };
            let parent = &self.nodes[link.parent.0];
            let on = table_col(&parent.alias, &link.association.local_column)
                .eq(table_col(&node.alias, &link.association.remote_column));
            query = query.join(
                link.join_type,
                TableRef::new(&node.table).with_alias(&node.alias),
                on,
            );
        }

        match condition {
            Some(condition) => query.filter(condition),
            None => query,
        }
    }

    fn children(
        &self,
        parent: NodeId,
        origin: JoinOrigin,
    ) -> impl Iterator<Item = (NodeId, &JoinLink)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(move |(i, n)| match &n.link {
                Some(link) if link.parent == parent && link.origin == origin => {
                    Some((NodeId(i), link))
                }
                _ => None,
            })
    }

    fn attach(
        &mut self,
        parent: NodeId,
        attribute: &str,
        join_type: JoinType,
        origin: JoinOrigin,
    ) -> SpecResult<NodeId> {
        let parent_entity = self.node(parent)?.entity.clone();
        let association = self
            .schema
            .get(&parent_entity)?
            .association_for(attribute)?
            .clone();
        let target = self.schema.get(&association.target)?;

        let id = NodeId(self.nodes.len());
        let alias = alias_for(id.0);
        debug!(
            parent = parent.0,
            attribute,
            alias = %alias,
            ?origin,
            ?join_type,
            "created join node"
        );
        self.nodes.push(TraversalNode {
            entity: target.name.clone(),
            table: target.table.clone(),
            alias,
            link: Some(JoinLink {
                parent,
                attribute: attribute.into(),
                join_type,
                origin,
                association,
            }),
        });
        Ok(id)
    }
}

fn alias_for(index: usize) -> String {
    format!("t{}", index)
}
