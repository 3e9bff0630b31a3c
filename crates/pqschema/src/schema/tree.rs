//! The schema tree: node arena, leaf registry and projection state

use crate::error::{Result, SchemaError};
use crate::projection::Projection;
use crate::schema::decode::FlatSchemaDecoder;
use crate::schema::field::{FlatField, TypeTag};
use crate::schema::node::{NodeId, SchemaNode};
use std::ops::Index;
use tracing::debug;

/// A nested schema reconstructed from its flattened form
///
/// Topology, names and levels never change after construction. The set of
/// projected nodes can be replaced with [`SchemaTree::set_projection`]; every
/// change recompiles the derived per-node state in one pass, so readers only
/// ever observe a consistent snapshot.
#[derive(Debug, Clone)]
pub struct SchemaTree {
    pub(crate) nodes: Vec<SchemaNode>,
    pub(crate) leaves: Vec<NodeId>,
    pub(crate) projected_leaves: Vec<NodeId>,
}

/// Per-column view handed to column readers and writers
#[derive(Debug, Clone, PartialEq)]
pub struct LeafColumn<'a> {
    pub id: NodeId,
    pub full_name: &'a str,
    pub ordinal_path: &'a [usize],
    pub max_definition_level: i16,
    pub max_repetition_level: i16,
    pub type_tag: Option<&'a TypeTag>,
}

impl SchemaTree {
    /// Builds a fully compiled tree from a pre-order flattened field list
    ///
    /// Entry 0 is the root. Every node starts out projected.
    pub fn from_flat(fields: &[FlatField]) -> Result<Self> {
        let decoded = FlatSchemaDecoder::decode(fields)?;

        let mut tree = Self {
            projected_leaves: decoded.leaves.clone(),
            nodes: decoded.nodes,
            leaves: decoded.leaves,
        };
        tree.compile()?;

        debug!(
            nodes = tree.nodes.len(),
            leaves = tree.leaves.len(),
            "Decoded schema tree"
        );
        Ok(tree)
    }

    /// Replaces the current projection with the given paths
    ///
    /// Every node along every path is marked projected; the root always is.
    /// A path ending at a group projects the group but none of its children.
    /// All paths are resolved before anything is changed, so an unknown field
    /// leaves the previous projection in place.
    pub fn set_projection(&mut self, projection: &Projection) -> Result<()> {
        let mut marked = Vec::new();
        for path in projection.paths() {
            let mut node = NodeId::ROOT;
            for name in path {
                let idx = self.index_of(node, name, false)?;
                node = self.nodes[node.0].children[idx];
                marked.push(node);
            }
        }

        self.clear_projection();
        self.nodes[NodeId::ROOT.0].projected = true;
        for id in marked {
            self.nodes[id.0].projected = true;
        }

        self.compile()?;
        self.refresh_projected_leaves();

        debug!(
            paths = projection.paths().len(),
            projected_leaves = self.projected_leaves.len(),
            leaves = self.leaves.len(),
            "Applied schema projection"
        );
        Ok(())
    }

    /// Projects every node again, restoring the state right after decoding
    pub fn project_all(&mut self) -> Result<()> {
        for node in &mut self.nodes {
            node.projected = true;
        }
        self.compile()?;
        self.refresh_projected_leaves();
        Ok(())
    }

    fn clear_projection(&mut self) {
        for node in &mut self.nodes {
            node.projected = false;
        }
    }

    fn refresh_projected_leaves(&mut self) {
        let nodes = &self.nodes;
        self.projected_leaves = self
            .leaves
            .iter()
            .copied()
            .filter(|id| nodes[id.0].projected)
            .collect();
    }

    pub fn root(&self) -> &SchemaNode {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Returns the node for `id`, or `None` if it does not belong to this tree
    pub fn get(&self, id: NodeId) -> Option<&SchemaNode> {
        self.nodes.get(id.0)
    }

    pub(crate) fn checked(&self, id: NodeId) -> Result<&SchemaNode> {
        self.nodes.get(id.0).ok_or(SchemaError::InvalidNode {
            index: id.0,
            num_nodes: self.nodes.len(),
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in pre-order, root first
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SchemaNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx), node))
    }

    /// Every leaf, in pre-order
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn num_leaves(&self) -> usize {
        self.leaves.len()
    }

    /// The `i`-th leaf column in pre-order
    pub fn leaf(&self, i: usize) -> Option<&SchemaNode> {
        self.leaves.get(i).map(|id| &self.nodes[id.0])
    }

    pub fn leaf_nodes(&self) -> impl Iterator<Item = &SchemaNode> {
        self.leaves.iter().map(|id| &self.nodes[id.0])
    }

    /// Leaves currently projected, in the same relative order as [`Self::leaves`]
    pub fn projected_leaves(&self) -> &[NodeId] {
        &self.projected_leaves
    }

    pub fn projected_leaf_nodes(&self) -> impl Iterator<Item = &SchemaNode> {
        self.projected_leaves.iter().map(|id| &self.nodes[id.0])
    }

    /// Column bookkeeping for every projected leaf
    pub fn projected_columns(&self) -> Vec<LeafColumn<'_>> {
        self.projected_leaves
            .iter()
            .map(|&id| {
                let node = &self.nodes[id.0];
                LeafColumn {
                    id,
                    full_name: &node.full_name,
                    ordinal_path: &node.ordinal_path,
                    max_definition_level: node.max_definition_level,
                    max_repetition_level: node.max_repetition_level,
                    type_tag: node.type_tag.as_ref(),
                }
            })
            .collect()
    }

    /// Highest definition level of any leaf
    pub fn max_definition_level(&self) -> i16 {
        self.leaf_nodes()
            .map(SchemaNode::max_definition_level)
            .max()
            .unwrap_or(0)
    }

    /// Looks up a non-root node by its dotted full name
    pub fn find(&self, full_name: &str) -> Option<NodeId> {
        self.nodes()
            .find(|(_, node)| !node.is_root() && node.full_name == full_name)
            .map(|(id, _)| id)
    }

    /// Resolves a path of names from the root, ignoring projection
    pub fn find_path<S: AsRef<str>>(&self, path: &[S]) -> Result<NodeId> {
        let mut node = NodeId::ROOT;
        for name in path {
            let idx = self.index_of(node, name.as_ref(), false)?;
            node = self.nodes[node.0].children[idx];
        }
        Ok(node)
    }

    /// Nodes from just below the root down to `id`
    pub fn schema_path(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let mut path = Vec::new();
        let mut current = id;
        while let Some(parent) = self.checked(current)?.parent {
            path.push(current);
            current = parent;
        }
        path.reverse();
        Ok(path)
    }
}

/// Panics for ids not issued by this tree; use [`SchemaTree::get`] for
/// ids of unknown origin
impl Index<NodeId> for SchemaTree {
    type Output = SchemaNode;

    fn index(&self, id: NodeId) -> &SchemaNode {
        &self.nodes[id.0]
    }
}
