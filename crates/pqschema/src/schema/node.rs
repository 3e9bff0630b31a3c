//! A single node of the schema tree

use crate::schema::field::{FlatField, TypeTag};
use parquet::basic::Repetition;

/// Handle of a node inside a [`SchemaTree`](crate::SchemaTree) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root is always the first node decoded
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in pre-order
    pub fn index(self) -> usize {
        self.0
    }
}

/// A field of the nested schema
///
/// Identity (name, repetition, type) and levels are fixed when the node is
/// decoded. Indices, paths and the projected child list are derived state,
/// rebuilt by the tree's compile pass whenever the projection changes.
#[derive(Debug, Clone)]
pub struct SchemaNode {
    pub(crate) name: String,
    pub(crate) repetition: Repetition,
    pub(crate) type_tag: Option<TypeTag>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,

    pub(crate) max_definition_level: i16,
    pub(crate) max_repetition_level: i16,

    pub(crate) index_in_parent: usize,
    pub(crate) projected: bool,
    pub(crate) projected_index_in_parent: Option<usize>,
    pub(crate) projected_children: Vec<NodeId>,

    pub(crate) full_name: String,
    pub(crate) ordinal_path: Vec<usize>,
    pub(crate) name_path: Vec<String>,
    pub(crate) projected_ordinal_path: Vec<usize>,
}

impl SchemaNode {
    /// Builds a node from its flattened descriptor, deriving levels from the parent
    pub(crate) fn new(field: &FlatField, parent: Option<(NodeId, &SchemaNode)>) -> Self {
        let (parent_id, max_definition_level, max_repetition_level) = match parent {
            None => (None, 0, 0),
            Some((id, p)) => {
                let def = p.max_definition_level
                    + i16::from(field.repetition != Repetition::REQUIRED);
                let rep = p.max_repetition_level
                    + i16::from(field.repetition == Repetition::REPEATED);
                (Some(id), def, rep)
            }
        };

        Self {
            name: field.name.clone(),
            repetition: field.repetition,
            type_tag: field.type_tag.clone(),
            parent: parent_id,
            children: Vec::new(),
            max_definition_level,
            max_repetition_level,
            index_in_parent: 0,
            projected: true,
            projected_index_in_parent: None,
            projected_children: Vec::new(),
            full_name: String::new(),
            ordinal_path: Vec::new(),
            name_path: Vec::new(),
            projected_ordinal_path: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    /// Type annotation; `None` for groups and for childless groups
    pub fn type_tag(&self) -> Option<&TypeTag> {
        self.type_tag.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// A node with no children is a leaf, whatever its declared type
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of non-required fields from just below the root to this node
    pub fn max_definition_level(&self) -> i16 {
        self.max_definition_level
    }

    /// Number of repeated fields from just below the root to this node
    pub fn max_repetition_level(&self) -> i16 {
        self.max_repetition_level
    }

    /// Position among all siblings; 0 for the root
    pub fn index_in_parent(&self) -> usize {
        self.index_in_parent
    }

    pub fn is_projected(&self) -> bool {
        self.projected
    }

    /// Position among projected siblings, `None` while unprojected or for the root
    pub fn projected_index_in_parent(&self) -> Option<usize> {
        self.projected_index_in_parent
    }

    pub fn projected_children(&self) -> &[NodeId] {
        &self.projected_children
    }

    /// Dot-joined names from just below the root to this node
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn ordinal_path(&self) -> &[usize] {
        &self.ordinal_path
    }

    pub fn name_path(&self) -> &[String] {
        &self.name_path
    }

    /// Projected sibling positions from just below the root; empty while unprojected
    pub fn projected_ordinal_path(&self) -> &[usize] {
        &self.projected_ordinal_path
    }
}
