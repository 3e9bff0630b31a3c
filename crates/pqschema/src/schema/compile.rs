//! Derived per-node state: sibling indices, projected children and paths
//!
//! Levels are fixed at decode time, everything else here is recomputed from
//! scratch on each call. Cost is linear in the number of nodes times the
//! sibling fan-out, which is negligible next to reading any column data.

use crate::error::{Result, SchemaError};
use crate::schema::node::NodeId;
use crate::schema::tree::SchemaTree;

impl SchemaTree {
    /// Returns the position of the first child of `parent` named `name`
    ///
    /// With `projected_only`, unprojected children are skipped and do not
    /// count towards the position.
    pub fn index_of(&self, parent: NodeId, name: &str, projected_only: bool) -> Result<usize> {
        let mut idx = 0;
        for &child in &self.checked(parent)?.children {
            let child = &self.nodes[child.0];
            if projected_only && !child.projected {
                continue;
            }
            if child.name == name {
                return Ok(idx);
            }
            idx += 1;
        }
        Err(SchemaError::unknown_field(name, &self.names_to(parent)))
    }

    /// Names from just below the root down to `id`, read straight from the
    /// topology so it is valid even while paths are being recompiled
    pub(crate) fn names_to(&self, id: NodeId) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            names.push(self.nodes[current.0].name.as_str());
            current = parent;
        }
        names.reverse();
        names
    }

    /// Recomputes derived state for the whole tree, top-down from the root
    pub(crate) fn compile(&mut self) -> Result<()> {
        self.compile_node(NodeId::ROOT)
    }

    fn compile_node(&mut self, id: NodeId) -> Result<()> {
        if let Some(parent) = self.nodes[id.0].parent {
            let node = &self.nodes[id.0];
            let index = self.index_of(parent, &node.name, false)?;
            let projected_index = if node.projected {
                Some(self.index_of(parent, &node.name, true)?)
            } else {
                None
            };

            let node = &mut self.nodes[id.0];
            node.index_in_parent = index;
            node.projected_index_in_parent = projected_index;
        }

        for i in 0..self.nodes[id.0].children.len() {
            let child = self.nodes[id.0].children[i];
            self.compile_node(child)?;
        }

        let projected_children: Vec<NodeId> = self.nodes[id.0]
            .children
            .iter()
            .copied()
            .filter(|child| self.nodes[child.0].projected)
            .collect();

        let projected = self.nodes[id.0].projected;
        let mut ordinal_path = Vec::new();
        let mut name_path = Vec::new();
        let mut projected_ordinal_path = Vec::new();

        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            let node = &self.nodes[current.0];
            ordinal_path.push(node.index_in_parent);
            name_path.push(node.name.clone());
            if projected {
                if let Some(idx) = node.projected_index_in_parent {
                    projected_ordinal_path.push(idx);
                }
            }
            current = parent;
        }
        ordinal_path.reverse();
        name_path.reverse();
        projected_ordinal_path.reverse();

        let node = &mut self.nodes[id.0];
        node.full_name = name_path.join(".");
        node.projected_children = projected_children;
        node.ordinal_path = ordinal_path;
        node.name_path = name_path;
        node.projected_ordinal_path = projected_ordinal_path;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SchemaError;
    use crate::schema::field::FlatField;
    use crate::schema::node::NodeId;
    use crate::schema::tree::SchemaTree;
    use crate::Projection;
    use parquet::basic::{Repetition, Type as PhysicalType};

    fn sample() -> SchemaTree {
        SchemaTree::from_flat(&[
            FlatField::group("schema", Repetition::REQUIRED, 3),
            FlatField::leaf("a", Repetition::REQUIRED, PhysicalType::INT32),
            FlatField::leaf("b", Repetition::OPTIONAL, PhysicalType::INT64),
            FlatField::group("c", Repetition::OPTIONAL, 2),
            FlatField::leaf("d", Repetition::REQUIRED, PhysicalType::FLOAT),
            FlatField::leaf("e", Repetition::REPEATED, PhysicalType::DOUBLE),
        ])
        .unwrap()
    }

    #[test]
    fn test_index_of_all_children() {
        let tree = sample();
        assert_eq!(tree.index_of(NodeId::ROOT, "a", false).unwrap(), 0);
        assert_eq!(tree.index_of(NodeId::ROOT, "c", false).unwrap(), 2);
        assert_eq!(tree.index_of(NodeId(3), "e", false).unwrap(), 1);
    }

    #[test]
    fn test_index_of_unknown_reports_context() {
        let tree = sample();
        let err = tree.index_of(NodeId(3), "zzz", false).unwrap_err();
        match err {
            SchemaError::UnknownField { name, context } => {
                assert_eq!(name, "zzz");
                assert_eq!(context, "c");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_index_of_projected_only_skips_unprojected() {
        let mut tree = sample();
        tree.set_projection(&Projection::from_dotted(["c.e"])).unwrap();

        // `d` is unprojected: visible to the full lookup only
        assert_eq!(tree.index_of(NodeId(3), "d", false).unwrap(), 0);
        assert!(matches!(
            tree.index_of(NodeId(3), "d", true),
            Err(SchemaError::UnknownField { .. })
        ));
        assert_eq!(tree.index_of(NodeId(3), "e", true).unwrap(), 0);
        assert_eq!(tree.index_of(NodeId::ROOT, "c", true).unwrap(), 0);
    }

    #[test]
    fn test_index_of_foreign_node() {
        let tree = sample();
        let err = tree.index_of(NodeId(42), "a", false).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidNode {
                index: 42,
                num_nodes: 6
            }
        ));
    }

    #[test]
    fn test_paths_after_compile() {
        let tree = sample();
        let e = &tree[NodeId(5)];
        assert_eq!(e.full_name(), "c.e");
        assert_eq!(e.ordinal_path(), &[2, 1]);
        assert_eq!(e.name_path(), &["c".to_string(), "e".to_string()]);
        assert_eq!(e.projected_ordinal_path(), &[2, 1]);
        assert_eq!(e.index_in_parent(), 1);
        assert_eq!(e.projected_index_in_parent(), Some(1));

        let root = tree.root();
        assert_eq!(root.full_name(), "");
        assert!(root.ordinal_path().is_empty());
        assert_eq!(root.projected_children().len(), 3);
    }

    #[test]
    fn test_projected_paths_skip_unprojected_siblings() {
        let mut tree = sample();
        tree.set_projection(&Projection::from_dotted(["b", "c.e"])).unwrap();

        let e = &tree[NodeId(5)];
        assert_eq!(e.ordinal_path(), &[2, 1]);
        assert_eq!(e.projected_ordinal_path(), &[1, 0]);

        let d = &tree[NodeId(4)];
        assert!(!d.is_projected());
        assert_eq!(d.projected_index_in_parent(), None);
        assert!(d.projected_ordinal_path().is_empty());
        assert_eq!(d.full_name(), "c.d");

        assert_eq!(tree.root().projected_children(), &[NodeId(2), NodeId(3)]);
        assert_eq!(tree[NodeId(3)].projected_children(), &[NodeId(5)]);
    }

    #[test]
    fn test_duplicate_sibling_names_resolve_to_first() {
        let tree = SchemaTree::from_flat(&[
            FlatField::group("schema", Repetition::REQUIRED, 2),
            FlatField::leaf("dup", Repetition::REQUIRED, PhysicalType::INT32),
            FlatField::leaf("dup", Repetition::OPTIONAL, PhysicalType::INT64),
        ])
        .unwrap();
        assert_eq!(tree[NodeId(1)].index_in_parent(), 0);
        assert_eq!(tree[NodeId(2)].index_in_parent(), 0);
    }
}
