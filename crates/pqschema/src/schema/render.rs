//! Brace-structured text rendering of a schema tree, for diagnostics only

use crate::schema::node::NodeId;
use crate::schema::tree::SchemaTree;
use std::fmt;

/// Options for [`SchemaTree::render_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix written before the outermost brace
    pub prefix: String,

    /// Added to the prefix for each nesting level (default: two spaces)
    pub indent: String,

    /// Skip unprojected nodes and their subtrees
    pub projected_only: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            indent: "  ".to_string(),
            projected_only: false,
        }
    }
}

struct Rendered<'a> {
    tree: &'a SchemaTree,
    options: &'a RenderOptions,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree
            .fmt_node(f, NodeId::ROOT, &self.options.prefix, self.options)
    }
}

impl SchemaTree {
    /// Renders the tree starting at `prefix`, one line per leaf
    pub fn render_text(&self, prefix: &str, projected_only: bool) -> String {
        self.render_with(&RenderOptions {
            prefix: prefix.to_string(),
            projected_only,
            ..RenderOptions::default()
        })
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        Rendered {
            tree: self,
            options,
        }
        .to_string()
    }

    fn fmt_node(
        &self,
        f: &mut impl fmt::Write,
        id: NodeId,
        prefix: &str,
        options: &RenderOptions,
    ) -> fmt::Result {
        let node = &self[id];
        if options.projected_only && !node.projected {
            return Ok(());
        }

        f.write_str(prefix)?;
        if node.is_leaf() {
            match node.type_tag() {
                Some(tag) => writeln!(
                    f,
                    "{}: {:?} {} {};",
                    node.index_in_parent, node.repetition, tag, node.name
                ),
                None => writeln!(
                    f,
                    "{}: {:?} struct {};",
                    node.index_in_parent, node.repetition, node.name
                ),
            }
        } else {
            if node.is_root() {
                writeln!(f, "{{")?;
            } else {
                writeln!(
                    f,
                    "{}: {:?} struct {} {{",
                    node.index_in_parent, node.repetition, node.name
                )?;
            }

            let child_prefix = format!("{prefix}{}", options.indent);
            for &child in node.children() {
                self.fmt_node(f, child, &child_prefix, options)?;
            }
            writeln!(f, "{prefix}}};")
        }
    }
}

impl fmt::Display for SchemaTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, NodeId::ROOT, "", &RenderOptions::default())
    }
}
