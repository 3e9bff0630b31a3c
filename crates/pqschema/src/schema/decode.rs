//! Reconstruction of the schema tree from its pre-order flattened form

use crate::error::{Result, SchemaError};
use crate::schema::field::FlatField;
use crate::schema::node::{NodeId, SchemaNode};
use tracing::warn;

/// Raw tree produced by the decoder, before any derived state is compiled
#[derive(Debug)]
pub(crate) struct DecodedSchema {
    pub(crate) nodes: Vec<SchemaNode>,
    pub(crate) leaves: Vec<NodeId>,
}

/// Walks a flattened field list with a single shared cursor
///
/// Nodes are pushed into the arena in the order they are read, so a node's
/// id is also its position in the flattened list. Open groups are tracked on
/// an explicit stack, so nesting depth is bounded by the input length rather
/// than the thread's stack.
pub(crate) struct FlatSchemaDecoder<'a> {
    fields: &'a [FlatField],
    cursor: usize,
    nodes: Vec<SchemaNode>,
    leaves: Vec<NodeId>,
}

impl<'a> FlatSchemaDecoder<'a> {
    pub(crate) fn decode(fields: &'a [FlatField]) -> Result<DecodedSchema> {
        let root = fields.first().ok_or(SchemaError::EmptyInput)?;

        let mut decoder = Self {
            fields,
            cursor: 0,
            nodes: Vec::with_capacity(fields.len()),
            leaves: Vec::new(),
        };
        decoder.nodes.push(SchemaNode::new(root, None));
        decoder.parse()?;

        let consumed = decoder.cursor + 1;
        if consumed < fields.len() {
            warn!(
                consumed,
                total = fields.len(),
                "Ignoring flattened schema entries not reachable from the root"
            );
        }

        Ok(DecodedSchema {
            nodes: decoder.nodes,
            leaves: decoder.leaves,
        })
    }

    fn parse(&mut self) -> Result<()> {
        let fields = self.fields;

        // (group, children still to read)
        let mut open: Vec<(NodeId, usize)> = Vec::new();
        match fields[NodeId::ROOT.0].num_children {
            0 => self.leaves.push(NodeId::ROOT),
            n => open.push((NodeId::ROOT, n)),
        }

        while let Some((parent, remaining)) = open.last_mut() {
            if *remaining == 0 {
                open.pop();
                continue;
            }
            *remaining -= 1;
            let parent = *parent;

            self.cursor += 1;
            let field = fields
                .get(self.cursor)
                .ok_or(SchemaError::MalformedFlatList {
                    position: self.cursor,
                    len: fields.len(),
                })?;

            let child_id = NodeId(self.nodes.len());
            let child = SchemaNode::new(field, Some((parent, &self.nodes[parent.0])));
            self.nodes.push(child);
            self.nodes[parent.0].children.push(child_id);

            match field.num_children {
                0 => self.leaves.push(child_id),
                n => open.push((child_id, n)),
            }
        }
        Ok(())
    }
}
