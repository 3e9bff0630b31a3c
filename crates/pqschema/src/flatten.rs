//! Adapter from schemas already parsed by the `parquet` crate
//!
//! Footer decoding stays with the parquet crate; this module only walks its
//! schema types and produces the pre-order flattened list the tree is built
//! from, the same shape a file footer stores.

use crate::error::Result;
use crate::schema::{FlatField, SchemaTree, TypeTag};
use parquet::basic::Repetition;
use parquet::schema::parser::parse_message_type;
use parquet::schema::types::{SchemaDescriptor, Type};

/// Flattens a parquet schema type into pre-order field descriptors
///
/// The root message type carries no repetition and is treated as REQUIRED.
pub fn flatten_parquet_schema(root: &Type) -> Vec<FlatField> {
    let mut fields = Vec::new();
    flatten_into(root, &mut fields);
    fields
}

fn flatten_into(ty: &Type, out: &mut Vec<FlatField>) {
    let info = ty.get_basic_info();
    let repetition = if info.has_repetition() {
        info.repetition()
    } else {
        Repetition::REQUIRED
    };

    match ty {
        Type::GroupType { fields, .. } => {
            out.push(FlatField::group(info.name(), repetition, fields.len()));
            for field in fields {
                flatten_into(field, out);
            }
        }
        Type::PrimitiveType {
            physical_type,
            type_length,
            ..
        } => out.push(FlatField {
            name: info.name().to_string(),
            repetition,
            type_tag: Some(TypeTag {
                physical: *physical_type,
                converted: info.converted_type(),
                logical: info.logical_type(),
                type_length: *type_length,
            }),
            num_children: 0,
        }),
    }
}

impl SchemaTree {
    /// Builds a tree from a parquet schema descriptor
    pub fn from_parquet(descr: &SchemaDescriptor) -> Result<Self> {
        Self::from_parquet_type(descr.root_schema())
    }

    pub fn from_parquet_type(root: &Type) -> Result<Self> {
        Self::from_flat(&flatten_parquet_schema(root))
    }

    /// Builds a tree from a textual parquet message type
    pub fn from_message_type(message_type: &str) -> Result<Self> {
        let root = parse_message_type(message_type)?;
        Self::from_parquet_type(&root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use parquet::basic::{ConvertedType, Type as PhysicalType};

    const MESSAGE: &str = "
        message schema {
            required int64 id;
            optional group name {
                required binary first (UTF8);
                optional binary last (UTF8);
            }
            optional group tags (LIST) {
                repeated group list {
                    optional binary element (UTF8);
                }
            }
            required fixed_len_byte_array(16) uuid;
        }
    ";

    #[test]
    fn test_flatten_preorder() {
        let root = parse_message_type(MESSAGE).unwrap();
        let fields = flatten_parquet_schema(&root);

        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["schema", "id", "name", "first", "last", "tags", "list", "element", "uuid"]
        );
        assert_eq!(fields[0].repetition, Repetition::REQUIRED);
        assert_eq!(fields[0].num_children, 4);
        assert_eq!(fields[6].repetition, Repetition::REPEATED);

        let first = fields[3].type_tag.as_ref().unwrap();
        assert_eq!(first.physical, PhysicalType::BYTE_ARRAY);
        assert_eq!(first.converted, ConvertedType::UTF8);

        let uuid = fields[8].type_tag.as_ref().unwrap();
        assert_eq!(uuid.physical, PhysicalType::FIXED_LEN_BYTE_ARRAY);
        assert_eq!(uuid.type_length, 16);
    }

    #[test]
    fn test_from_message_type() {
        let tree = SchemaTree::from_message_type(MESSAGE).unwrap();
        let leaves: Vec<&str> = tree.leaf_nodes().map(|n| n.full_name()).collect();
        assert_eq!(
            leaves,
            vec!["id", "name.first", "name.last", "tags.list.element", "uuid"]
        );
        assert_eq!(tree.max_definition_level(), 3);
    }

    #[test]
    fn test_invalid_message_type() {
        let result = SchemaTree::from_message_type("message schema { required foo x; }");
        assert!(matches!(result, Err(SchemaError::Parquet(_))));
    }
}
