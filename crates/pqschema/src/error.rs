//! Error types for schema reconstruction and projection

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while building or projecting a schema tree
///
/// All of these are structural metadata errors. They are never transient, so
/// callers opening a file or preparing a query should abort on them.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The flattened field list was empty, so there is no root
    #[error("Invalid empty schema: flattened field list has no root")]
    EmptyInput,

    /// Declared child counts would read past the end of the flattened list
    #[error(
        "Malformed flattened schema: declared children require field #{position}, \
         but the list only has {len} entries"
    )]
    MalformedFlatList { position: usize, len: usize },

    /// A field name did not match any child at the given location
    #[error("Unknown field '{name}' under '{context}'")]
    UnknownField { name: String, context: String },

    /// A node id that was not issued by this tree
    #[error("Invalid node id {index}: tree has {num_nodes} nodes")]
    InvalidNode { index: usize, num_nodes: usize },

    /// Error reported by the parquet crate while inspecting a schema
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

impl SchemaError {
    pub(crate) fn unknown_field(name: &str, context: &[&str]) -> Self {
        let context = if context.is_empty() {
            "<root>".to_string()
        } else {
            context.join(".")
        };
        SchemaError::UnknownField {
            name: name.to_string(),
            context,
        }
    }

    /// Returns the offending field name for `UnknownField` errors
    pub fn field_name(&self) -> Option<&str> {
        match self {
            SchemaError::UnknownField { name, .. } => Some(name),
            _ => None,
        }
    }
}
