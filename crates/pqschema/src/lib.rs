//! # pqschema
//!
//! Reconstructs a nested columnar schema from its flattened, pre-order
//! representation and maintains a projection over it.
//!
//! For every field the tree derives:
//! - maximum definition and repetition levels, fixed at decode time
//! - sibling index, full name and ordinal path from the root
//! - position among projected siblings, recomputed whenever the projection changes
//!
//! ## Example
//!
//! ```
//! use pqschema::{FlatField, Projection, Repetition, SchemaTree};
//! use parquet::basic::Type as PhysicalType;
//!
//! let mut tree = SchemaTree::from_flat(&[
//!     FlatField::group("schema", Repetition::REQUIRED, 2),
//!     FlatField::leaf("a", Repetition::REQUIRED, PhysicalType::INT32),
//!     FlatField::group("b", Repetition::OPTIONAL, 1),
//!     FlatField::leaf("c", Repetition::REPEATED, PhysicalType::INT64),
//! ])
//! .unwrap();
//!
//! tree.set_projection(&Projection::from_dotted(["b.c"])).unwrap();
//!
//! for column in tree.projected_columns() {
//!     println!(
//!         "{} def={} rep={}",
//!         column.full_name, column.max_definition_level, column.max_repetition_level
//!     );
//! }
//! ```

pub mod error;
pub mod flatten;
pub mod projection;
pub mod schema;

pub use error::{Result, SchemaError};
pub use flatten::flatten_parquet_schema;
pub use projection::{Projection, ProjectionBuilder};
pub use schema::{
    FlatField, LeafColumn, NodeId, RenderOptions, Repetition, SchemaNode, SchemaTree, TypeTag,
};
