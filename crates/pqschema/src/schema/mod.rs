//! Nested schema tree reconstruction and derived level/path bookkeeping
//!
//! The tree is decoded once from a pre-order flattened field list and then
//! compiled: every node learns its sibling index, its position among
//! projected siblings and its paths from the root.

mod compile;
mod decode;
pub mod field;
pub mod node;
pub mod render;
pub mod tree;

pub use field::{FlatField, TypeTag};
pub use node::{NodeId, SchemaNode};
pub use render::RenderOptions;
pub use tree::{LeafColumn, SchemaTree};
pub use parquet::basic::Repetition;
