//! Flattened field descriptors handed over by the metadata decoder

use parquet::basic::{ConvertedType, LogicalType, Repetition, Type as PhysicalType};
use std::fmt;

/// Physical and logical type annotation of a leaf column
///
/// Only used for display; the schema tree never validates it.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeTag {
    /// Physical storage type
    pub physical: PhysicalType,

    /// Legacy converted type annotation (`NONE` when absent)
    pub converted: ConvertedType,

    /// Logical type annotation, if any
    pub logical: Option<LogicalType>,

    /// Byte width for FIXED_LEN_BYTE_ARRAY columns, -1 otherwise
    pub type_length: i32,
}

impl TypeTag {
    pub fn new(physical: PhysicalType) -> Self {
        Self {
            physical,
            converted: ConvertedType::NONE,
            logical: None,
            type_length: -1,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.physical)?;
        if self.converted != ConvertedType::NONE {
            write!(f, " ({:?})", self.converted)?;
        }
        Ok(())
    }
}

/// One entry of a pre-order flattened schema
///
/// Entry 0 is the root. Each entry declares how many of the following
/// entries (recursively) are its direct children.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatField {
    pub name: String,
    pub repetition: Repetition,
    pub type_tag: Option<TypeTag>,
    pub num_children: usize,
}

impl FlatField {
    /// Creates a group entry with `num_children` direct children
    pub fn group(name: impl Into<String>, repetition: Repetition, num_children: usize) -> Self {
        Self {
            name: name.into(),
            repetition,
            type_tag: None,
            num_children,
        }
    }

    /// Creates a primitive leaf entry
    pub fn leaf(name: impl Into<String>, repetition: Repetition, physical: PhysicalType) -> Self {
        Self {
            name: name.into(),
            repetition,
            type_tag: Some(TypeTag::new(physical)),
            num_children: 0,
        }
    }

    /// Sets the converted type annotation of a leaf entry
    pub fn with_converted_type(mut self, converted: ConvertedType) -> Self {
        if let Some(tag) = self.type_tag.as_mut() {
            tag.converted = converted;
        }
        self
    }

    /// Sets the logical type annotation of a leaf entry
    pub fn with_logical_type(mut self, logical: LogicalType) -> Self {
        if let Some(tag) = self.type_tag.as_mut() {
            tag.logical = Some(logical);
        }
        self
    }
}
