//! Column projection requests
//!
//! A projection lists the fields to materialize as paths of names from the
//! root. Applying one to a [`SchemaTree`](crate::SchemaTree) prunes the tree's
//! projected view down to those paths.

pub mod builder;

pub use builder::ProjectionBuilder;

/// An ordered list of field paths to project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    paths: Vec<Vec<String>>,
}

impl Projection {
    pub fn new(paths: Vec<Vec<String>>) -> Self {
        Self { paths }
    }

    /// Creates a projection from dot-separated column names such as `"a.b.c"`
    pub fn from_dotted<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ProjectionBuilder::new().add_columns(columns).build()
    }

    pub fn paths(&self) -> &[Vec<String>] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl From<Vec<Vec<String>>> for Projection {
    fn from(paths: Vec<Vec<String>>) -> Self {
        Self::new(paths)
    }
}
