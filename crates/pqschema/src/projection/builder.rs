//! Projection builder for assembling column paths
//!
//! Paths keep their insertion order. Duplicates are kept as well, since
//! applying the same path twice is harmless.

use crate::projection::Projection;

/// Fluent builder for [`Projection`]
#[derive(Debug, Clone, Default)]
pub struct ProjectionBuilder {
    paths: Vec<Vec<String>>,
}

impl ProjectionBuilder {
    /// Creates a builder with no paths selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path given as individual field names
    pub fn add_path(mut self, path: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.paths.push(path.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a column by its dot-separated full name
    ///
    /// An empty name selects nothing below the root.
    pub fn add_column(mut self, column_name: impl AsRef<str>) -> Self {
        let column_name = column_name.as_ref();
        let path = if column_name.is_empty() {
            Vec::new()
        } else {
            column_name.split('.').map(str::to_string).collect()
        };
        self.paths.push(path);
        self
    }

    /// Adds multiple dot-separated column names
    pub fn add_columns(
        mut self,
        column_names: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        for name in column_names {
            self = self.add_column(name);
        }
        self
    }

    /// Number of paths selected so far
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn build(self) -> Projection {
        Projection::new(self.paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder() {
        let builder = ProjectionBuilder::new();
        assert!(builder.is_empty());
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_mixed_paths_keep_order() {
        let projection = ProjectionBuilder::new()
            .add_column("b.c")
            .add_path(["a"])
            .add_columns(["d.e.f", "b.c"])
            .build();

        let paths: Vec<String> = projection.paths().iter().map(|p| p.join("/")).collect();
        assert_eq!(paths, vec!["b/c", "a", "d/e/f", "b/c"]);
    }

    #[test]
    fn test_empty_column_name() {
        let builder = ProjectionBuilder::new().add_column("");
        assert_eq!(builder.len(), 1);
        assert!(builder.build().paths()[0].is_empty());
    }
}
