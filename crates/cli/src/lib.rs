//! Parquet footer inspection on top of `pqschema`
//!
//! Opens a parquet file, rebuilds its schema tree from the footer, applies the
//! requested projection and reports the level bookkeeping of each column.

use anyhow::{Context, Result};
use config::RenderConfig;
use parquet::file::reader::{FileReader, SerializedFileReader};
use pqschema::{Projection, RenderOptions, SchemaTree};
use serde_json::{json, Value};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Reads the schema tree stored in a parquet file footer
pub fn load_schema(path: &Path) -> Result<SchemaTree> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = SerializedFileReader::new(file)
        .with_context(|| format!("Failed to read parquet footer of {}", path.display()))?;

    let descr = reader.metadata().file_metadata().schema_descr();
    let tree = SchemaTree::from_parquet(descr).context("Invalid parquet schema")?;

    info!(
        "Loaded schema from {} ({} columns)",
        path.display(),
        tree.num_leaves()
    );
    Ok(tree)
}

/// Applies `columns` (dot-separated) to the tree; no columns keeps everything
pub fn apply_columns(tree: &mut SchemaTree, columns: &[String]) -> Result<()> {
    if columns.is_empty() {
        debug!("No columns requested, keeping full projection");
        return Ok(());
    }
    let projection = Projection::from_dotted(columns);
    tree.set_projection(&projection)
        .context("Projection does not match the file schema")?;
    Ok(())
}

/// Brace-structured tree followed by one line per projected column
pub fn text_report(tree: &SchemaTree, render: &RenderConfig) -> String {
    let options = RenderOptions {
        indent: render.indent.clone(),
        projected_only: render.projected_only,
        ..RenderOptions::default()
    };

    let mut out = tree.render_with(&options);
    out.push('\n');
    for column in tree.projected_columns() {
        let ordinals: Vec<String> = column.ordinal_path.iter().map(usize::to_string).collect();
        out.push_str(&format!(
            "{} def={} rep={} path=[{}]\n",
            column.full_name,
            column.max_definition_level,
            column.max_repetition_level,
            ordinals.join(",")
        ));
    }
    out
}

/// Machine-readable listing of the projected columns
pub fn json_report(tree: &SchemaTree) -> Value {
    let columns: Vec<Value> = tree
        .projected_columns()
        .iter()
        .map(|column| {
            json!({
                "name": column.full_name,
                "max_definition_level": column.max_definition_level,
                "max_repetition_level": column.max_repetition_level,
                "ordinal_path": column.ordinal_path,
                "type": column.type_tag.map(|tag| tag.to_string()),
            })
        })
        .collect();

    json!({
        "num_columns": tree.num_leaves(),
        "max_definition_level": tree.max_definition_level(),
        "projected_columns": columns,
    })
}
