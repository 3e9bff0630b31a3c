//! Integration tests for inspecting real parquet files

use config::RenderConfig;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::SerializedFileWriter;
use parquet::schema::parser::parse_message_type;
use pqschema_cli::{apply_columns, json_report, load_schema, text_report};
use std::fs::File;
use std::sync::Arc;
use tempfile::TempDir;

const MESSAGE: &str = "
    message spans {
        required binary TraceID;
        optional group Span {
            required binary Name (UTF8);
            repeated group Attrs {
                required binary Key (UTF8);
                optional int64 Value;
            }
        }
    }
";

/// Writes an empty parquet file (footer only) with the test schema
fn write_test_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("spans.parquet");
    let schema = Arc::new(parse_message_type(MESSAGE).expect("Failed to parse schema"));
    let props = Arc::new(WriterProperties::builder().build());

    let file = File::create(&path).expect("Failed to create file");
    let writer = SerializedFileWriter::new(file, schema, props).expect("Failed to create writer");
    writer.close().expect("Failed to write footer");
    path
}

#[test]
fn test_load_schema_from_footer() {
    let dir = TempDir::new().unwrap();
    let tree = load_schema(&write_test_file(&dir)).expect("Failed to load schema");

    let names: Vec<&str> = tree.leaf_nodes().map(|n| n.full_name()).collect();
    assert_eq!(names, vec!["TraceID", "Span.Name", "Span.Attrs.Key", "Span.Attrs.Value"]);
    assert_eq!(tree.max_definition_level(), 3);
}

#[test]
fn test_text_report_with_projection() {
    let dir = TempDir::new().unwrap();
    let mut tree = load_schema(&write_test_file(&dir)).expect("Failed to load schema");
    apply_columns(&mut tree, &["Span.Attrs.Value".to_string()]).expect("Failed to project");

    let report = text_report(&tree, &RenderConfig::default());
    let expected = "\
{
  1: OPTIONAL struct Span {
    1: REPEATED struct Attrs {
      1: OPTIONAL INT64 Value;
    };
  };
};

Span.Attrs.Value def=3 rep=1 path=[1,1,1]
";
    assert_eq!(report, expected);
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let mut tree = load_schema(&write_test_file(&dir)).expect("Failed to load schema");
    apply_columns(&mut tree, &["TraceID".to_string(), "Span.Name".to_string()])
        .expect("Failed to project");

    let report = json_report(&tree);
    assert_eq!(report["num_columns"], 4);
    let columns = report["projected_columns"].as_array().unwrap();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[1]["name"], "Span.Name");
    assert_eq!(columns[1]["max_definition_level"], 1);
    assert_eq!(columns[1]["type"], "BYTE_ARRAY (UTF8)");
}

#[test]
fn test_unknown_column() {
    let dir = TempDir::new().unwrap();
    let mut tree = load_schema(&write_test_file(&dir)).expect("Failed to load schema");
    let err = apply_columns(&mut tree, &["Span.Missing".to_string()]).unwrap_err();
    assert!(format!("{err:#}").contains("Unknown field 'Missing' under 'Span'"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(load_schema(&dir.path().join("absent.parquet")).is_err());
}
