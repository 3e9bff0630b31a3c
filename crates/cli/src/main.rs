use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use pqschema_cli::{apply_columns, json_report, load_schema, text_report};
use std::path::PathBuf;

/// Inspect the nested schema of a parquet file
#[derive(Parser, Debug)]
#[command(name = "pqschema-inspect")]
#[command(about = "Show schema tree, levels and projection of a parquet file", long_about = None)]
struct Args {
    /// Parquet file to inspect
    file: PathBuf,

    /// Dot-separated column to project (repeatable)
    #[arg(short, long = "column")]
    columns: Vec<String>,

    /// Render unprojected nodes as well
    #[arg(long)]
    all: bool,

    /// Print projected columns as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Path to TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    // RUST_LOG takes precedence over the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.all {
        config.render.projected_only = false;
    }

    let mut tree = load_schema(&args.file)?;
    apply_columns(&mut tree, &args.columns)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json_report(&tree))?);
    } else {
        print!("{}", text_report(&tree, &config.render));
    }
    Ok(())
}
