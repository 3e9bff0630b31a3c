use anyhow::{Context, Result};
use config_rs::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the schema inspection tooling
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Text rendering of schema trees
    #[serde(default)]
    pub render: RenderConfig,

    /// Log output
    #[serde(default)]
    pub log: LogConfig,
}

/// Configuration for brace-structured schema rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Indent added per nesting level (default: two spaces)
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Only render projected nodes (default: true)
    #[serde(default = "default_projected_only")]
    pub projected_only: bool,
}

/// Configuration for tracing output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is not set (default: "info")
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

// Default value functions
fn default_indent() -> String {
    "  ".to_string()
}

fn default_projected_only() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            projected_only: default_projected_only(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load Config with layered configuration priority:
    /// 1. Default values
    /// 2. TOML file (if provided)
    /// 3. Environment variables with the PQSCHEMA_ prefix, using `__` between
    ///    section and key (e.g. PQSCHEMA_RENDER__PROJECTED_ONLY=false)
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder()
            .set_default("render.indent", default_indent())?
            .set_default("render.projected_only", default_projected_only())?
            .set_default("log.filter", default_log_filter())?;

        if let Some(path) = config_file {
            if !path.exists() {
                anyhow::bail!("Configuration file not found: {}", path.display());
            }
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PQSCHEMA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Load Config from a TOML file; environment variables still override it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(Some(path.as_ref()))
    }

    /// Create a new Config from environment variables with defaults
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.render.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.indent.chars().all(char::is_whitespace),
            "Render indent must only contain whitespace, got {:?}",
            self.indent
        );
        Ok(())
    }
}

impl LogConfig {
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.filter.trim().is_empty(), "Log filter cannot be empty");
        Ok(())
    }
}
