//! Configuration file (pagesmith.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_output")]
    pub output: String,
    /// Overrides the name stored in each design
    pub project_name: Option<String>,
    #[serde(default = "default_true")]
    pub include_comments: bool,
    #[serde(default = "default_true")]
    pub include_readme: bool,
    #[serde(default = "default_true")]
    pub include_style_config: bool,
    #[serde(default)]
    pub minify_styles: bool,
    #[serde(default = "default_compression_level")]
    pub compression_level: i64,
    /// Run generated files through the built-in tidy formatter
    #[serde(default)]
    pub tidy: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: default_format(),
            output: default_output(),
            project_name: None,
            include_comments: true,
            include_readme: true,
            include_style_config: true,
            minify_styles: false,
            compression_level: default_compression_level(),
            tidy: false,
        }
    }
}

fn default_format() -> String {
    "react-source".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_true() -> bool {
    true
}
fn default_compression_level() -> i64 {
    pagesmith_export::archive::DEFAULT_COMPRESSION_LEVEL
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}
