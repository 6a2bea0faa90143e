//! Swatch configuration file handling

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use swatch_theme::LoaderConfig;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "swatch.toml";

/// Top-level Swatch configuration (swatch.toml)
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    /// Document format; inferred from the file extension when unset
    #[serde(default)]
    pub format: Option<DocumentFormat>,
    /// Theme inspected when `--theme` is not given
    #[serde(default)]
    pub theme: Option<String>,
    /// How themes are linked and configured
    #[serde(default)]
    pub loader: LoaderConfig,
}

/// Theme document encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("toml") {
            Some(DocumentFormat::Toml)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(DocumentFormat::Json)
        } else {
            None
        }
    }
}

impl CliConfig {
    /// Load configuration from a file or a directory containing swatch.toml.
    ///
    /// A directory without one yields the default configuration; an explicitly
    /// named file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            let candidate = path.join(CONFIG_FILE);
            if !candidate.exists() {
                tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, path.display());
                return Ok(Self::default());
            }
            candidate
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
