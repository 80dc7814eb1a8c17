//! Configuration file support for license-bouncer.
//!
//! Provides YAML-based configuration through `license-bouncer.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use license_bouncer::application::dto::FormatOption;
use license_bouncer::application::factories::PresenterFactory;
use license_bouncer::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "license-bouncer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub fail_on_denied: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured format, if any
    ///
    /// # Errors
    /// Returns `BouncerError::UnsupportedFormat` when the file names a
    /// format outside text, csv and json
    pub fn format_option(&self) -> Result<Option<FormatOption>> {
        self.format
            .as_deref()
            .map(PresenterFactory::parse_format)
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.format_option().with_context(|| {
        "Invalid config: 'format' must be one of text, csv or json.".to_string()
    })?;

    if let Some(ref output) = config.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!(
                "Invalid config: 'output' must not be empty.\n\n\
                 💡 Hint: Remove the key to write to stdout."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
