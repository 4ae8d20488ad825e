//! Configuration handling for the project initializer.
//! The library may ship a `yginit.json`, `yginit.yml` or `yginit.yaml` next to
//! its template to adjust the copy policy and source discovery.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};

/// Tunables of the scaffold pipeline. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Name prefix marking assets that ship with every project.
    pub stock_prefix: String,
    /// Glob (case-insensitive) marking license assets kept for bare projects.
    pub license_pattern: String,
    /// File name suffixes listed as project sources in the build descriptor.
    pub source_suffixes: Vec<String>,
    /// Extra glob patterns, relative to the template root, that are never copied.
    pub ignore: Vec<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            stock_prefix: "stock".to_string(),
            license_pattern: "*license*".to_string(),
            source_suffixes: vec![".cpp".to_string()],
            ignore: Vec::new(),
        }
    }
}

/// Loads configuration from the first existing file of `config_files` in `dir`.
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first found configuration file, if any
pub fn load_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if neither format accepts the content
pub fn parse_config(content: &str) -> Result<ScaffoldConfig> {
    let config = match serde_json::from_str(content) {
        Ok(config) => config,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))?,
    };
    Ok(config)
}

/// Returns the configuration found in `dir`, or the defaults if there is none.
pub fn get_config<P: AsRef<Path>>(dir: P) -> Result<ScaffoldConfig> {
    match load_config(dir, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => {
            debug!("No configuration file found, using defaults.");
            Ok(ScaffoldConfig::default())
        }
    }
}
