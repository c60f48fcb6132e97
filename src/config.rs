//! Per-module configuration.
//! A module directory may carry a `tfdocgen.json`, `tfdocgen.yml` or
//! `tfdocgen.yaml` file with defaults for the command-line options.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::toc::TocOptions;

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["tfdocgen.json", "tfdocgen.yml", "tfdocgen.yaml"];

/// Defaults read from a module's configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub repo_url: Option<String>,
    pub module_path: Option<String>,
    pub template_path: Option<PathBuf>,
    pub toc: TocOptions,
}

/// Reads the first configuration file found in `module_dir`.
///
/// # Returns
/// * `Result<Option<String>>` - File contents, or `None` when no file exists
pub fn load_config<P: AsRef<Path>>(
    module_dir: P,
    config_files: &[&str],
) -> Result<Option<String>> {
    for file in config_files {
        let config_path = module_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }

    debug!(
        "No configuration file found (tried: {})",
        config_files.join(", ")
    );
    Ok(None)
}

/// Parses configuration content, trying JSON first and then YAML.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the configuration of `module_dir`, falling back to defaults when
/// the module has none.
pub fn get_config<P: AsRef<Path>>(module_dir: P) -> Result<Config> {
    match load_config(module_dir, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => Ok(Config::default()),
    }
}
