// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::ConfigFile;
use crate::errors::Result;

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; missing fields fall back to
/// their serde defaults.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Resolve the configuration for this run.
///
/// - With an explicit `path`, the file must exist and parse; any failure
///   is surfaced to the caller.
/// - Without one, `Pollwatch.toml` in the current working directory is
///   read if present, and an all-defaults config is returned otherwise.
pub fn load_or_default(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => load_from_path(path),
        None => {
            let default = default_config_path();
            if default.exists() {
                load_from_path(default)
            } else {
                Ok(ConfigFile::default())
            }
        }
    }
}

/// Default config location: `Pollwatch.toml` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Pollwatch.toml")
}
