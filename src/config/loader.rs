// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{Config, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization. Use [`load_and_validate`] to get
/// a usable [`Config`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file and validate colours and runner settings.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Config> {
    let raw_config = load_from_path(&path)?;
    let config = Config::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the config for a run.
///
/// - An explicit path must exist and be valid.
/// - Without one, [`default_config_path`] is used if it exists; otherwise the
///   built-in defaults apply.
pub fn load_or_default(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_and_validate(path);
    }

    let path = default_config_path();
    if path.is_file() {
        debug!(path = %path.display(), "loading default config file");
        load_and_validate(&path)
    } else {
        Ok(Config::default())
    }
}

/// `Cmdstream.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Cmdstream.toml")
}
