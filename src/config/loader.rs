use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{Error, Result};

/// Read a YAML document into a typed configuration value.
///
/// A missing file and an empty document are reported as distinct errors so
/// callers can tell "wrong path" apart from "truncated config".
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::ConfigNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(Error::EmptyConfig(path.to_path_buf()));
    }
    let value = serde_yaml::from_str(&content)?;
    info!("YAML file loaded successfully: {}", path.display());
    Ok(value)
}
