//! Configuration management for the pipeline.
//!
//! The YAML schema is deserialized into typed structs at load time, so a
//! missing or misspelled field fails the run up front instead of surfacing
//! as a lookup error inside a stage.

pub mod loader;

pub use loader::read_yaml;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::util::create_directories;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Top-level pipeline configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Root directory all stage artifacts live under.
    pub artifacts_root: PathBuf,
    pub data_validation: DataValidationSection,
}

/// `data_validation` section of the configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataValidationSection {
    /// Working directory for this stage's artifacts.
    pub root_dir: PathBuf,
    /// Remote location of the dataset archive.
    pub source_url: String,
    /// Where the downloaded archive is written.
    pub local_data_file: PathBuf,
    /// Directory the archive contents are extracted into.
    pub unzip_dir: PathBuf,
}

/// Stage configuration handed to the data validation component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataValidationConfig {
    pub source_url: String,
    pub local_data_file: PathBuf,
    pub unzip_dir: PathBuf,
}

/// Loads the configuration document and hands out per-stage configs,
/// provisioning the directories each consumer expects to exist.
pub struct ConfigurationManager {
    config: PipelineConfig,
}

impl ConfigurationManager {
    pub fn from_path(path: &Path) -> Result<Self> {
        let config: PipelineConfig = read_yaml(path)?;
        create_directories([&config.artifacts_root], true)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn data_validation_config(&self) -> Result<DataValidationConfig> {
        let section = &self.config.data_validation;
        create_directories([&section.root_dir], true)?;
        Ok(DataValidationConfig {
            source_url: section.source_url.clone(),
            local_data_file: section.local_data_file.clone(),
            unzip_dir: section.unzip_dir.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    fn sample_config(root: &Path) -> String {
        format!(
            r#"
artifacts_root: {root}/artifacts

data_validation:
  root_dir: {root}/artifacts/data_ingestion
  source_url: https://example.com/data.zip
  local_data_file: {root}/artifacts/data_ingestion/data.zip
  unzip_dir: {root}/artifacts/data_ingestion
"#,
            root = root.display()
        )
    }

    #[test]
    fn manager_loads_config_and_provisions_artifacts_root() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, &sample_config(temp_dir.path()));

        let manager = ConfigurationManager::from_path(&path).unwrap();

        assert!(temp_dir.path().join("artifacts").is_dir());
        assert_eq!(
            manager.config().data_validation.source_url,
            "https://example.com/data.zip"
        );
    }

    #[test]
    fn data_validation_config_provisions_stage_root() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, &sample_config(temp_dir.path()));

        let manager = ConfigurationManager::from_path(&path).unwrap();
        let config = manager.data_validation_config().unwrap();

        assert!(temp_dir.path().join("artifacts/data_ingestion").is_dir());
        assert_eq!(
            config.local_data_file,
            temp_dir.path().join("artifacts/data_ingestion/data.zip")
        );
        assert_eq!(
            config.unzip_dir,
            temp_dir.path().join("artifacts/data_ingestion")
        );
    }

    #[test]
    fn missing_section_fails_at_load_time() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "artifacts_root: artifacts\n");

        assert!(matches!(
            ConfigurationManager::from_path(&path),
            Err(crate::Error::Yaml(_))
        ));
    }
}
