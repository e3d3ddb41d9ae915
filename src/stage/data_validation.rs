//! Data validation stage: make sure the dataset archive is present locally
//! and extracted for the downstream stages.

use std::fs::{self, File};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{ConfigurationManager, DataValidationConfig};
use crate::error::{Error, Result};
use crate::util::get_size;

use super::Stage;

pub const STAGE_NAME: &str = "data_validation";

/// Pipeline wrapper: load configuration, then download and extract.
pub struct DataValidationStage {
    config_path: PathBuf,
}

impl DataValidationStage {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }
}

impl Stage for DataValidationStage {
    fn name(&self) -> &'static str {
        STAGE_NAME
    }

    fn run(&self) -> Result<()> {
        let manager = ConfigurationManager::from_path(&self.config_path)?;
        let validation = DataValidation::new(manager.data_validation_config()?);
        validation.download_file()?;
        validation.extract_zip_file()?;
        Ok(())
    }
}

/// Downloads the dataset archive and unpacks it.
pub struct DataValidation {
    config: DataValidationConfig,
}

impl DataValidation {
    pub fn new(config: DataValidationConfig) -> Self {
        Self { config }
    }

    /// Fetch the archive from `source_url` unless it is already on disk.
    ///
    /// Single attempt, no retry; a transport error or non-success status
    /// propagates to the caller.
    pub fn download_file(&self) -> Result<()> {
        let target = &self.config.local_data_file;
        if target.exists() {
            info!(
                "file already exists at {} ({})",
                target.display(),
                get_size(target)?
            );
            return Ok(());
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        debug!("downloading {}", self.config.source_url);
        let response = reqwest::blocking::get(&self.config.source_url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: self.config.source_url.clone(),
                status,
            });
        }
        // Buffer the whole body so a failed transfer never leaves a partial file.
        let body = response.bytes()?;
        fs::write(target, &body)?;
        info!(
            "downloaded {} to {} ({})",
            self.config.source_url,
            target.display(),
            get_size(target)?
        );
        Ok(())
    }

    /// Unpack the archive into `unzip_dir`, creating the directory if needed.
    ///
    /// Runs on every invocation; if it fails the downloaded archive stays on
    /// disk, so a re-run skips the download and retries extraction only.
    pub fn extract_zip_file(&self) -> Result<()> {
        fs::create_dir_all(&self.config.unzip_dir)?;
        let file = File::open(&self.config.local_data_file)?;
        let mut archive = zip::ZipArchive::new(file)?;
        let entries = archive.len();
        archive.extract(&self.config.unzip_dir)?;
        info!(
            "extracted {} entries into {}",
            entries,
            self.config.unzip_dir.display()
        );
        Ok(())
    }
}
