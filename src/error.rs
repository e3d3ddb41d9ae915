use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("configuration file is empty: {0}")]
    EmptyConfig(PathBuf),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status error: {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("unknown stage: {0}")]
    UnknownStage(String),
}
