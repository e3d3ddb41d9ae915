//! # textsum
//!
//! Configuration-driven orchestration for a text summarization training
//! pipeline: reads YAML configuration, provisions artifact directories,
//! downloads the dataset archive, and extracts it for the later stages.
//!
//! ## Modules
//!
//! - `config` - Typed YAML configuration loading and per-stage config handout
//! - `error` - Error taxonomy shared across the crate
//! - `logging` - Process-wide tracing setup (stdout + `logs/running_logs.log`)
//! - `stage` - Pipeline stage trait, runner, and the data validation stage
//! - `util` - Small filesystem helpers (directory provisioning, file sizes)

pub mod config;
pub mod error;
pub mod logging;
pub mod stage;
pub mod util;

pub use error::{Error, Result};
