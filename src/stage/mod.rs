//! Pipeline stages and the runner that sequences them.

pub mod data_validation;

use tracing::info;

use crate::error::{Error, Result};

/// One discrete, independently invokable step of the pipeline.
pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self) -> Result<()>;
}

/// Ordered sequence of stages, executed front to back.
///
/// Stages run to completion one at a time; the first failure halts the run
/// and propagates to the caller.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn register(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every registered stage in order.
    pub fn run(&self) -> Result<()> {
        for stage in &self.stages {
            Self::run_one(stage.as_ref())?;
        }
        Ok(())
    }

    /// Run a single stage by name.
    pub fn run_stage(&self, name: &str) -> Result<()> {
        let stage = self
            .stages
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::UnknownStage(name.to_string()))?;
        Self::run_one(stage.as_ref())
    }

    fn run_one(stage: &dyn Stage) -> Result<()> {
        info!("stage {} started", stage.name());
        stage.run()?;
        info!("stage {} completed", stage.name());
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
