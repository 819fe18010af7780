use crate::crypto::cipher_types::BoundaryPolicy;
use crate::error::ConfigError;
use std::thread::available_parallelism;

const DEFAULT_MAX_RETRIES: usize = 2;

/// Knobs of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub workers: usize,
    pub boundary: BoundaryPolicy,
    /// How many times a partition whose worker panicked is re-run.
    pub max_retries: usize,
}

impl PipelineConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: hardware_parallelism(),
            boundary: BoundaryPolicy::default(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

pub fn hardware_parallelism() -> usize {
    available_parallelism().map(|n| n.get()).unwrap_or(1)
}
