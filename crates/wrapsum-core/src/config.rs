//! Configuration for the summation engine

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default input length at which `Auto` switches to parallel execution
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 65_536;

/// Default number of elements per parallel chunk
pub const DEFAULT_CHUNK_SIZE: usize = 16_384;

/// Execution strategy for the summation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    /// Process items sequentially
    Sequential,
    /// Process chunks in parallel
    Parallel,
    /// Choose based on input length
    #[default]
    Auto,
}

/// Engine configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SumConfig {
    pub strategy: ExecutionStrategy,
    /// Minimum input length for `Auto` to go parallel
    pub parallel_threshold: usize,
    /// Elements per chunk when running in parallel
    pub chunk_size: usize,
}

impl Default for SumConfig {
    fn default() -> Self {
        Self {
            strategy: ExecutionStrategy::Auto,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SumConfig {
    pub fn sequential() -> Self {
        Self {
            strategy: ExecutionStrategy::Sequential,
            ..Self::default()
        }
    }

    pub fn parallel(chunk_size: usize) -> Self {
        Self {
            strategy: ExecutionStrategy::Parallel,
            chunk_size,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::zero_parameter("chunk_size"));
        }
        Ok(())
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
