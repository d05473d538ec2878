//! Error types for wrapsum
//!
//! The summation itself cannot fail. These errors cover the layers around it:
//! configuration, platform checks and anything bubbled up from callers.

use thiserror::Error;

/// Core error type for wrapsum operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The summation unit is not compiled for this target
    #[error("Unsupported architecture: summation is not built for {arch}")]
    UnsupportedArchitecture { arch: &'static str },

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a parameter that must be non-zero
    pub fn zero_parameter(name: &str) -> Self {
        Self::InvalidParameter(format!("{name} must be greater than zero"))
    }
}
