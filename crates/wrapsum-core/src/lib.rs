//! Core wrapping summation for wrapsum
//!
//! The crate is built around one operation: the sum of a slice of `i64`,
//! wrapping modulo 2^64 on overflow. The units that implement it are
//! excluded when compiling for 32-bit x86 (`target_arch = "x86"`) and present
//! on every other architecture.
//!
//! # Layout
//!
//! - [`sum`]: the summation and its compute backends (architecture-gated)
//! - [`execution`]: sequential / parallel engine (architecture-gated)
//! - [`config`]: serde-backed engine configuration
//! - [`platform`]: which architecture this build targets, and whether the
//!   summation unit is part of it
//!
//! # Example
//!
//! ```rust
//! use wrapsum_core::platform;
//!
//! # #[cfg(not(target_arch = "x86"))]
//! # {
//! use wrapsum_core::sum::sum;
//!
//! assert!(platform::sum_unit_included());
//! assert_eq!(sum(&[1, 2, 3]), 6);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod numeric;
pub mod platform;

#[cfg(not(target_arch = "x86"))]
pub mod execution;
#[cfg(not(target_arch = "x86"))]
pub mod sum;

// Re-export core types
pub use config::{ExecutionStrategy, SumConfig};
pub use error::{Error, Result};
pub use numeric::WrappingInt;
pub use platform::{sum_unit_included, BuildInfo, TargetArch, EXCLUDED_ARCH};

#[cfg(not(target_arch = "x86"))]
pub use execution::{auto_engine, engine, SumEngine};
#[cfg(not(target_arch = "x86"))]
pub use sum::{
    best_available_backend, sum, sum_generic, sum_with, ScalarBackend, SumPrimitives,
    UnrolledBackend,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{ExecutionStrategy, Result, SumConfig, TargetArch, WrappingInt};

    #[cfg(not(target_arch = "x86"))]
    pub use crate::{sum, ScalarBackend, SumEngine, SumPrimitives, UnrolledBackend};
}
