//! # wrapsum
//!
//! Wrapping summation of 64-bit integers, compiled for every target
//! architecture except 32-bit x86.
//!
//! This crate re-exports [`wrapsum_core`]. Code that must build on every
//! target can check [`platform::sum_unit_included`] or call
//! [`platform::require_sum_unit`] instead of gating itself.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(not(target_arch = "x86"))]
//! # {
//! use wrapsum::prelude::*;
//!
//! assert_eq!(sum(&[1, 2, 3]), 6);
//! assert_eq!(sum(&[i64::MAX, 1]), i64::MIN);
//!
//! let engine = wrapsum::engine(SumConfig::sequential())?;
//! assert_eq!(engine.sum(&[-5, 5]), 0);
//! # }
//! # Ok::<(), wrapsum::Error>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: chunked parallel summation on rayon's thread pool

pub use wrapsum_core::*;

/// Common imports
pub mod prelude {
    pub use wrapsum_core::prelude::*;
}
