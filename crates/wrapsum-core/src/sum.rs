//! Wrapping summation over integer slices
//!
//! This unit is only compiled when the target is not 32-bit x86; see
//! [`crate::platform`] for querying that from code which builds everywhere.
//!
//! # Backends
//!
//! - [`ScalarBackend`]: single accumulator, element by element
//! - [`UnrolledBackend`]: four independent accumulators over 4-element chunks
//!
//! Wrapping addition is associative and commutative modulo 2^N, so every
//! backend returns exactly the same value as [`sum`].

use crate::numeric::WrappingInt;

/// Number of accumulators used by [`UnrolledBackend`]
pub const UNROLL_LANES: usize = 4;

/// Sum a slice of `i64`, wrapping on overflow. Empty input sums to zero.
///
/// ```rust
/// # #[cfg(not(target_arch = "x86"))]
/// # {
/// use wrapsum_core::sum::sum;
///
/// assert_eq!(sum(&[1, 2, 3]), 6);
/// assert_eq!(sum(&[]), 0);
/// assert_eq!(sum(&[i64::MAX, 1]), i64::MIN);
/// # }
/// ```
pub fn sum(values: &[i64]) -> i64 {
    sum_generic(values)
}

/// Wrapping sum for any fixed-width primitive integer
pub fn sum_generic<T: WrappingInt>(values: &[T]) -> T {
    values
        .iter()
        .fold(T::wrapping_zero(), |acc, &x| T::wrapping_accumulate(acc, x))
}

/// Sum using an explicit backend
pub fn sum_with<T: WrappingInt, B: SumPrimitives<T>>(backend: &B, values: &[T]) -> T {
    backend.sum(values)
}

/// Compute primitives for the summation
pub trait SumPrimitives<T: WrappingInt>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Number of accumulators the backend keeps in flight
    fn lanes(&self) -> usize {
        1
    }

    /// Sum all elements in a slice
    fn sum(&self, values: &[T]) -> T {
        sum_generic(values)
    }
}

/// Scalar backend - works for all integer types
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<T: WrappingInt> SumPrimitives<T> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }
}

/// Unrolled backend keeping [`UNROLL_LANES`] independent accumulators
#[derive(Clone, Copy, Debug, Default)]
pub struct UnrolledBackend;

impl UnrolledBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<T: WrappingInt> SumPrimitives<T> for UnrolledBackend {
    fn backend_name(&self) -> &'static str {
        "unrolled"
    }

    fn lanes(&self) -> usize {
        UNROLL_LANES
    }

    fn sum(&self, values: &[T]) -> T {
        let mut lanes = [T::wrapping_zero(); UNROLL_LANES];

        let chunks = values.chunks_exact(UNROLL_LANES);
        let remainder = chunks.remainder();

        // Main loop - one element per lane
        for chunk in chunks {
            for (lane, &x) in lanes.iter_mut().zip(chunk) {
                *lane = T::wrapping_accumulate(*lane, x);
            }
        }

        let mut total = lanes
            .iter()
            .fold(T::wrapping_zero(), |acc, &x| T::wrapping_accumulate(acc, x));

        // Handle remainder
        for &x in remainder {
            total = T::wrapping_accumulate(total, x);
        }

        total
    }
}

/// Get the best available backend for the current platform
pub fn best_available_backend() -> UnrolledBackend {
    UnrolledBackend::new()
}
