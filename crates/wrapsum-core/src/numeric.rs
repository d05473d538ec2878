//! Fixed-width integer trait used by the summation kernels
//!
//! Any primitive integer whose addition can wrap qualifies. `i64` is the type
//! the rest of the crate is built around; the others come for free.

use bytemuck::Pod;
use num_traits::{PrimInt, WrappingAdd};
use std::fmt::Debug;

/// Primitive integer with two's-complement wraparound on addition
pub trait WrappingInt: PrimInt + WrappingAdd + Pod + Send + Sync + Debug {
    /// Additive identity
    #[inline]
    fn wrapping_zero() -> Self {
        Self::zero()
    }

    /// `acc + value` modulo 2^bits
    #[inline]
    fn wrapping_accumulate(acc: Self, value: Self) -> Self {
        acc.wrapping_add(&value)
    }
}

impl<T> WrappingInt for T where T: PrimInt + WrappingAdd + Pod + Send + Sync + Debug {}
