//! Shared utilities for integration tests

#![allow(dead_code)]

/// Array lengths around the unroll width of the summation backends
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        3,   // Unroll width - 1
        4,   // Unroll width
        5,   // Unroll width + 1
        7,   // Remainder of 3
        8,   // Two full chunks
        9,   // Two chunks + 1
        17,  // Power of 2 + 1
        31,  // Prime
        64,  // Cache line
        127, // Mersenne prime
        128, // Power of 2
    ]
}

/// Boundary values for fixed-width wraparound
pub fn special_values() -> Vec<i64> {
    vec![0, 1, -1, i64::MAX, i64::MIN, i64::MAX - 1, i64::MIN + 1]
}

/// Reference sum in 128-bit arithmetic, reduced modulo 2^64
pub fn reference_sum(values: &[i64]) -> i64 {
    let wide: i128 = values.iter().map(|&x| x as i128).sum();
    wide as i64
}

/// Deterministic pseudo-random data with frequent overflow
pub fn generate_test_data(len: usize) -> Vec<i64> {
    (0..len)
        .map(|i| (i as i64).wrapping_mul(0x2545_F491_4F6C_DD1D) ^ ((i as i64) << 40))
        .collect()
}
