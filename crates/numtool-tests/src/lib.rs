//! Shared fixtures for numtool property tests and benchmarks.

/// Hand-picked values hitting the interesting conversion boundaries:
/// zero, single digits, digit-width transitions, and the top of the range.
pub fn boundary_values() -> Vec<i64> {
    let mut values = vec![0, 1, 2, 9, 10, 11, 15, 16, 35, 36, 255, 256, 1263, i64::MAX];
    for shift in [7, 15, 31, 47, 62] {
        values.push(1i64 << shift);
        values.push((1i64 << shift) - 1);
        values.push((1i64 << shift) + 1);
    }
    values
}

/// Bases whose grouped extraction path is active: powers of two and powers
/// of an odd prime, all within the supported range.
pub const GROUPED_BASES: [u32; 7] = [4, 8, 9, 16, 25, 27, 32];
