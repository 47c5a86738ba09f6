//! Positional radix conversion.
//!
//! ## What it does
//!
//! Renders a non-negative `i64` as a digit string in any base from 2 to 36,
//! most-significant digit first, using the uppercase alphabet `0-9A-Z`.
//!
//! ## Algorithm
//!
//! The reference path ([`to_digits_by_division`]) repeatedly divides by the
//! base and collects remainders. The public entry point ([`to_digits`])
//! additionally detects bases that are a power of a single prime via
//! [`base_root`] and switches to grouped extraction:
//!
//! - root 2 (bases 4, 8, 16, 32): mask the low `k` bits and shift right,
//!   one output digit per `k` bits, no division at all;
//! - odd prime root (bases 9, 25, 27): extract `k` base-`p` digits per
//!   output digit, dividing by the small prime `p` instead of the base.
//!
//! Both paths produce byte-identical output for every valid input; the
//! grouped path exists purely for performance.

use thiserror::Error;

/// Smallest base with a meaningful positional representation.
pub const MIN_BASE: u32 = 2;
/// Largest base expressible with the `0-9A-Z` alphabet.
pub const MAX_BASE: u32 = 36;

/// Digit alphabet, indexed by digit value. Passed around as a constant so
/// conversion never depends on locale or mutable global state.
const DIGITS: [u8; 36] = *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Errors from the conversion contract.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RadixError {
    /// The requested base falls outside `[2, 36]`.
    #[error("base {0} is out of range (expected 2..=36)")]
    BaseOutOfRange(u32),

    /// Negative values have no representation under this contract.
    #[error("cannot convert negative value {0}")]
    NegativeValue(i64),
}

/// Finds the smallest prime `p` and exponent `k` such that `base == p^k`.
///
/// Returns `(base, 1)` when `base` is not a power of a single prime.
/// Examples: `16 → (2, 4)`, `27 → (3, 3)`, `11 → (11, 1)`, `12 → (12, 1)`.
pub fn base_root(base: u32) -> (u32, u32) {
    if base <= 1 {
        return (base, 1);
    }

    let mut n = base;
    let mut factor = 0u32;
    let mut exponent = 0u32;

    if n % 2 == 0 {
        factor = 2;
        while n % 2 == 0 {
            exponent += 1;
            n /= 2;
        }
    } else {
        let mut divisor = 3u32;
        while divisor * divisor <= n {
            if n % divisor == 0 {
                factor = divisor;
                while n % divisor == 0 {
                    exponent += 1;
                    n /= divisor;
                }
                break;
            }
            divisor += 2;
        }
    }

    if n > 1 {
        // Either a second prime factor remains, or base is itself prime.
        if factor != 0 {
            return (base, 1);
        }
        return (n, 1);
    }

    (factor, exponent)
}

/// Converts a non-negative value to its digit string in the given base.
///
/// Dispatches to grouped extraction when the base is a power of a single
/// prime with exponent above 1, and to plain repeated division otherwise.
/// The two paths are byte-identical in output.
///
/// ```
/// use numtool_core::radix::to_digits;
///
/// assert_eq!(to_digits(255, 16).unwrap(), "FF");
/// assert_eq!(to_digits(255, 11).unwrap(), "212");
/// assert_eq!(to_digits(0, 2).unwrap(), "0");
/// ```
pub fn to_digits(value: i64, base: u32) -> Result<String, RadixError> {
    check_args(value, base)?;
    if value == 0 {
        return Ok("0".to_string());
    }

    let (root, exponent) = base_root(base);
    if exponent > 1 {
        if root == 2 {
            let mask = (1i64 << exponent) - 1;
            return Ok(collect_digits(value, |v| {
                ((v & mask) as usize, v >> exponent)
            }));
        }
        let p = i64::from(root);
        return Ok(collect_digits(value, |v| {
            // k base-p digits make up one base-p^k digit, least significant
            // first, so the place value pw climbs as the group fills.
            let mut rest = v;
            let mut digit = 0i64;
            let mut pw = 1i64;
            for _ in 0..exponent {
                if rest > 0 {
                    digit += (rest % p) * pw;
                    rest /= p;
                }
                pw *= p;
            }
            (digit as usize, rest)
        }));
    }

    to_digits_by_division(value, base)
}

/// Converts via the plain repeated-division loop, with no grouping.
///
/// This is the reference path; equivalence tests and the benchmark compare
/// [`to_digits`] against it.
pub fn to_digits_by_division(value: i64, base: u32) -> Result<String, RadixError> {
    check_args(value, base)?;
    if value == 0 {
        return Ok("0".to_string());
    }

    let base = i64::from(base);
    Ok(collect_digits(value, |v| ((v % base) as usize, v / base)))
}

fn check_args(value: i64, base: u32) -> Result<(), RadixError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RadixError::BaseOutOfRange(base));
    }
    if value < 0 {
        return Err(RadixError::NegativeValue(value));
    }
    Ok(())
}

/// Runs a digit extractor until the value is exhausted and assembles the
/// most-significant-first string. The extractor returns the next digit value
/// and the remaining quantity.
fn collect_digits(mut value: i64, mut next_digit: impl FnMut(i64) -> (usize, i64)) -> String {
    // 63 bits in base 2 is the worst case.
    let mut buf = Vec::with_capacity(64);
    while value > 0 {
        let (digit, rest) = next_digit(value);
        buf.push(DIGITS[digit]);
        value = rest;
    }
    buf.into_iter().rev().map(char::from).collect()
}
