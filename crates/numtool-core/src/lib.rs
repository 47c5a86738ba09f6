//! numtool-core — positional radix conversion and integer sequence utilities.
//!
//! This crate holds the pure logic behind the `basecvt` and `revseq` command
//! line tools: rendering non-negative integers as digit strings in any base
//! from 2 to 36, and parsing/reversing whitespace-delimited integer
//! sequences. No I/O happens here; binaries translate the typed errors into
//! exit codes and stderr diagnostics.

pub mod radix;
pub mod sequence;

pub use radix::{base_root, to_digits, to_digits_by_division, RadixError};
pub use sequence::{format_line, parse_integers, reversed, SequenceError};
