//! Integer sequence parsing and reversal.
//!
//! Backs the `revseq` binary: a whitespace-delimited integer sequence is
//! parsed in one pass, mirrored, and rendered back as a single line. Parsing
//! is all-or-nothing; the first malformed token fails the whole run.

use thiserror::Error;

/// Errors from sequence parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A token that does not parse as a signed 64-bit integer.
    #[error("malformed integer token {token:?}")]
    MalformedToken { token: String },
}

/// Parses every whitespace/newline-delimited token of `input` as an `i64`,
/// preserving input order. Empty input yields an empty vector. Signed tokens
/// (`-3`, `+7`) are accepted; anything else fails with the offending token.
pub fn parse_integers(input: &str) -> Result<Vec<i64>, SequenceError> {
    input
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| SequenceError::MalformedToken {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Mirrors element positions: `out[i] == in[n-1-i]`.
///
/// Total and pure over any finite list, duplicates and negatives included.
/// Applying it twice returns the original list.
pub fn reversed<T>(mut values: Vec<T>) -> Vec<T> {
    values.reverse();
    values
}

/// Renders a sequence as a single space-separated line, without a trailing
/// newline. An empty sequence renders as an empty string.
pub fn format_line(values: &[i64]) -> String {
    let mut line = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&value.to_string());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn parses_whitespace_and_newline_delimited_tokens() {
        assert_eq!(
            parse_integers("1 2\n3\t4  5\n").unwrap(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn parses_signed_tokens() {
        assert_eq!(parse_integers("-1 +2 -3").unwrap(), vec![-1, 2, -3]);
    }

    #[test]
    fn empty_input_parses_to_empty_sequence() {
        assert_eq!(parse_integers("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_integers("  \n\t ").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn malformed_token_is_reported() {
        assert_eq!(
            parse_integers("1 2 abc 4"),
            Err(SequenceError::MalformedToken {
                token: "abc".to_string()
            })
        );
        assert!(parse_integers("1.5 2").is_err());
        assert!(parse_integers("1,2,3").is_err());
    }

    #[test]
    fn overflowing_token_is_malformed() {
        assert!(parse_integers("9223372036854775808").is_err());
        assert_eq!(
            parse_integers("9223372036854775807").unwrap(),
            vec![i64::MAX]
        );
    }

    #[test]
    fn reversal_mirrors_positions() {
        assert_eq!(reversed(vec![1, 2, 3, 4, 5]), vec![5, 4, 3, 2, 1]);
        assert_eq!(reversed(vec![7]), vec![7]);
        assert_eq!(reversed(Vec::<i64>::new()), Vec::<i64>::new());
    }

    #[test]
    fn reversal_keeps_duplicates_and_negatives() {
        assert_eq!(reversed(vec![-1, 0, -1, 2, 2]), vec![2, 2, -1, 0, -1]);
    }

    #[test]
    fn reversal_is_an_involution() {
        let mut rng = StdRng::seed_from_u64(0x7ab);
        for _ in 0..100 {
            let len = rng.gen_range(0..200);
            let values: Vec<i64> = (0..len).map(|_| rng.gen()).collect();
            assert_eq!(reversed(reversed(values.clone())), values);
        }
    }

    #[test]
    fn formats_space_separated_line() {
        assert_eq!(format_line(&[5, 4, 3, 2, 1]), "5 4 3 2 1");
        assert_eq!(format_line(&[-3]), "-3");
        assert_eq!(format_line(&[]), "");
    }
}
