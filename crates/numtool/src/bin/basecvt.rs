use anyhow::{Context, Result};
use clap::Parser;
use numtool_core::radix;
use std::io::{self, Read, Write};

/// basecvt — render integers in positional numeric bases.
///
/// Reads a count T from stdin, then T whitespace-delimited non-negative
/// integers, and prints one line per value with its digit strings in each
/// output base, space-separated.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Output bases in print order, each in 2..=36
    #[arg(long, value_delimiter = ',', default_value = "16,11")]
    bases: Vec<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;

    let output = convert_batch(&cli.bases, &input)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("writing output")?;
    Ok(())
}

/// Runs the whole batch as a pure function: input text in, output text out.
/// Any malformed token or conversion error fails the entire run.
fn convert_batch(bases: &[u32], input: &str) -> Result<String> {
    let mut tokens = input.split_whitespace();

    let token = tokens.next().context("missing value count")?;
    let count: usize = token
        .parse()
        .with_context(|| format!("malformed value count {token:?}"))?;

    let mut output = String::new();
    for i in 0..count {
        let token = tokens
            .next()
            .with_context(|| format!("expected {count} values, found only {i}"))?;
        let value: i64 = token
            .parse()
            .with_context(|| format!("malformed integer token {token:?}"))?;

        for (j, &base) in bases.iter().enumerate() {
            if j > 0 {
                output.push(' ');
            }
            output.push_str(&radix::to_digits(value, base)?);
        }
        output.push('\n');
    }
    Ok(output)
}
