use anyhow::{Context, Result};
use clap::Parser;
use numtool_core::sequence;
use std::io::{self, Read, Write};

/// revseq — print the integers read from stdin in reverse order.
///
/// Reads whitespace-delimited integers until end of stream and writes them
/// space-separated in reverse order on a single line. Empty input produces
/// no output at all.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;

    let values = sequence::parse_integers(&input).context("reading integer sequence")?;
    if values.is_empty() {
        return Ok(());
    }

    let values = sequence::reversed(values);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", sequence::format_line(&values)).context("writing output")?;
    Ok(())
}
