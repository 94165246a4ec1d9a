//! Command-line entry point for lithium.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

/// Command-line companion for the lithium service.
#[derive(Parser, Debug)]
#[command(name = "lithium", author, version, about)]
struct Cli {}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(&cli, &mut handle)?;
    handle.flush().context("failed to flush stdout")?;

    Ok(())
}

fn run(_cli: &Cli, out: &mut impl Write) -> Result<()> {
    writeln!(out, "lithium: no commands available, see --help")
        .context("failed to write to stdout")?;
    Ok(())
}
