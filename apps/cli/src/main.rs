//! catalogdash CLI — catalog analytics from the terminal.
//!
//! Loads a catalog CSV, computes the dashboard aggregates once, and prints
//! them as text, Markdown, or JSON, or exports a static HTML page.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
