//! Blockcheck CLI - verify block texture imports
//!
//! Usage: blockcheck [--source <FILE>] [--assets <DIR>] [--json]
//!
//! Exits 0 when every texture imported by the source file exists under the
//! assets directory, 1 otherwise.

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::verify::cmd_verify(
        cli.source.as_deref(),
        cli.assets.as_deref(),
        cli.config.as_deref(),
        cli.json,
        cli.verbose,
        cli.color,
    )
}
