//! CLI Argument Parsing
//!
//! Every flag is optional; with none given the tool checks
//! `components/MiningBlock.tsx` against `assets/blocks`.

use std::path::PathBuf;

use blockcheck::config::ColorMode;
use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Blockcheck - verify that every imported block texture exists
#[derive(Parser, Debug)]
#[command(name = "blockcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source file containing the block texture imports
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Directory expected to contain every imported texture
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Config file (defaults to ./blockcheck.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
