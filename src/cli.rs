//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use wlgate::output::OutputMode;

/// wlgate - Whitelist change validation gate
#[derive(Parser, Debug)]
#[command(
    name = "wlgate",
    version,
    about = "Validate whitelist changes before they land",
    long_about = "Compare an updated whitelist against the approved baseline.\n\n\
                  Added entries must not start with the disallowed marker token\n\
                  and must keep the list in case-insensitive sorted order."
)]
pub struct Cli {
    /// Path to the approved whitelist
    #[arg(long = "base", value_name = "PATH")]
    pub base: Option<PathBuf>,

    /// Path to the whitelist with changes (required)
    #[arg(long = "updated", value_name = "PATH")]
    pub updated: PathBuf,

    /// Write the report to this file (default is stdout)
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI; returns whether the gate passed
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::validate(&cli, output_mode)
}
