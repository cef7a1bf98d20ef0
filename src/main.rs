//! Chromadoc - configuration aggregator for the Chroma docs toolchain.

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::DocsConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = DocsConfig::load(&cli)?;

    match &cli.command {
        Commands::Check => cli::check::run_check(&config),
        Commands::Show { args } => cli::show::run_show(args, &config),
    }
}
