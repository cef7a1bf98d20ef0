//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Config file name looked up when no `-C` path is given.
pub const DEFAULT_CONFIG: &str = "chromadoc.toml";

/// Chromadoc docs toolchain configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: chromadoc.toml)
    #[arg(short = 'C', long, default_value = DEFAULT_CONFIG, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the toolchain configuration and print a summary
    #[command(visible_alias = "c")]
    Check,

    /// Print a tool's resolved configuration
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Which tool's configuration to print
    #[arg(value_enum)]
    pub tool: Tool,

    /// Output JSON instead of TOML
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Consumer tool whose configuration can be shown.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Static site generator configuration
    Site,
    /// Linter configuration
    Lint,
    /// CSS utility framework configuration
    Style,
}

impl Cli {
    /// True if the config path was left at its default name, in which
    /// case a missing file means "use built-in defaults" rather than an
    /// error.
    pub fn uses_default_config(&self) -> bool {
        self.config == PathBuf::from(DEFAULT_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_flags_are_consistent() {
        // Catches clap builder panics (e.g. short-flag collisions with
        // the auto-generated -V/--version) at test time.
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_short_flag_parses() {
        let cli = Cli::try_parse_from(["chromadoc", "-v", "check"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.uses_default_config());
    }

    #[test]
    fn test_explicit_config_path() {
        let cli = Cli::try_parse_from(["chromadoc", "-C", "other.toml", "check"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(!cli.uses_default_config());
    }
}
