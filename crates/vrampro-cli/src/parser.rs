//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;
use vrampro_core::settings::ENV_TARGET_VOLUME;

/// Command-line interface for guided paging-file provisioning.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "vrampro")]
#[command(about = "Provision fixed-size Windows paging-file capacity in two phases")]
#[command(version)]
pub struct Cli {
    /// Volume that hosts the paging file (e.g. "C:")
    #[arg(long, global = true, env = ENV_TARGET_VOLUME)]
    pub volume: Option<String>,

    /// Log the configuration requests instead of issuing them
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Render results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "vrampro",
            "--verbose",
            "--volume",
            "D:",
            "--dry-run",
            "status",
        ]);
        assert!(cli.verbose);
        assert!(cli.dry_run);
        assert_eq!(cli.volume, Some("D:".to_string()));
        assert!(matches!(cli.command, Some(Commands::Status)));
    }
}
