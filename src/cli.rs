use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::render::OutputFormat;

/// Sysweep - A command-line utility for disk and system inspection
#[derive(Parser, Debug)]
#[command(name = "sysweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List files in a directory recursively, largest first
    List(ListArgs),

    /// Clean a directory by removing cache files and oversized files
    Clean(CleanArgs),

    /// Scan and display system information
    Scan(ScanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to list
    #[arg(short, long, value_name = "PATH")]
    pub dir: PathBuf,

    /// Minimum file size in bytes
    #[arg(long, value_name = "BYTES")]
    pub min_size: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Refresh the listing on a fixed interval until interrupted
    #[arg(short, long)]
    pub watch: bool,

    /// Refresh interval in seconds for watch mode
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,
}

#[derive(Args, Debug)]
#[command(
    after_help = "The global --verbose flag prints each removed file; dry runs always do."
)]
pub struct CleanArgs {
    /// Directory to clean
    #[arg(short, long, value_name = "PATH")]
    pub dir: PathBuf,

    /// Report what would be removed without deleting anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub confirm: bool,

    /// Remove .DS_Store cache files
    #[arg(long)]
    pub ds_store: bool,

    /// Remove files of at least this many bytes
    #[arg(long, value_name = "BYTES")]
    pub min_size: Option<u64>,
}

/// Resource kinds available to `scan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScanResource {
    Memory,
    Storage,
    Process,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Resource to scan
    #[arg(value_enum)]
    pub resource: ScanResource,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Refresh the report on a fixed interval until interrupted
    #[arg(short, long)]
    pub watch: bool,

    /// Refresh interval in seconds for watch mode
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Validates the CLI definition is correct
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_list_command() {
        let cli = Cli::parse_from(["sysweep", "list", "--dir", "/tmp", "--min-size", "1024"]);
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.dir, PathBuf::from("/tmp"));
                assert_eq!(args.min_size, Some(1024));
                assert_eq!(args.output, OutputFormat::Table);
                assert!(!args.watch);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn parse_scan_with_output() {
        let cli = Cli::parse_from(["sysweep", "scan", "memory", "--output", "json"]);
        match cli.command {
            Command::Scan(args) => {
                assert_eq!(args.resource, ScanResource::Memory);
                assert_eq!(args.output, OutputFormat::Json);
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn parse_clean_with_options() {
        let cli = Cli::parse_from([
            "sysweep", "clean", "--dir", "/tmp", "--dry-run", "--ds-store",
        ]);
        match cli.command {
            Command::Clean(args) => {
                assert!(args.dry_run);
                assert!(args.ds_store);
                assert_eq!(args.min_size, None);
            }
            _ => panic!("Expected Clean command"),
        }
    }

    #[test]
    fn list_requires_dir() {
        let result = Cli::try_parse_from(["sysweep", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::parse_from(["sysweep", "-vvv", "scan", "process"]);
        assert_eq!(cli.verbose, 3);
    }
}
