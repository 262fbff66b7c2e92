//! Clean command implementation.

use std::io::{self, Write};

use humansize::{format_size, BINARY};

use crate::cleaner::{clean_directory, CleanOptions, CleanReport};
use crate::cli::CleanArgs;
use crate::config::Config;

/// Run the clean command.
///
/// `verbose` comes from the global flag and enables per-file removal lines;
/// dry runs always list their would-be removals.
pub fn run(args: CleanArgs, config: &Config, verbose: bool) -> anyhow::Result<()> {
    let options = CleanOptions {
        dry_run: args.dry_run,
        remove_ds_store: args.ds_store || config.clean.ds_store,
        min_size: args.min_size,
    };

    if !options.remove_ds_store && options.min_size.is_none() {
        println!("Nothing to do: pass --ds-store and/or --min-size to select files.");
        return Ok(());
    }

    // Deletion needs explicit consent; dry-run touches nothing
    if !args.confirm && !args.dry_run {
        print!(
            "Are you sure you want to clean the directory {}? [y/N] ",
            args.dir.display()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !matches!(input.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Clean operation canceled.");
            return Ok(());
        }
    }

    tracing::info!(dir = %args.dir.display(), ?options, "Cleaning directory");

    let report = clean_directory(&args.dir, &options)?;
    print_report(&report, args.dry_run, verbose);

    if !args.dry_run {
        println!("Successfully cleaned directory: {}", args.dir.display());
    }

    Ok(())
}

fn print_report(report: &CleanReport, dry_run: bool, verbose: bool) {
    let verb = if dry_run { "Would remove" } else { "Removed" };

    if dry_run || verbose {
        for file in &report.removed {
            println!(
                "{}: {} ({})",
                verb,
                file.path.display(),
                format_size(file.size, BINARY)
            );
        }
    }

    println!(
        "{}: {} file{}, {}",
        if dry_run { "Total (dry run)" } else { "Total" },
        report.removed.len(),
        if report.removed.len() == 1 { "" } else { "s" },
        format_size(report.bytes_freed, BINARY)
    );
}
