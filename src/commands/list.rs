//! List command implementation.

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::provider::FileLister;

use super::{resolve_interval, run_report};

/// Run the list command.
pub fn run(args: ListArgs, config: &Config) -> Result<()> {
    let min_size = args.min_size.unwrap_or(config.list.min_size);
    let lister = FileLister::new(&args.dir, min_size);

    tracing::info!(dir = %args.dir.display(), min_size, "Listing files");

    let interval = resolve_interval(args.interval, config);
    run_report(lister, args.output, args.watch, interval)
}
