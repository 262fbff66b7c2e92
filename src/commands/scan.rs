//! Scan command implementation.

use crate::cli::{ScanArgs, ScanResource};
use crate::config::Config;
use crate::error::Result;
use crate::provider::{MemoryProvider, ProcessProvider, StorageProvider};

use super::{resolve_interval, run_report};

/// Run the scan command.
///
/// Provider construction checks platform support up front, so an
/// unsupported platform fails here before any command is spawned.
pub fn run(args: ScanArgs, config: &Config) -> Result<()> {
    let interval = resolve_interval(args.interval, config);

    match args.resource {
        ScanResource::Memory => {
            run_report(MemoryProvider::new()?, args.output, args.watch, interval)
        }
        ScanResource::Storage => {
            run_report(StorageProvider::new()?, args.output, args.watch, interval)
        }
        ScanResource::Process => {
            run_report(ProcessProvider::new()?, args.output, args.watch, interval)
        }
    }
}
