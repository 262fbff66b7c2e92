//! Subcommand implementations wiring CLI arguments into the core.

pub mod clean;
pub mod list;
pub mod scan;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::provider::Provider;
use crate::record::Tabular;
use crate::render::{render, OutputFormat};
use crate::watch::{install_signal_handlers, RefreshPolicy, Watcher};

/// Run one provider/renderer pair under the requested refresh policy.
///
/// This is the composition shared by every reporting subcommand: fetch a
/// snapshot, render it, print it, either once or on every tick.
fn run_report<P>(provider: P, format: OutputFormat, watch: bool, interval: Duration) -> Result<()>
where
    P: Provider,
    P::Record: Tabular + Serialize,
{
    let policy = if watch {
        RefreshPolicy::Periodic(interval)
    } else {
        RefreshPolicy::OneShot
    };

    let running = Arc::new(AtomicBool::new(true));
    if watch {
        if let Err(err) = install_signal_handlers(Arc::clone(&running)) {
            tracing::warn!("Failed to install signal handlers: {}", err);
        }
    }

    Watcher::new(policy, running).run(|| {
        let snapshot = provider.fetch()?;
        let output = render(&snapshot, format)?;
        println!("{}", output);
        Ok(())
    })
}

/// Resolve the watch interval: CLI flag over config over built-in default.
fn resolve_interval(flag: Option<u64>, config: &Config) -> Duration {
    Duration::from_secs(flag.unwrap_or(config.watch.interval))
}
