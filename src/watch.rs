//! The refresh loop driving one-shot and watch-mode execution.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use nix::sys::signal::{self, SigHandler, Signal};

use crate::error::Result;

/// Whether to run a snapshot once or on a fixed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    OneShot,
    Periodic(Duration),
}

/// Drives a fetch+render cycle according to a [`RefreshPolicy`].
///
/// In one-shot mode a cycle error is fatal. In periodic mode cycle errors
/// are logged and the loop continues: watch mode favors availability over
/// fail-fast. Cancellation is external, via the shared running flag.
pub struct Watcher {
    policy: RefreshPolicy,
    running: Arc<AtomicBool>,
    max_cycles: Option<u64>,
}

impl Watcher {
    pub fn new(policy: RefreshPolicy, running: Arc<AtomicBool>) -> Self {
        Self {
            policy,
            running,
            max_cycles: None,
        }
    }

    /// Bound the number of periodic cycles. Used by tests to drive the loop
    /// a finite number of ticks without a real signal.
    pub fn with_max_cycles(mut self, cycles: u64) -> Self {
        self.max_cycles = Some(cycles);
        self
    }

    /// Run the loop, invoking `cycle` once per refresh.
    pub fn run<F>(&self, mut cycle: F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let interval = match self.policy {
            RefreshPolicy::OneShot => return cycle(),
            RefreshPolicy::Periodic(interval) => interval,
        };

        let mut completed = 0u64;
        loop {
            let start = Instant::now();

            clear_screen();
            if let Err(err) = cycle() {
                tracing::error!("Refresh cycle failed: {}", err);
            }

            completed += 1;
            if let Some(max) = self.max_cycles {
                if completed >= max {
                    break;
                }
            }

            if !self.running.load(Ordering::SeqCst) {
                tracing::info!("Watch stopping");
                break;
            }

            // Sleep in small chunks so the running flag stays responsive
            let elapsed = start.elapsed();
            if elapsed < interval {
                let chunk = Duration::from_secs(1);
                let mut remaining = interval - elapsed;

                while remaining > Duration::ZERO && self.running.load(Ordering::SeqCst) {
                    let sleep = remaining.min(chunk);
                    thread::sleep(sleep);
                    remaining = remaining.saturating_sub(sleep);
                }
            }
        }

        Ok(())
    }
}

fn clear_screen() {
    let _ = crossterm::execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

static RUNNING: OnceLock<Arc<AtomicBool>> = OnceLock::new();

extern "C" fn handle_shutdown(_: i32) {
    if let Some(running) = RUNNING.get() {
        running.store(false, Ordering::SeqCst);
    }
}

/// Install SIGINT/SIGTERM handlers that clear the running flag so a watch
/// loop finishes its current cycle and exits. Call at most once, before
/// entering the loop.
pub fn install_signal_handlers(running: Arc<AtomicBool>) -> nix::Result<()> {
    let _ = RUNNING.set(running);

    unsafe {
        signal::signal(Signal::SIGTERM, SigHandler::Handler(handle_shutdown))?;
        signal::signal(Signal::SIGINT, SigHandler::Handler(handle_shutdown))?;
    }

    Ok(())
}
