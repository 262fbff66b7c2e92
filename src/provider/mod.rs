//! Snapshot providers, one per resource kind.
//!
//! A provider produces one complete snapshot per `fetch` call. Snapshots are
//! built fresh every cycle and never cached across cycles.

pub mod files;
pub mod memory;
pub mod process;
pub mod storage;

use std::process::Command;

use serde::Serialize;

use crate::error::{Result, SweepError};
use crate::record::Tabular;

pub use files::FileLister;
pub use memory::MemoryProvider;
pub use process::ProcessProvider;
pub use storage::StorageProvider;

/// Capability to produce the current set of records for one resource kind.
pub trait Provider {
    type Record: Tabular + Serialize;

    /// Capture one snapshot. All records come from a single invocation of
    /// the underlying data source.
    fn fetch(&self) -> Result<Vec<Self::Record>>;
}

/// Run an external utility and return its stdout as text.
///
/// A missing binary or non-zero exit becomes a single descriptive error
/// naming the program; no partial output is returned. The call blocks with
/// no timeout: a hung utility stalls the caller until it is interrupted
/// externally.
pub(crate) fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| SweepError::CommandFailed {
            program: program.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SweepError::CommandFailed {
            program: program.to_string(),
            message: format!("exited with {}: {}", output.status, stderr.trim()),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_reports_program_name() {
        let err = run_command("sysweep-no-such-binary", &[]).unwrap_err();
        assert!(err.to_string().contains("sysweep-no-such-binary"));
    }

    #[test]
    fn nonzero_exit_is_an_error() {
        let err = run_command("false", &[]).unwrap_err();
        assert!(matches!(err, SweepError::CommandFailed { .. }));
    }

    #[test]
    fn stdout_is_captured() {
        let out = run_command("echo", &["hello"]).unwrap();
        assert_eq!(out.trim(), "hello");
    }
}
