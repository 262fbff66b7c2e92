//! Directory cleaning: removal of cache files and oversized files.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SweepError};

/// File name treated as removable cache regardless of size.
const CACHE_FILE_NAME: &str = ".DS_Store";

/// Options for a clean pass.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Report what would be removed without deleting anything.
    pub dry_run: bool,
    /// Remove `.DS_Store` cache files.
    pub remove_ds_store: bool,
    /// Remove files of at least this many bytes. None disables size-based
    /// removal entirely.
    pub min_size: Option<u64>,
}

/// One file selected for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Outcome of a clean pass.
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    /// Files removed, or selected for removal in dry-run mode.
    pub removed: Vec<RemovedFile>,
    pub bytes_freed: u64,
}

/// Walk `root` and remove every file matching the options.
///
/// A file qualifies when it is named `.DS_Store` (with `remove_ds_store` on)
/// or when `min_size` is set and the file is at least that large. Any walk
/// or delete failure aborts the whole operation; there is no best-effort
/// continuation, so a partial clean is never reported as complete.
pub fn clean_directory(root: &Path, options: &CleanOptions) -> Result<CleanReport> {
    let mut report = CleanReport::default();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            SweepError::Walk {
                path,
                source: err.into(),
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let metadata = entry.metadata().map_err(|err| SweepError::Walk {
            path: entry.path().to_path_buf(),
            source: err.into(),
        })?;
        let size = metadata.len();

        if !should_remove(entry.file_name().to_string_lossy().as_ref(), size, options) {
            continue;
        }

        if options.dry_run {
            tracing::debug!(path = %entry.path().display(), size, "Would remove");
        } else {
            fs::remove_file(entry.path()).map_err(|err| SweepError::Remove {
                path: entry.path().to_path_buf(),
                source: err,
            })?;
            tracing::debug!(path = %entry.path().display(), size, "Removed");
        }

        report.bytes_freed += size;
        report.removed.push(RemovedFile {
            path: entry.path().to_path_buf(),
            size,
        });
    }

    Ok(report)
}

fn should_remove(name: &str, size: u64, options: &CleanOptions) -> bool {
    if options.remove_ds_store && name == CACHE_FILE_NAME {
        return true;
    }
    matches!(options.min_size, Some(min) if size >= min)
}
