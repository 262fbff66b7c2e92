//! Recursive file listing ordered by size.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SweepError};
use crate::record::FileRecord;

use super::Provider;

/// Lists files under a root directory, largest first.
#[derive(Debug, Clone)]
pub struct FileLister {
    root: PathBuf,
    min_size: u64,
}

impl FileLister {
    pub fn new(root: impl Into<PathBuf>, min_size: u64) -> Self {
        Self {
            root: root.into(),
            min_size,
        }
    }
}

impl Provider for FileLister {
    type Record = FileRecord;

    /// Walk the tree and return every file of at least `min_size` bytes,
    /// sorted by strictly descending size with ties in traversal order.
    ///
    /// Any walk error aborts the whole listing; a partial listing is never
    /// presented as complete.
    fn fetch(&self) -> Result<Vec<FileRecord>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
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

            if metadata.len() >= self.min_size {
                files.push(FileRecord {
                    path: entry.path().to_path_buf(),
                    size: metadata.len(),
                });
            }
        }

        // Stable sort keeps traversal order for equal sizes
        files.sort_by(|a, b| b.size.cmp(&a.size));

        Ok(files)
    }
}
