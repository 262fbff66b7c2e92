use std::path::PathBuf;

use humansize::{format_size, BINARY};
use serde::{Deserialize, Serialize};

/// A record that can be laid out as a fixed set of table columns.
///
/// Missing optional fields render as empty cells, never as errors.
pub trait Tabular {
    /// Column headers, fixed per record kind.
    const COLUMNS: &'static [&'static str];

    /// Cell values for one row, in column order.
    fn row(&self) -> Vec<String>;
}

/// One file found by the directory lister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: u64,
}

impl Tabular for FileRecord {
    const COLUMNS: &'static [&'static str] = &["Path", "Size"];

    fn row(&self) -> Vec<String> {
        vec![
            self.path.display().to_string(),
            format_size(self.size, BINARY),
        ]
    }
}

/// One row of the process listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessRecord {
    pub user: String,
    pub pid: u32,
    pub cpu: f32,
    pub mem: f32,
    pub command: String,
}

impl Tabular for ProcessRecord {
    const COLUMNS: &'static [&'static str] = &["User", "PID", "%CPU", "%MEM", "Command"];

    fn row(&self) -> Vec<String> {
        vec![
            self.user.clone(),
            self.pid.to_string(),
            format!("{:.1}", self.cpu),
            format!("{:.1}", self.mem),
            self.command.clone(),
        ]
    }
}

/// One memory counter, already scaled to bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryCounter {
    pub name: String,
    pub bytes: u64,
}

impl Tabular for MemoryCounter {
    const COLUMNS: &'static [&'static str] = &["Counter", "Size"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), format_size(self.bytes, BINARY)]
    }
}

/// One storage device or partition.
///
/// Only the identifier is guaranteed; the rest depends on what the platform
/// utility reported for the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageDevice {
    pub identifier: String,
    pub kind: Option<String>,
    pub name: Option<String>,
    pub size: Option<String>,
}

impl StorageDevice {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            kind: None,
            name: None,
            size: None,
        }
    }
}

impl Tabular for StorageDevice {
    const COLUMNS: &'static [&'static str] = &["Identifier", "Type", "Name", "Size"];

    fn row(&self) -> Vec<String> {
        vec![
            self.identifier.clone(),
            self.kind.clone().unwrap_or_default(),
            self.name.clone().unwrap_or_default(),
            self.size.clone().unwrap_or_default(),
        ]
    }
}
