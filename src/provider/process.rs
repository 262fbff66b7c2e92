//! Process listing snapshots from `ps aux`.

use crate::error::Result;
use crate::parser::columns::{self, Row};
use crate::platform::Platform;
use crate::record::ProcessRecord;

use super::{run_command, Provider};

pub struct ProcessProvider {
    _platform: Platform,
}

impl ProcessProvider {
    /// `ps aux` is available on every supported platform, but an unknown
    /// platform is still rejected before anything is spawned.
    pub fn new() -> Result<Self> {
        Ok(Self {
            _platform: Platform::detect("process")?,
        })
    }
}

impl Provider for ProcessProvider {
    type Record = ProcessRecord;

    fn fetch(&self) -> Result<Vec<ProcessRecord>> {
        let output = run_command("ps", &["aux"])?;
        let table = columns::parse(&output);
        Ok(table.rows().filter_map(to_record).collect())
    }
}

/// Map one `ps aux` row to a record. Rows missing a numeric PID are
/// malformed and skipped.
fn to_record(row: Row<'_>) -> Option<ProcessRecord> {
    let pid = row.get("PID")?.parse().ok()?;
    Some(ProcessRecord {
        user: row.get("USER")?.to_string(),
        pid,
        cpu: row.get("%CPU")?.parse().ok()?,
        mem: row.get("%MEM")?.parse().ok()?,
        command: row.get("COMMAND")?.to_string(),
    })
}
