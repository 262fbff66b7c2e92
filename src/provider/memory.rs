//! Memory usage snapshots.
//!
//! Both platforms produce the same typed counters, so every output format
//! works everywhere: macOS parses `vm_stat` page counters, Linux flattens
//! `free -b` into one counter per row/column pair.

use crate::error::Result;
use crate::parser::counters;
use crate::platform::Platform;
use crate::record::MemoryCounter;

use super::{run_command, Provider};

pub struct MemoryProvider {
    platform: Platform,
}

impl MemoryProvider {
    /// Build a provider for the running platform, failing before any
    /// external command is spawned when the platform is unsupported.
    pub fn new() -> Result<Self> {
        Ok(Self::for_platform(Platform::detect("memory")?))
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Provider for MemoryProvider {
    type Record = MemoryCounter;

    fn fetch(&self) -> Result<Vec<MemoryCounter>> {
        match self.platform {
            Platform::MacOs => {
                let output = run_command("vm_stat", &[])?;
                Ok(counters::parse(&output))
            }
            Platform::Linux => {
                let output = run_command("free", &["-b"])?;
                Ok(parse_free(&output))
            }
        }
    }
}

/// Flatten `free -b` output into counters named `<row> <column>`.
///
/// The first line holds the column headers; each following line starts with
/// a row label (`Mem:`, `Swap:`) followed by one value per column. Rows may
/// be shorter than the header. Unparsable values are skipped.
fn parse_free(text: &str) -> Vec<MemoryCounter> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split_whitespace().collect();

    let mut result = Vec::new();
    for line in lines {
        let mut fields = line.split_whitespace();
        let Some(label) = fields.next() else {
            continue;
        };
        let label = label.trim_end_matches(':');

        for (header, value) in headers.iter().zip(fields) {
            let Ok(bytes) = value.parse::<u64>() else {
                continue;
            };
            result.push(MemoryCounter {
                name: format!("{} {}", label, header),
                bytes,
            });
        }
    }

    result
}
