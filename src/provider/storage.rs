//! Storage device snapshots.
//!
//! macOS enumerates devices with `diskutil list` (stateful block output),
//! Linux with `lsblk` (header/columns output). Both map into the same
//! [`StorageDevice`] record; device order follows utility output order.

use crate::error::Result;
use crate::parser::{blocks, columns};
use crate::platform::Platform;
use crate::record::StorageDevice;

use super::{run_command, Provider};

pub struct StorageProvider {
    platform: Platform,
}

impl StorageProvider {
    /// Build a provider for the running platform, failing before any
    /// external command is spawned when the platform is unsupported.
    pub fn new() -> Result<Self> {
        Ok(Self::for_platform(Platform::detect("storage")?))
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Provider for StorageProvider {
    type Record = StorageDevice;

    fn fetch(&self) -> Result<Vec<StorageDevice>> {
        match self.platform {
            Platform::MacOs => {
                let output = run_command("diskutil", &["list"])?;
                Ok(blocks::parse(&output))
            }
            Platform::Linux => {
                let output = run_command("lsblk", &["-o", "NAME,FSTYPE,SIZE,MOUNTPOINT"])?;
                Ok(parse_lsblk(&output))
            }
        }
    }
}

fn parse_lsblk(text: &str) -> Vec<StorageDevice> {
    let table = columns::parse(text);
    table
        .rows()
        .filter_map(|row| {
            let identifier = row.get("NAME")?.to_string();
            Some(StorageDevice {
                identifier,
                kind: row.get("FSTYPE").map(str::to_string),
                name: row.get("MOUNTPOINT").map(str::to_string),
                size: row.get("SIZE").map(str::to_string),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSBLK_SAMPLE: &str = "\
NAME FSTYPE SIZE MOUNTPOINT
sda ext4 100G /
sdb ext4 50G /data
sr0 1024M
";

    #[test]
    fn lsblk_rows_map_to_devices() {
        let devices = parse_lsblk(LSBLK_SAMPLE);

        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0].identifier, "sda");
        assert_eq!(devices[0].kind.as_deref(), Some("ext4"));
        assert_eq!(devices[1].name.as_deref(), Some("/data"));
    }

    #[test]
    fn device_order_follows_utility_output() {
        let devices = parse_lsblk(LSBLK_SAMPLE);
        let names: Vec<_> = devices.iter().map(|d| d.identifier.as_str()).collect();
        assert_eq!(names, ["sda", "sdb", "sr0"]);
    }

    #[test]
    fn short_rows_leave_fields_unset() {
        let devices = parse_lsblk(LSBLK_SAMPLE);
        // sr0 has no MOUNTPOINT column token
        assert_eq!(devices[2].name, None);
    }

    #[test]
    fn empty_output_yields_no_devices() {
        assert!(parse_lsblk("").is_empty());
    }

    #[test]
    fn unsupported_os_fails_before_any_command_is_spawned() {
        use crate::error::SweepError;

        // Construction goes through platform detection first; an unknown OS
        // short-circuits here, so fetch (and its process spawn) is never
        // reachable.
        let err = Platform::detect_from("plan9", "storage").unwrap_err();
        assert!(matches!(
            err,
            SweepError::UnsupportedPlatform { resource: "storage", .. }
        ));
    }
}
