//! Stateful block parser for `diskutil list` output.

use crate::record::StorageDevice;

const SCHEME_MARKERS: &[&str] = &[
    "GUID_partition_scheme",
    "FDisk_partition_scheme",
    "Apple_partition_scheme",
];

/// Parse `diskutil list` output into [`StorageDevice`]s.
///
/// A line starting with `/dev/` opens a new device; following lines fill in
/// its type, name, and size until the next `/dev/` line or end of input. An
/// identifier with no qualifying lines still yields a record.
pub fn parse(text: &str) -> Vec<StorageDevice> {
    let mut devices = Vec::new();
    let mut current: Option<StorageDevice> = None;

    for line in text.lines() {
        if line.starts_with("/dev/") {
            if let Some(device) = current.take() {
                devices.push(device);
            }
            current = Some(StorageDevice::new(line));
            continue;
        }

        let Some(device) = current.as_mut() else {
            continue;
        };

        if SCHEME_MARKERS.iter().any(|marker| line.contains(marker)) {
            device.kind = Some(line.to_string());
        } else if line.contains(" (disk") {
            let parts: Vec<&str> = line.split(' ').collect();
            if let Some((last, rest)) = parts.split_last() {
                device.name = Some(rest.join(" "));
                device.size = Some(last.to_string());
            }
        }
    }

    if let Some(device) = current {
        devices.push(device);
    }

    devices
}
