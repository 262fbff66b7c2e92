//! Parser for `key: value` counter tables as emitted by `vm_stat`.

use crate::record::MemoryCounter;

/// Page size assumed when the output carries no `Pagesize:` line.
const DEFAULT_PAGE_SIZE: u64 = 4096;

/// Parse counter output into byte-scaled [`MemoryCounter`]s.
///
/// Each `key: <integer>[.]` line contributes one counter; keys may contain
/// spaces. A `Pagesize: N` line sets the scaling factor applied to every
/// counter. Lines that do not match are skipped silently. Counter order
/// follows input order.
pub fn parse(text: &str) -> Vec<MemoryCounter> {
    let mut page_size = None;
    let mut raw: Vec<(String, u64)> = Vec::new();

    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_end_matches('.');

        let Ok(count) = value.parse::<u64>() else {
            continue;
        };

        if key == "Pagesize" {
            page_size = Some(count);
        } else {
            raw.push((key.to_string(), count));
        }
    }

    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    raw.into_iter()
        .map(|(name, count)| MemoryCounter {
            name,
            // Saturate rather than overflow on pathological counter text
            bytes: count.saturating_mul(page_size),
        })
        .collect()
}
