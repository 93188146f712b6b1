//! Memory utilization collection

use std::path::Path;

use crate::error::{MonitorError, MonitorResult};
use crate::types::MemInfo;

const MEM_TOTAL: &str = "MemTotal";
const MEM_FREE: &str = "MemFree";
const MEM_AVAILABLE: &str = "MemAvailable";

/// Read and parse the memory information file
pub fn read_memory(path: &Path) -> MonitorResult<MemInfo> {
    let contents = super::read_source(path)?;
    let info = parse_meminfo(path, &contents)?;
    tracing::debug!(
        path = %path.display(),
        total_kib = info.total_kib,
        free_kib = info.free_kib,
        available_kib = info.available_kib,
        "read memory info"
    );
    Ok(info)
}

/// Parse `/proc/meminfo` contents
///
/// Labelled fields are matched line by line in any order and with any
/// spacing. Unrelated lines are skipped.
pub fn parse_meminfo(path: &Path, contents: &str) -> MonitorResult<MemInfo> {
    let mut total = None;
    let mut free = None;
    let mut available = None;

    for line in contents.lines() {
        let Some((label, rest)) = line.split_once(':') else {
            continue;
        };
        let slot = match label.trim() {
            MEM_TOTAL => &mut total,
            MEM_FREE => &mut free,
            MEM_AVAILABLE => &mut available,
            _ => continue,
        };
        if slot.is_some() {
            return Err(MonitorError::parse(
                path,
                format!("duplicate {} field", label.trim()),
            ));
        }
        *slot = Some(parse_kib(path, label.trim(), rest)?);
    }

    let missing = |label: &str| MonitorError::parse(path, format!("missing {} field", label));
    let info = MemInfo {
        total_kib: total.ok_or_else(|| missing(MEM_TOTAL))?,
        free_kib: free.ok_or_else(|| missing(MEM_FREE))?,
        available_kib: available.ok_or_else(|| missing(MEM_AVAILABLE))?,
    };

    if info.total_kib == 0 {
        return Err(MonitorError::parse(path, "MemTotal is zero"));
    }
    if info.available_kib > info.total_kib {
        return Err(MonitorError::parse(
            path,
            format!(
                "MemAvailable ({} kB) exceeds MemTotal ({} kB)",
                info.available_kib, info.total_kib
            ),
        ));
    }

    Ok(info)
}

fn parse_kib(path: &Path, label: &str, rest: &str) -> MonitorResult<u64> {
    let mut parts = rest.split_whitespace();
    let value = parts
        .next()
        .ok_or_else(|| MonitorError::parse(path, format!("{} has no value", label)))?;
    let kib = value.parse::<u64>().map_err(|e| {
        MonitorError::parse(path, format!("invalid {} value {:?}: {}", label, value, e))
    })?;

    match (parts.next(), parts.next()) {
        (None, None) | (Some("kB"), None) => Ok(kib),
        _ => Err(MonitorError::parse(
            path,
            format!("unexpected unit for {}: {:?}", label, rest.trim()),
        )),
    }
}
