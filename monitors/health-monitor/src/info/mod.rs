//! Readers for the three health indicators
//!
//! Each reader is split into a pure `parse_*` function over the raw
//! interface contents and a `read_*` function that does the I/O.

pub mod load;
pub mod memory;
pub mod storage;

use std::fs;
use std::path::Path;

use crate::config::SourcePaths;
use crate::error::{MonitorError, MonitorResult};
use crate::types::HealthSnapshot;

/// Read all three metrics in order: load, memory, storage
///
/// Stops at the first failure; later readers are not consulted.
pub fn collect(sources: &SourcePaths) -> MonitorResult<HealthSnapshot> {
    let load = load::read_load(&sources.loadavg)?;
    let memory = memory::read_memory(&sources.meminfo)?;
    let storage = storage::read_storage(&sources.root)?;

    Ok(HealthSnapshot {
        load_percent: load.percent(),
        ram_percent: memory.usage_percent(),
        storage_percent: storage.usage_percent(),
    })
}

fn read_source(path: &Path) -> MonitorResult<String> {
    fs::read_to_string(path).map_err(|source| MonitorError::Read {
        path: path.to_path_buf(),
        source,
    })
}
