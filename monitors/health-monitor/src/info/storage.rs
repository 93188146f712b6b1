//! Root filesystem utilization collection

use std::path::Path;

use nix::sys::statvfs::statvfs;

use crate::error::{MonitorError, MonitorResult};
use crate::types::BlockStats;

/// Query block statistics for the filesystem holding `path`
pub fn read_storage(path: &Path) -> MonitorResult<BlockStats> {
    let stats = statvfs(path).map_err(|errno| MonitorError::Statfs {
        path: path.to_path_buf(),
        errno,
    })?;

    let blocks = BlockStats {
        total_blocks: stats.blocks() as u64,
        available_blocks: stats.blocks_available() as u64,
    };
    tracing::debug!(
        path = %path.display(),
        total_blocks = blocks.total_blocks,
        available_blocks = blocks.available_blocks,
        "read filesystem stats"
    );
    Ok(blocks)
}
