//! Filesystem block statistics

/// Block counts for a mounted filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStats {
    /// Total data blocks (`f_blocks`)
    pub total_blocks: u64,
    /// Blocks available to unprivileged users (`f_bavail`)
    pub available_blocks: u64,
}

impl BlockStats {
    /// Share of blocks not available to unprivileged users (0-100)
    pub fn usage_percent(&self) -> f64 {
        if self.total_blocks == 0 {
            return 0.0;
        }
        let available = self.available_blocks.min(self.total_blocks);
        100.0 * (1.0 - available as f64 / self.total_blocks as f64)
    }
}
