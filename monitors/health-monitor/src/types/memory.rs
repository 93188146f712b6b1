//! Memory information types

/// The `/proc/meminfo` fields the monitor cares about, in KiB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemInfo {
    /// `MemTotal`
    pub total_kib: u64,
    /// `MemFree` (parsed for completeness, not used in the usage figure)
    pub free_kib: u64,
    /// `MemAvailable`
    pub available_kib: u64,
}

impl MemInfo {
    /// Share of physical memory not available for allocation (0-100)
    pub fn usage_percent(&self) -> f64 {
        if self.total_kib == 0 {
            return 0.0;
        }
        let available = self.available_kib.min(self.total_kib);
        100.0 * (1.0 - available as f64 / self.total_kib as f64)
    }
}
