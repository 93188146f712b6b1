//! Combined health snapshot

/// The three figures a single run produces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthSnapshot {
    /// 1-minute load average × 100
    pub load_percent: f64,
    /// RAM utilization (0-100)
    pub ram_percent: f64,
    /// Root filesystem utilization (0-100)
    pub storage_percent: f64,
}
