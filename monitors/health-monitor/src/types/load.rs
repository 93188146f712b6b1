//! Load average types

/// Load averages as exposed by `/proc/loadavg`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadAverage {
    /// 1-minute load average
    pub one: f64,
    /// 5-minute load average, if present
    pub five: Option<f64>,
    /// 15-minute load average, if present
    pub fifteen: Option<f64>,
}

impl LoadAverage {
    /// 1-minute load average scaled by 100 (can exceed 100)
    pub fn percent(&self) -> f64 {
        100.0 * self.one
    }
}
