//! Thresholds and data sources for a monitor run

use std::path::PathBuf;

/// Load threshold, in percent of one runnable process (1-minute average × 100)
pub const LOAD_THRESHOLD: f64 = 200.0;
/// RAM utilization threshold, in percent
pub const RAM_THRESHOLD: f64 = 90.0;
/// Root filesystem utilization threshold, in percent
pub const STORAGE_THRESHOLD: f64 = 80.0;

/// Levels above which a metric is reported as a warning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub load: f64,
    pub ram: f64,
    pub storage: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            load: LOAD_THRESHOLD,
            ram: RAM_THRESHOLD,
            storage: STORAGE_THRESHOLD,
        }
    }
}

/// Where each reader takes its input from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    /// Kernel load average file
    pub loadavg: PathBuf,
    /// Kernel memory statistics file
    pub meminfo: PathBuf,
    /// Path whose filesystem is measured
    pub root: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            loadavg: PathBuf::from("/proc/loadavg"),
            meminfo: PathBuf::from("/proc/meminfo"),
            root: PathBuf::from("/"),
        }
    }
}

/// Configuration for a monitor run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorConfig {
    pub thresholds: Thresholds,
    pub sources: SourcePaths,
}

impl MonitorConfig {
    /// Replace the thresholds
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Replace the data sources
    pub fn with_sources(mut self, sources: SourcePaths) -> Self {
        self.sources = sources;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.load, 200.0);
        assert_eq!(thresholds.ram, 90.0);
        assert_eq!(thresholds.storage, 80.0);
    }

    #[test]
    fn test_default_sources_point_at_kernel_interfaces() {
        let sources = SourcePaths::default();
        assert_eq!(sources.loadavg, PathBuf::from("/proc/loadavg"));
        assert_eq!(sources.meminfo, PathBuf::from("/proc/meminfo"));
        assert_eq!(sources.root, PathBuf::from("/"));
    }

    #[test]
    fn test_builder_overrides() {
        let custom = Thresholds {
            load: 50.0,
            ram: 10.0,
            storage: 5.0,
        };
        let config = MonitorConfig::default().with_thresholds(custom);
        assert_eq!(config.thresholds, custom);
        assert_eq!(config.sources, SourcePaths::default());
    }
}
