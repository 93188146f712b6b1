//! Health Monitor Library
//!
//! One-shot check of three Linux health indicators: the 1-minute load
//! average (scaled ×100), RAM utilization from `/proc/meminfo`, and root
//! filesystem utilization from `statvfs`. Metrics above their thresholds
//! are reported as warning lines; a status summary follows when stdout is
//! a terminal.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use health_monitor::{run, MonitorConfig, OutputMode};
//!
//! let snapshot = run(&MonitorConfig::default(), OutputMode::Redirected, &mut std::io::stdout())?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `health-monitor` (no arguments). Exit status is 0 on
//! success, 255 when a kernel interface cannot be read or parsed, and the
//! raw errno when the root filesystem cannot be queried.

pub mod config;
pub mod error;
pub mod info;
pub mod init;
pub mod report;
pub mod types;

use std::io::Write;

pub use config::{MonitorConfig, SourcePaths, Thresholds};
pub use error::{MonitorError, MonitorResult};
pub use info::collect;
pub use init::init_tracing;
pub use report::{OutputMode, Reporter, Warning};
pub use types::HealthSnapshot;

/// Collect all metrics and write the report to `out`
///
/// Nothing is written if any reader fails.
pub fn run<W: Write>(
    config: &MonitorConfig,
    mode: OutputMode,
    out: &mut W,
) -> MonitorResult<HealthSnapshot> {
    let snapshot = collect(&config.sources)?;
    tracing::debug!(
        load_percent = snapshot.load_percent,
        ram_percent = snapshot.ram_percent,
        storage_percent = snapshot.storage_percent,
        ?mode,
        "collected health snapshot"
    );

    Reporter::new(config.thresholds).write_report(out, &snapshot, mode)?;
    Ok(snapshot)
}
