//! Threshold checks and report output
//!
//! Warnings are written for every metric strictly above its threshold, in
//! the order load, RAM, storage. The one-line status summary follows only
//! when stdout is a terminal.

use std::fmt;
use std::io::{self, IsTerminal, Write};

use crate::config::Thresholds;
use crate::types::HealthSnapshot;

/// Where the report is going, decided once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Attached to a terminal: warnings plus the status summary
    Interactive,
    /// File or pipe: warnings only
    Redirected,
}

impl OutputMode {
    /// Detect from the process's stdout
    pub fn detect() -> Self {
        Self::from_terminal(io::stdout().is_terminal())
    }

    pub fn from_terminal(is_terminal: bool) -> Self {
        if is_terminal {
            Self::Interactive
        } else {
            Self::Redirected
        }
    }

    pub fn is_interactive(self) -> bool {
        self == Self::Interactive
    }
}

/// Which indicator a warning is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Load,
    Ram,
    Storage,
}

/// A metric that crossed its threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Warning {
    pub metric: Metric,
    pub threshold: f64,
    pub value: f64,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = match self.metric {
            Metric::Load => "System load",
            Metric::Ram => "RAM usage",
            Metric::Storage => "Storage usage",
        };
        write!(
            f,
            "{} over threshold ({:.0}%): {:.0}%",
            subject, self.threshold, self.value
        )
    }
}

/// Compares snapshots against a fixed set of thresholds
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    thresholds: Thresholds,
}

impl Reporter {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Metrics strictly above their threshold, in load, RAM, storage order
    pub fn warnings(&self, snapshot: &HealthSnapshot) -> Vec<Warning> {
        let checks = [
            (Metric::Load, self.thresholds.load, snapshot.load_percent),
            (Metric::Ram, self.thresholds.ram, snapshot.ram_percent),
            (Metric::Storage, self.thresholds.storage, snapshot.storage_percent),
        ];

        checks
            .into_iter()
            .filter(|&(_, threshold, value)| value > threshold)
            .map(|(metric, threshold, value)| Warning {
                metric,
                threshold,
                value,
            })
            .collect()
    }

    /// Write warnings, then the summary line when `mode` is interactive
    pub fn write_report<W: Write>(
        &self,
        out: &mut W,
        snapshot: &HealthSnapshot,
        mode: OutputMode,
    ) -> io::Result<()> {
        for warning in self.warnings(snapshot) {
            tracing::debug!(metric = ?warning.metric, value = warning.value, "threshold exceeded");
            writeln!(out, "{}", warning)?;
        }

        if mode.is_interactive() {
            writeln!(out, "{}", summary_line(snapshot))?;
        }

        out.flush()
    }
}

/// `Load: <load>%  RAM: <ram>%  Storage: <storage>%`
pub fn summary_line(snapshot: &HealthSnapshot) -> String {
    format!(
        "Load: {:.0}%  RAM: {:.0}%  Storage: {:.0}%",
        snapshot.load_percent, snapshot.ram_percent, snapshot.storage_percent
    )
}
