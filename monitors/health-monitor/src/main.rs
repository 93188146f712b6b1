//! Health Monitor
//!
//! Prints a warning for each of load, RAM and root filesystem usage that is
//! over its threshold, plus a status line when run from a terminal.

use std::io::{self, Write};
use std::process;

use health_monitor::{init_tracing, run, MonitorConfig, OutputMode};

fn main() -> anyhow::Result<()> {
    init_tracing("health_monitor")?;

    let config = MonitorConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = run(&config, OutputMode::detect(), &mut out) {
        tracing::debug!(error = %err, exit_code = err.exit_code(), "health check failed");
        let _ = writeln!(out, "{}", err);
        let _ = out.flush();
        process::exit(err.exit_code());
    }

    Ok(())
}
