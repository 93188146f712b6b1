//! Load average collection

use std::path::Path;

use crate::error::{MonitorError, MonitorResult};
use crate::types::LoadAverage;

/// Read and parse the load average file
pub fn read_load(path: &Path) -> MonitorResult<LoadAverage> {
    let contents = super::read_source(path)?;
    let load = parse_load(path, &contents)?;
    tracing::debug!(path = %path.display(), one = load.one, "read load average");
    Ok(load)
}

/// Parse `/proc/loadavg` contents
///
/// Only the first token (the 1-minute average) is required.
pub fn parse_load(path: &Path, contents: &str) -> MonitorResult<LoadAverage> {
    let mut tokens = contents.split_whitespace();

    let first = tokens
        .next()
        .ok_or_else(|| MonitorError::parse(path, "no load average found"))?;
    let one: f64 = first
        .parse()
        .map_err(|e| MonitorError::parse(path, format!("invalid load average {:?}: {}", first, e)))?;
    if !one.is_finite() || one < 0.0 {
        return Err(MonitorError::parse(
            path,
            format!("load average out of range: {}", first),
        ));
    }

    let mut next_average = || tokens.next().and_then(|t| t.parse::<f64>().ok());
    let five = next_average();
    let fifteen = next_average();

    Ok(LoadAverage { one, five, fifteen })
}
