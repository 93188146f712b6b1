//! Error type shared by the readers and the entrypoint

use std::io;
use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

/// Exit status for unreadable or malformed kernel interfaces (-1 as a process status)
pub const EXIT_READ_FAILURE: i32 = 255;
/// Exit status when the report cannot be written
pub const EXIT_OUTPUT_FAILURE: i32 = 1;

pub type MonitorResult<T> = Result<T, MonitorError>;

/// Fatal failures of a monitor run
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Error reading the {} filesystem stats: {}", path.display(), *errno as i32)]
    Statfs { path: PathBuf, errno: Errno },

    #[error("Error writing report: {0}")]
    Output(#[from] io::Error),
}

impl MonitorError {
    pub(crate) fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Process exit status for this failure
    ///
    /// Filesystem statistics failures exit with the raw errno.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. } | Self::Parse { .. } => EXIT_READ_FAILURE,
            Self::Statfs { errno, .. } => match *errno as i32 {
                0 => EXIT_READ_FAILURE,
                code => code,
            },
            Self::Output(_) => EXIT_OUTPUT_FAILURE,
        }
    }
}
