//! Exit code logic for the downloader process.
//!
//! Single responsibility: map the run outcome to the process exit code. All
//! failure kinds (usage, network, disk, timeout) collapse to the same code;
//! only the log lines distinguish them.

use std::process::ExitCode;

/// Process exit outcome for one download invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessExit {
    /// The file was downloaded completely.
    Success,
    /// Any failure: bad arguments, network error, disk error, or timeout.
    Failure,
}

impl ProcessExit {
    /// The numeric exit code reported to the supervising orchestrator.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl From<ProcessExit> for ExitCode {
    fn from(outcome: ProcessExit) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Determines the process exit outcome from the run result.
#[must_use]
pub fn determine_exit_outcome<T, E>(result: &Result<T, E>) -> ProcessExit {
    if result.is_ok() {
        ProcessExit::Success
    } else {
        ProcessExit::Failure
    }
}
