use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures from log file operations.
///
/// Nothing in this crate terminates the process; every file operation reports
/// back to the caller, who chooses between propagating and
/// [`abort_on_error`].
#[derive(Debug, Error)]
pub enum LogError {
    #[error("Failed to open log file {}: {}", path.display(), source)]
    FileOpen { path: PathBuf, source: io::Error },

    #[error("Failed to create log file {}: {}", path.display(), source)]
    FileCreate { path: PathBuf, source: io::Error },

    #[error("Failed to write to log file {}: {}", path.display(), source)]
    Write { path: PathBuf, source: io::Error },
}

/// Unwraps a logging result, aborting the process on failure.
///
/// Prints the diagnostic to stderr and exits with status 1. This is the
/// fail-fast policy for callers that treat an unopenable log target as
/// unrecoverable ("logging must not silently vanish").
pub fn abort_on_error<T>(result: Result<T, LogError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
