use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for mediaprobe
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("No probeable media files found")]
    NoFilesFound,

    #[error("External dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Command '{0}' failed with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed to parse JSON output: {0}")]
    JsonParse(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for mediaprobe operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CoreError::CommandStart` for a command that could not be spawned.
pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

/// Builds a `CoreError::CommandFailed` for a command that exited non-zero.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into())
}
