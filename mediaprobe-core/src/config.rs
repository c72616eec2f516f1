//! Configuration structures and constants for the mediaprobe-core library.

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

// Default constants

/// Default ffprobe binary name, resolved on PATH.
pub const FFPROBE_BIN: &str = "ffprobe";

/// Main configuration structure for the mediaprobe-core library.
///
/// This structure is typically created by the consumer of the library
/// (e.g., mediaprobe-cli) and passed to [`CommandFfprobeExecutor::from_config`].
///
/// All fields have defaults, so an empty configuration resolves ffprobe on
/// PATH.
///
/// [`CommandFfprobeExecutor::from_config`]: crate::external::CommandFfprobeExecutor::from_config
#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    /// Optional explicit path to the ffprobe binary.
    /// When unset, [`FFPROBE_BIN`] is resolved on PATH.
    pub ffprobe_path: Option<PathBuf>,
}

impl CoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit ffprobe binary path.
    pub fn with_ffprobe_path(mut self, path: PathBuf) -> Self {
        self.ffprobe_path = Some(path);
        self
    }

    /// Validates the configuration.
    ///
    /// An explicitly configured ffprobe path must point at an existing file;
    /// the default PATH lookup is checked lazily at execution time instead.
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(path) = &self.ffprobe_path {
            if !path.is_file() {
                return Err(CoreError::PathError(format!(
                    "Configured ffprobe binary does not exist: '{}'",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
