//! FFprobe execution for media metadata extraction.
//!
//! Shells out to `ffprobe -v quiet -print_format json -show_format
//! -show_streams -show_chapters` and returns the parsed JSON object
//! untouched, so callers see exactly what the tool reported.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::{Map, Value};

use crate::config::{CoreConfig, FFPROBE_BIN};
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};

/// Trait for executing ffprobe against a media file.
///
/// The default implementation is [`CommandFfprobeExecutor`]; tests provide
/// their own implementations to avoid depending on an installed ffprobe.
pub trait FfprobeExecutor {
    /// Probes the given file and returns the tool's JSON output as a mapping.
    fn probe(&self, input_path: &Path) -> CoreResult<Map<String, Value>>;
}

/// Default executor that runs the ffprobe binary via `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct CommandFfprobeExecutor {
    ffprobe_path: Option<PathBuf>,
}

impl CommandFfprobeExecutor {
    /// Creates an executor that resolves ffprobe on PATH.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an executor honoring the configured ffprobe location.
    pub fn from_config(config: &CoreConfig) -> Self {
        Self {
            ffprobe_path: config.ffprobe_path.clone(),
        }
    }

    fn binary(&self) -> &Path {
        self.ffprobe_path
            .as_deref()
            .unwrap_or_else(|| Path::new(FFPROBE_BIN))
    }

    /// Returns the first line of `ffprobe -version` output.
    pub fn version(&self) -> CoreResult<String> {
        let mut cmd = Command::new(self.binary());
        cmd.arg("-version");
        log_command(&cmd);

        let output = cmd.output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CoreError::DependencyNotFound(self.binary().display().to_string())
            } else {
                command_start_error("ffprobe", e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(command_failed_error("ffprobe", output.status, stderr));
        }

        let version_str = String::from_utf8_lossy(&output.stdout);
        Ok(version_str.lines().next().unwrap_or_default().to_string())
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn probe(&self, input_path: &Path) -> CoreResult<Map<String, Value>> {
        let mut cmd = Command::new(self.binary());
        cmd.args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
            "-show_chapters",
        ]);
        cmd.arg(input_path);
        log_command(&cmd);

        let output = cmd
            .output()
            .map_err(|e| command_start_error("ffprobe", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(command_failed_error("ffprobe", output.status, stderr));
        }

        match serde_json::from_slice::<Value>(&output.stdout) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(CoreError::JsonParse(format!(
                "ffprobe output for '{}' was not a JSON object: {}",
                input_path.display(),
                other
            ))),
            Err(err) => Err(CoreError::JsonParse(format!(
                "ffprobe output for '{}': {}",
                input_path.display(),
                err
            ))),
        }
    }
}

/// Log a command being executed
fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();
    log::debug!("Executing command: {} {}", program, args.join(" "));
}
