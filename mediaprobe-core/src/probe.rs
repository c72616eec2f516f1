//! Probe result handling.
//!
//! [`Probe`] holds the metadata mapping for the most recently probed file.
//! Probing never fails from the caller's point of view: a path that does
//! not exist, is not an audio/video/image file, or cannot be handled by
//! ffprobe simply leaves the mapping empty. Each failure path logs a debug
//! line naming the reason.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::external::{CommandFfprobeExecutor, FfprobeExecutor};
use crate::mime::{self, MediaCategory};

/// Holder for the probe result of a single media file.
///
/// The result mapping is reset at the start of every [`Probe::file`] call,
/// populated wholesale from the tool output on success, and left empty on
/// any rejection or failure. Callers infer failure from an empty mapping.
///
/// A `Probe` instance is not meant to be shared across threads; create one
/// per thread instead.
pub struct Probe<E = CommandFfprobeExecutor> {
    executor: E,
    info: Map<String, Value>,
}

impl Probe<CommandFfprobeExecutor> {
    /// Creates a probe backed by the ffprobe binary resolved on PATH.
    pub fn new() -> Self {
        Self::with_executor(CommandFfprobeExecutor::new())
    }
}

impl Default for Probe<CommandFfprobeExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: FfprobeExecutor> Probe<E> {
    /// Creates a probe backed by the given executor.
    pub fn with_executor(executor: E) -> Self {
        Self {
            executor,
            info: Map::new(),
        }
    }

    /// Probes the given file path, replacing the stored result mapping.
    ///
    /// Files that cannot be probed leave the mapping empty:
    /// - the path does not exist,
    /// - no MIME type can be determined from the path,
    /// - the MIME category is not audio, video or image,
    /// - ffprobe reports the file unprobeable or fails in any other way.
    pub fn file<P: AsRef<Path>>(&mut self, file_path: P) {
        let file_path = file_path.as_ref();
        self.info = Map::new();

        // Ensure the file exists
        if !file_path.exists() {
            log::debug!("File does not exist - '{}'", file_path.display());
            return;
        }

        // Only probe audio/video/image MIME types
        let Some(file_type) = mime::guess_mime_type(file_path) else {
            log::debug!(
                "Unable to determine file MIME type - '{}'",
                file_path.display()
            );
            return;
        };
        if MediaCategory::from_mime(&file_type).is_none() {
            log::debug!(
                "File MIME type '{}' is not audio, video or image - '{}'",
                file_type,
                file_path.display()
            );
            return;
        }

        match self.executor.probe(file_path) {
            Ok(info) => self.info = info,
            Err(CoreError::CommandFailed(..)) => {
                // Non-zero exit means ffprobe could not handle the file.
                log::debug!(
                    "File unable to be probed by ffprobe - '{}'",
                    file_path.display()
                );
            }
            Err(err) => {
                log::debug!("Failed to probe file '{}': {}", file_path.display(), err);
            }
        }
    }

    /// Returns the result mapping of the last probed file.
    pub fn info(&self) -> &Map<String, Value> {
        &self.info
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.info.get(key)
    }

    /// Returns the value stored under `key`, or the supplied default when
    /// the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.info.get(key).unwrap_or(default)
    }
}
