// mediaprobe-core/tests/common/mod.rs

// --- Mocking Infrastructure (for testing) ---

// Shared between the integration test binaries; not every binary uses every
// helper.
#![allow(dead_code)]

use mediaprobe_core::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use mediaprobe_core::external::FfprobeExecutor;
use serde_json::{Map, Value, json};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::os::unix::process::ExitStatusExt; // For ExitStatus::from_raw
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

/// Canned outcome for a probed path.
pub enum MockOutcome {
    /// ffprobe succeeded with this output.
    Success(Map<String, Value>),
    /// ffprobe exited non-zero (file not handled by the tool).
    Unprobeable,
    /// ffprobe could not be spawned at all.
    SpawnFailure,
}

/// Mock implementation of FfprobeExecutor keyed by input path.
#[derive(Clone, Default)]
pub struct MockFfprobeExecutor {
    results: Rc<RefCell<HashMap<PathBuf, MockOutcome>>>,
    received_calls: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockFfprobeExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    /// Add an expected outcome for a specific input path.
    pub fn expect_probe(&self, input_path: &Path, outcome: MockOutcome) {
        self.results
            .borrow_mut()
            .insert(input_path.to_path_buf(), outcome);
    }

    pub fn received_calls(&self) -> Vec<PathBuf> {
        self.received_calls.borrow().clone()
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn probe(&self, input_path: &Path) -> CoreResult<Map<String, Value>> {
        self.received_calls
            .borrow_mut()
            .push(input_path.to_path_buf());

        match self.results.borrow().get(input_path) {
            Some(MockOutcome::Success(info)) => Ok(info.clone()),
            Some(MockOutcome::Unprobeable) => Err(command_failed_error(
                "ffprobe",
                ExitStatus::from_raw(256),
                format!("{}: Invalid data found when processing input", input_path.display()),
            )),
            Some(MockOutcome::SpawnFailure) => Err(command_start_error(
                "ffprobe",
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            )),
            None => Err(CoreError::OperationFailed(format!(
                "MockFfprobeExecutor: No expectation set for path {}",
                input_path.display()
            ))),
        }
    }
}

/// A representative ffprobe output mapping for a small mp4 clip.
pub fn sample_probe_map() -> Map<String, Value> {
    let value = json!({
        "streams": [
            {
                "index": 0,
                "codec_type": "video",
                "codec_name": "h264",
                "width": 1280,
                "height": 720
            },
            {
                "index": 1,
                "codec_type": "audio",
                "codec_name": "aac",
                "channels": 2
            }
        ],
        "format": {
            "format_name": "mov,mp4,m4a,3gp,3g2,mj2",
            "duration": "30.000000",
            "size": "1048576"
        },
        "chapters": []
    });
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}
