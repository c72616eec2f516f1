// ============================================================================
// mediaprobe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffprobe CLI
//
// This module encapsulates interactions with the external ffprobe binary.
// It provides an abstraction through the FfprobeExecutor trait and a
// concrete implementation that shells out to ffprobe, making the external
// dependency testable and replaceable.
//
// KEY COMPONENTS:
// - FfprobeExecutor trait for external probing
// - CommandFfprobeExecutor, the default std::process::Command implementation
// - Dependency checking function
//
// AI-ASSISTANT-INFO: External tool interactions and abstractions for ffprobe

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult, command_start_error};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the trait and implementation for executing ffprobe commands
pub mod ffprobe;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe::{CommandFfprobeExecutor, FfprobeExecutor};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// This function attempts to run the specified command with a `-version`
/// argument to verify that it exists and is executable.
///
/// # Arguments
///
/// * `cmd_name` - The name of the command to check (e.g., "ffprobe")
///
/// # Returns
///
/// * `Ok(())` - If the command is found
/// * `Err(CoreError::DependencyNotFound)` - If the command is not found
/// * `Err(CoreError::CommandStart)` - If the command exists but fails to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                log::warn!("Dependency '{}' not found.", cmd_name);
                Err(CoreError::DependencyNotFound(cmd_name.to_string()))
            } else {
                log::error!(
                    "Failed to start dependency check command '{}': {}",
                    cmd_name,
                    e
                );
                Err(command_start_error(cmd_name, e))
            }
        }
    }
}
