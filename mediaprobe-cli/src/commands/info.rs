//! Implementation of the `info` command.

use log::info;
use mediaprobe_core::error::CoreError;
use mediaprobe_core::{CommandFfprobeExecutor, CoreConfig, CoreResult};

/// Reports ffprobe availability and version information.
pub fn run_info(config: &CoreConfig) -> CoreResult<()> {
    info!("Checking ffprobe availability");
    let executor = CommandFfprobeExecutor::from_config(config);

    match executor.version() {
        Ok(version) => {
            println!("ffprobe: {}", version);
            println!("Status:  available");
            Ok(())
        }
        Err(CoreError::DependencyNotFound(name)) => {
            println!("Status:  '{}' not found", name);
            Err(CoreError::DependencyNotFound(name))
        }
        Err(e) => Err(e),
    }
}
