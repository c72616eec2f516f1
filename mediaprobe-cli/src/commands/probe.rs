//! Implementation of the `probe` command.

use std::path::Path;

use mediaprobe_core::error::CoreError;
use mediaprobe_core::{CommandFfprobeExecutor, CoreConfig, CoreResult, MediaInfo, Probe};
use serde_json::{Map, Value};

use crate::cli::ProbeArgs;

/// Probes a single file and prints the result mapping.
///
/// An unprobeable file prints an empty JSON object; the command still
/// succeeds.
pub fn run_probe(config: &CoreConfig, args: ProbeArgs) -> CoreResult<()> {
    let executor = CommandFfprobeExecutor::from_config(config);
    let mut probe = Probe::with_executor(executor);
    probe.file(&args.file);

    if args.summary {
        print_summary(&args.file, probe.info());
        return Ok(());
    }

    let value = Value::Object(probe.info().clone());
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .map_err(|e| CoreError::OperationFailed(format!("Failed to render probe output: {}", e)))?;

    println!("{}", rendered);
    Ok(())
}

fn print_summary(path: &Path, info_map: &Map<String, Value>) {
    if info_map.is_empty() {
        println!("{}: not a probeable media file", path.display());
        return;
    }

    let info = MediaInfo::from_probe(info_map);

    println!("{}", path.display());
    if let Some(format) = &info.format {
        println!("  Container: {}", format.format_name);
        if let Some(duration) = format.duration {
            println!("  Duration:  {:.2}s", duration);
        }
        if let Some(size) = format.size {
            println!("  Size:      {} bytes", size);
        }
    }
    if let Some((width, height)) = info.video_dimensions() {
        println!("  Video:     {}x{}", width, height);
    }
    for stream in &info.streams {
        println!(
            "  Stream #{}: {} ({})",
            stream.index, stream.codec_type, stream.codec_name
        );
    }
    if !info.chapters.is_empty() {
        println!("  Chapters:  {}", info.chapters.len());
    }
}
