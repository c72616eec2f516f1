//! Implementation of the `scan` command.

use std::path::Path;

use mediaprobe_core::config::FFPROBE_BIN;
use mediaprobe_core::error::CoreError;
use mediaprobe_core::{
    CommandFfprobeExecutor, CoreConfig, CoreResult, MediaInfo, Probe, check_dependency,
    find_probeable_files, media_category,
};
use serde_json::{Map, Value};

use crate::cli::ScanArgs;

/// Scans a directory and probes every discovered media file, printing one
/// line per file.
pub fn run_scan(config: &CoreConfig, args: ScanArgs) -> CoreResult<()> {
    let mut files = match find_probeable_files(&args.dir) {
        Ok(files) => files,
        Err(CoreError::NoFilesFound) => {
            println!(
                "No probeable media files found in '{}'.",
                args.dir.display()
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    files.sort();

    // Fail fast when ffprobe is missing entirely
    if config.ffprobe_path.is_none() {
        check_dependency(FFPROBE_BIN)?;
    }

    println!(
        "Found {} probeable file(s) in '{}'.",
        files.len(),
        args.dir.display()
    );

    let executor = CommandFfprobeExecutor::from_config(config);
    let mut probe = Probe::with_executor(executor);
    for file in files {
        probe.file(&file);
        println!("{}", describe(&file, probe.info()));
    }

    Ok(())
}

fn describe(file: &Path, info_map: &Map<String, Value>) -> String {
    let category = media_category(file)
        .map(|c| c.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if info_map.is_empty() {
        return format!("{}  [{}]  unprobeable", file.display(), category);
    }

    let info = MediaInfo::from_probe(info_map);
    let container = info
        .format
        .as_ref()
        .map(|f| f.format_name.clone())
        .unwrap_or_else(|| "unknown".to_string());

    match info.duration() {
        Some(duration) => format!(
            "{}  [{}]  {}  {:.2}s",
            file.display(),
            category,
            container,
            duration
        ),
        None => format!("{}  [{}]  {}", file.display(), category, container),
    }
}
