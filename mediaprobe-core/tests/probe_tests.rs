// mediaprobe-core/tests/probe_tests.rs

mod common;

use common::{MockFfprobeExecutor, MockOutcome, sample_probe_map};
use mediaprobe_core::Probe;
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_probe_nonexistent_path_is_empty() {
    let mock = MockFfprobeExecutor::new();
    let mut probe = Probe::with_executor(mock.clone());

    probe.file(PathBuf::from("surely/this/does/not/exist.mkv"));

    assert!(probe.info().is_empty());
    // The executor must never run for a missing file
    assert!(mock.received_calls().is_empty());
}

#[test]
fn test_probe_non_media_mime_type_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, "plain text")?;

    let mock = MockFfprobeExecutor::new();
    let mut probe = Probe::with_executor(mock.clone());
    probe.file(&file);

    assert!(probe.info().is_empty());
    assert!(mock.received_calls().is_empty());

    dir.close()?;
    Ok(())
}

#[test]
fn test_probe_unknown_mime_type_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("no_extension");
    std::fs::write(&file, "content")?;

    let mock = MockFfprobeExecutor::new();
    let mut probe = Probe::with_executor(mock.clone());
    probe.file(&file);

    assert!(probe.info().is_empty());
    assert!(mock.received_calls().is_empty());

    dir.close()?;
    Ok(())
}

#[test]
fn test_probe_media_file_reflects_tool_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("clip.mp4");
    std::fs::write(&file, "dummy content")?;

    let mock = MockFfprobeExecutor::new();
    mock.expect_probe(&file, MockOutcome::Success(sample_probe_map()));

    let mut probe = Probe::with_executor(mock.clone());
    probe.file(&file);

    assert!(!probe.info().is_empty());
    assert_eq!(probe.info(), &sample_probe_map());
    assert_eq!(mock.received_calls(), vec![file]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_probe_unprobeable_file_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("broken.mkv");
    std::fs::write(&file, "not really a video")?;

    let mock = MockFfprobeExecutor::new();
    mock.expect_probe(&file, MockOutcome::Unprobeable);

    let mut probe = Probe::with_executor(mock.clone());
    probe.file(&file);

    assert!(probe.info().is_empty());
    // The tool did run, it just rejected the file
    assert_eq!(mock.received_calls(), vec![file]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_probe_spawn_failure_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("song.mp3");
    std::fs::write(&file, "dummy content")?;

    let mock = MockFfprobeExecutor::new();
    mock.expect_probe(&file, MockOutcome::SpawnFailure);

    let mut probe = Probe::with_executor(mock.clone());
    probe.file(&file);

    assert!(probe.info().is_empty());

    dir.close()?;
    Ok(())
}

#[test]
fn test_probe_resets_previous_result() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("clip.mp4");
    std::fs::write(&file, "dummy content")?;

    let mock = MockFfprobeExecutor::new();
    mock.expect_probe(&file, MockOutcome::Success(sample_probe_map()));

    let mut probe = Probe::with_executor(mock);
    probe.file(&file);
    assert!(!probe.info().is_empty());

    // A failed probe must clear the previous result
    probe.file(PathBuf::from("surely/this/does/not/exist.mkv"));
    assert!(probe.info().is_empty());

    dir.close()?;
    Ok(())
}

#[test]
fn test_accessors() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("clip.mp4");
    std::fs::write(&file, "dummy content")?;

    let mock = MockFfprobeExecutor::new();
    mock.expect_probe(&file, MockOutcome::Success(sample_probe_map()));

    let mut probe = Probe::with_executor(mock);
    probe.file(&file);

    // Present key
    let streams = probe.get("streams").unwrap();
    assert_eq!(streams.as_array().map(Vec::len), Some(2));

    // Missing key falls back to the supplied default
    let default = json!("fallback");
    assert_eq!(probe.get_or("missing_key", &default), &default);
    assert!(probe.get("missing_key").is_none());

    // Present key ignores the default
    let format = probe.get_or("format", &default);
    assert_ne!(format, &default);
    assert_eq!(
        format.get("format_name").and_then(Value::as_str),
        Some("mov,mp4,m4a,3gp,3g2,mj2")
    );

    dir.close()?;
    Ok(())
}
