//! File discovery module for finding media files to probe.
//!
//! This module handles the discovery of files eligible for probing.
//! Searches the top level of the provided directory for files whose MIME
//! category is audio, video or image.

use crate::error::{CoreError, CoreResult};
use crate::mime;

use std::path::{Path, PathBuf};

/// Finds media files eligible for probing in the specified directory.
///
/// This function scans the top level of the provided directory for files
/// with an audio, video or image MIME type and returns their paths. It
/// does not search subdirectories.
///
/// # Arguments
///
/// * `input_dir` - The directory to search for media files
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - A vector of paths to the discovered media files
/// * `Err(CoreError::Io)` - If an error occurs reading the directory
/// * `Err(CoreError::NoFilesFound)` - If no media files are found
pub fn find_probeable_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            mime::media_category(&path).map(|_| path)
        })
        .collect();

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        Ok(files)
    }
}
