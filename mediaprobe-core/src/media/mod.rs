//! Typed views over probe results
//!
//! This module provides data structures for representing the media
//! information an ffprobe run reports, built from the raw probe mapping.

pub mod info;

// Re-export commonly used types
pub use info::{ChapterInfo, FormatInfo, MediaInfo, StreamInfo, StreamType};
