//! MIME type detection for pre-filtering probe candidates.
//!
//! Probing is only worth attempting for audio, video and image files. The
//! lookup is extension-based; a file with an unknown or missing extension
//! has no MIME type and is never probed.

use std::fmt;
use std::path::Path;

use mime_guess::Mime;

/// Top-level MIME categories that are worth probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    Audio,
    Video,
    Image,
}

impl MediaCategory {
    /// Maps a MIME type to a probeable category, if it has one.
    pub fn from_mime(mime: &Mime) -> Option<Self> {
        match mime.type_().as_str() {
            "audio" => Some(MediaCategory::Audio),
            "video" => Some(MediaCategory::Video),
            "image" => Some(MediaCategory::Image),
            _ => None,
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaCategory::Audio => write!(f, "audio"),
            MediaCategory::Video => write!(f, "video"),
            MediaCategory::Image => write!(f, "image"),
        }
    }
}

/// Guesses the MIME type of a path from its extension.
///
/// Returns `None` when the extension is unknown or absent.
pub fn guess_mime_type<P: AsRef<Path>>(path: P) -> Option<Mime> {
    mime_guess::from_path(path).first()
}

/// Guesses the MIME type of a path and filters it to a probeable category.
pub fn media_category<P: AsRef<Path>>(path: P) -> Option<MediaCategory> {
    guess_mime_type(path).as_ref().and_then(MediaCategory::from_mime)
}
