//! Core library for probing media files with ffprobe.
//!
//! This crate decides whether a filesystem path refers to a probeable media
//! file (audio, video or image by MIME type) and, if so, delegates to an
//! external ffprobe binary to extract container and stream metadata. The
//! raw tool output is held as a JSON mapping; failures of any kind collapse
//! to an empty mapping plus a debug log line.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediaprobe_core::Probe;
//! use std::path::Path;
//!
//! let mut probe = Probe::new();
//! probe.file(Path::new("/path/to/movie.mkv"));
//!
//! if probe.info().is_empty() {
//!     println!("not a probeable media file");
//! } else {
//!     println!("format: {:?}", probe.get("format"));
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod media;
pub mod mime;
pub mod probe;

// Re-exports for public API
pub use config::CoreConfig;
pub use discovery::find_probeable_files;
pub use error::{CoreError, CoreResult};
pub use external::{CommandFfprobeExecutor, FfprobeExecutor, check_dependency};
pub use media::{FormatInfo, MediaInfo, StreamInfo, StreamType};
pub use mime::{MediaCategory, guess_mime_type, media_category};
pub use probe::Probe;
