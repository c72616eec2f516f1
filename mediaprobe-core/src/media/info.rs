//! Typed media information extracted from a probe result.
//!
//! A probe result is an opaque JSON mapping reported by ffprobe. These
//! types lift the commonly consumed parts (streams, format, chapters) into
//! a structured form while leaving unrecognized stream properties available
//! as raw values.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Media stream types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamType {
    Video,
    Audio,
    Subtitle,
    Attachment,
    Data,
    Unknown,
}

impl From<&str> for StreamType {
    fn from(s: &str) -> Self {
        match s {
            "video" => StreamType::Video,
            "audio" => StreamType::Audio,
            "subtitle" => StreamType::Subtitle,
            "attachment" => StreamType::Attachment,
            "data" => StreamType::Data,
            _ => StreamType::Unknown,
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamType::Video => write!(f, "video"),
            StreamType::Audio => write!(f, "audio"),
            StreamType::Subtitle => write!(f, "subtitle"),
            StreamType::Attachment => write!(f, "attachment"),
            StreamType::Data => write!(f, "data"),
            StreamType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Stream information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamInfo {
    /// Stream index
    pub index: usize,

    /// Stream type
    pub codec_type: StreamType,

    /// Codec name
    pub codec_name: String,

    /// Codec long name
    pub codec_long_name: Option<String>,

    /// Stream tags
    pub tags: HashMap<String, String>,

    /// Remaining stream properties, as reported by the tool
    pub properties: HashMap<String, Value>,
}

/// Media format information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub format_name: String,

    /// Format long name
    pub format_long_name: Option<String>,

    /// Duration in seconds
    pub duration: Option<f64>,

    /// Bitrate in bits per second
    pub bit_rate: Option<u64>,

    /// Size in bytes
    pub size: Option<u64>,

    /// Format tags
    pub tags: HashMap<String, String>,
}

/// Chapter information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterInfo {
    /// Chapter ID
    pub id: u64,

    /// Start time in seconds
    pub start_time: f64,

    /// End time in seconds
    pub end_time: f64,

    /// Chapter tags
    pub tags: HashMap<String, String>,
}

/// Complete media information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Media streams
    pub streams: Vec<StreamInfo>,

    /// Media format
    pub format: Option<FormatInfo>,

    /// Media chapters
    pub chapters: Vec<ChapterInfo>,
}

impl MediaInfo {
    /// Builds a typed view from a probe result mapping.
    ///
    /// An empty mapping (a failed probe) yields a `MediaInfo` with no
    /// streams, no format and no chapters.
    pub fn from_probe(info: &Map<String, Value>) -> Self {
        let streams = info
            .get("streams")
            .and_then(Value::as_array)
            .map(|streams| streams.iter().filter_map(parse_stream).collect())
            .unwrap_or_default();

        let format = info
            .get("format")
            .and_then(Value::as_object)
            .map(parse_format);

        let chapters = info
            .get("chapters")
            .and_then(Value::as_array)
            .map(|chapters| chapters.iter().filter_map(parse_chapter).collect())
            .unwrap_or_default();

        Self {
            streams,
            format,
            chapters,
        }
    }

    /// Get video streams
    pub fn video_streams(&self) -> Vec<&StreamInfo> {
        self.streams_of_type(StreamType::Video)
    }

    /// Get audio streams
    pub fn audio_streams(&self) -> Vec<&StreamInfo> {
        self.streams_of_type(StreamType::Audio)
    }

    /// Get subtitle streams
    pub fn subtitle_streams(&self) -> Vec<&StreamInfo> {
        self.streams_of_type(StreamType::Subtitle)
    }

    fn streams_of_type(&self, stream_type: StreamType) -> Vec<&StreamInfo> {
        self.streams
            .iter()
            .filter(|s| s.codec_type == stream_type)
            .collect()
    }

    /// Get total duration in seconds
    pub fn duration(&self) -> Option<f64> {
        self.format.as_ref().and_then(|f| f.duration)
    }

    /// Get primary video stream
    pub fn primary_video_stream(&self) -> Option<&StreamInfo> {
        self.video_streams().first().copied()
    }

    /// Get video width and height if available
    pub fn video_dimensions(&self) -> Option<(u32, u32)> {
        self.primary_video_stream().and_then(|stream| {
            let width = stream
                .properties
                .get("width")
                .and_then(Value::as_u64)
                .map(|w| w as u32)?;
            let height = stream
                .properties
                .get("height")
                .and_then(Value::as_u64)
                .map(|h| h as u32)?;
            Some((width, height))
        })
    }
}

fn parse_stream(stream: &Value) -> Option<StreamInfo> {
    let obj = stream.as_object()?;

    let index = obj.get("index").and_then(Value::as_u64).unwrap_or(0) as usize;

    let codec_type = obj
        .get("codec_type")
        .and_then(Value::as_str)
        .map(StreamType::from)
        .unwrap_or(StreamType::Unknown);

    let codec_name = obj
        .get("codec_name")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let codec_long_name = obj
        .get("codec_long_name")
        .and_then(Value::as_str)
        .map(str::to_string);

    // Everything the tool reported beyond the fields above stays available
    // as raw properties.
    let extracted = ["index", "codec_type", "codec_name", "codec_long_name", "tags"];
    let properties = obj
        .iter()
        .filter(|(key, _)| !extracted.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Some(StreamInfo {
        index,
        codec_type,
        codec_name,
        codec_long_name,
        tags: parse_tags(obj),
        properties,
    })
}

fn parse_format(format: &Map<String, Value>) -> FormatInfo {
    FormatInfo {
        format_name: format
            .get("format_name")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        format_long_name: format
            .get("format_long_name")
            .and_then(Value::as_str)
            .map(str::to_string),
        duration: parse_numeric_string(format.get("duration")),
        bit_rate: parse_integer_string(format.get("bit_rate")),
        size: parse_integer_string(format.get("size")),
        tags: parse_tags(format),
    }
}

fn parse_chapter(chapter: &Value) -> Option<ChapterInfo> {
    let obj = chapter.as_object()?;

    Some(ChapterInfo {
        id: obj.get("id").and_then(Value::as_u64).unwrap_or(0),
        start_time: parse_numeric_string(obj.get("start_time")).unwrap_or(0.0),
        end_time: parse_numeric_string(obj.get("end_time")).unwrap_or(0.0),
        tags: parse_tags(obj),
    })
}

fn parse_tags(obj: &Map<String, Value>) -> HashMap<String, String> {
    obj.get("tags")
        .and_then(Value::as_object)
        .map(|tags| {
            tags.iter()
                .filter_map(|(key, value)| {
                    value.as_str().map(|v| (key.clone(), v.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}

// ffprobe reports durations, sizes and bitrates as JSON strings.
fn parse_numeric_string(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_str).and_then(|v| v.parse().ok())
}

fn parse_integer_string(value: Option<&Value>) -> Option<u64> {
    value.and_then(Value::as_str).and_then(|v| v.parse().ok())
}
