//! I/O helpers for recorded segment streams and JSON reports.
//!
//! - `load_segment_stream`: read a recorded stream of per-frame segments.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! A recorded stream looks like:
//!
//! ```json
//! {
//!   "width": 1280,
//!   "height": 720,
//!   "frames": [
//!     { "segments": [[700, 600, 900, 700], [300, 600, 100, 700]] },
//!     { "segments": [] }
//!   ]
//! }
//! ```
use crate::types::{FrameContext, Segment};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Segments detected in one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// Frame geometry plus the per-frame segment lists of one video.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStream {
    /// Display name; defaults to the file stem when loaded from disk.
    #[serde(default)]
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Optional override of the horizontal center (defaults to `width / 2`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_x: Option<f64>,
    #[serde(default)]
    pub frames: Vec<RecordedFrame>,
}

impl SegmentStream {
    pub fn frame_context(&self) -> FrameContext {
        let ctx = FrameContext::new(self.width, self.height);
        match self.center_x {
            Some(cx) => ctx.with_center(cx),
            None => ctx,
        }
    }
}

/// Load a recorded segment stream from a JSON file.
pub fn load_segment_stream(path: &Path) -> Result<SegmentStream, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read stream {}: {e}", path.display()))?;
    let mut stream = parse_segment_stream(&data)
        .map_err(|e| format!("Failed to parse stream {}: {e}", path.display()))?;
    if stream.name.is_empty() {
        stream.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
    }
    Ok(stream)
}

/// Parse a recorded segment stream from JSON text.
pub fn parse_segment_stream(data: &str) -> Result<SegmentStream, String> {
    let stream: SegmentStream = serde_json::from_str(data).map_err(|e| e.to_string())?;
    if stream.width == 0 || stream.height == 0 {
        return Err(format!(
            "frame size must be positive, got {}x{}",
            stream.width, stream.height
        ));
    }
    Ok(stream)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recorded_stream() {
        let json = r#"{
            "width": 1280,
            "height": 720,
            "frames": [
                { "segments": [[700, 600, 900, 700], [300, 600, 100, 700]] },
                { "segments": [] },
                {}
            ]
        }"#;
        let stream = parse_segment_stream(json).unwrap();
        assert_eq!(stream.frames.len(), 3);
        assert_eq!(stream.frames[0].segments[0], Segment::new(700, 600, 900, 700));
        assert!(stream.frames[2].segments.is_empty());
        assert_eq!(stream.frame_context().center_x, 640.0);
    }

    #[test]
    fn center_override_is_applied() {
        let json = r#"{ "width": 1280, "height": 720, "centerX": 600.0 }"#;
        let stream = parse_segment_stream(json).unwrap();
        assert_eq!(stream.frame_context().center_x, 600.0);
    }

    #[test]
    fn zero_sized_frame_is_rejected() {
        let err = parse_segment_stream(r#"{ "width": 0, "height": 720 }"#).unwrap_err();
        assert!(err.contains("frame size"), "{err}");
    }

    #[test]
    fn malformed_segment_is_rejected() {
        let json = r#"{ "width": 1, "height": 1, "frames": [{ "segments": [[1, 2, 3]] }] }"#;
        assert!(parse_segment_stream(json).is_err());
    }
}
