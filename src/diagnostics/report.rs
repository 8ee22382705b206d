use super::timing::TimingBreakdown;
use crate::detector::StageAverages;
use crate::types::{LaneGeometry, TurnLabel};
use serde::Serialize;
use std::collections::BTreeMap;

/// How a frame was resolved by the stream runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameStatus {
    /// Geometry and turn label come from this frame.
    Processed,
    /// Upstream delivered no segments; nothing was fit or predicted.
    NoSegments,
    /// The core failed and the frame was dropped.
    Skipped,
    /// The core failed and the last good geometry and label were re-emitted.
    Reused,
    /// The core failed and the stream was stopped here.
    Aborted,
}

/// Per-frame record written to the JSON report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub index: usize,
    pub status: FrameStatus,
    pub segments: usize,
    pub right_segments: usize,
    pub left_segments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<LaneGeometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn: Option<TurnLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vanish_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timings: Option<TimingBreakdown>,
}

impl FrameReport {
    pub fn empty(index: usize, status: FrameStatus, segments: usize) -> Self {
        Self {
            index,
            status,
            segments,
            right_segments: 0,
            left_segments: 0,
            geometry: None,
            turn: None,
            vanish_x: None,
            error: None,
            timings: None,
        }
    }
}

/// Aggregate counters over one stream.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSummary {
    pub frames: usize,
    pub processed: usize,
    pub no_segments: usize,
    pub skipped: usize,
    pub reused: usize,
    pub aborted: bool,
    /// Core errors keyed by [`LaneError::kind`](crate::LaneError::kind).
    pub errors: BTreeMap<String, usize>,
    /// Emitted turn labels (processed and reused frames).
    pub turns: BTreeMap<String, usize>,
    pub stages: StageAverages,
}

impl StreamSummary {
    pub fn record(&mut self, frame: &FrameReport) {
        self.frames += 1;
        match frame.status {
            FrameStatus::Processed => self.processed += 1,
            FrameStatus::NoSegments => self.no_segments += 1,
            FrameStatus::Skipped => self.skipped += 1,
            FrameStatus::Reused => self.reused += 1,
            FrameStatus::Aborted => self.aborted = true,
        }
        if let Some(turn) = frame.turn {
            *self.turns.entry(turn.as_str().to_string()).or_default() += 1;
        }
    }

    pub fn record_error(&mut self, kind: &str) {
        *self.errors.entry(kind.to_string()).or_default() += 1;
    }
}

/// Everything the runner produced for one stream.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamReport {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub summary: StreamSummary,
    pub frames: Vec<FrameReport>,
}
