//! Stream driver: runs a [`LaneDetector`] over recorded streams and decides
//! what to do with frames the core rejects.
//!
//! Each stream gets its own detector, so streams are independent and are
//! processed in parallel with rayon. Frames of one stream are processed in
//! order.

use crate::detector::{FrameOutcome, LaneDetector, LaneParams};
use crate::error::LaneError;
use crate::diagnostics::{FrameReport, FrameStatus, StreamReport, StreamSummary};
use crate::io::SegmentStream;
use crate::types::{LaneGeometry, TurnLabel};
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Driver reaction to a core error on one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameErrorPolicy {
    /// Drop the frame and keep going.
    #[default]
    Skip,
    /// Re-emit the last good geometry and label, if any; otherwise skip.
    ReuseLast,
    /// Stop processing the stream.
    Abort,
}

#[derive(Clone, Debug, Default)]
pub struct StreamRunner {
    params: LaneParams,
    policy: FrameErrorPolicy,
}

impl StreamRunner {
    pub fn new(params: LaneParams, policy: FrameErrorPolicy) -> Self {
        Self { params, policy }
    }

    /// Process every frame of `stream` with a fresh detector.
    pub fn run(&self, stream: &SegmentStream) -> StreamReport {
        let frame = stream.frame_context();
        let mut detector = LaneDetector::new(self.params);
        let mut summary = StreamSummary::default();
        let mut reports = Vec::with_capacity(stream.frames.len());
        let mut last_good: Option<(LaneGeometry, TurnLabel, f64)> = None;

        for (index, recorded) in stream.frames.iter().enumerate() {
            let segments = &recorded.segments;
            let report = match detector.process_frame(segments, &frame) {
                Ok(FrameOutcome::NoSegments) => {
                    FrameReport::empty(index, FrameStatus::NoSegments, 0)
                }
                Ok(FrameOutcome::Lane(lane)) => {
                    last_good = Some((lane.geometry, lane.turn.label, lane.turn.vanish_x));
                    FrameReport {
                        index,
                        status: FrameStatus::Processed,
                        segments: segments.len(),
                        right_segments: lane.right_segments,
                        left_segments: lane.left_segments,
                        geometry: Some(lane.geometry),
                        turn: Some(lane.turn.label),
                        vanish_x: Some(lane.turn.vanish_x),
                        error: None,
                        timings: Some(lane.timings),
                    }
                }
                Err(err) => {
                    summary.record_error(err.kind());
                    self.recover(&stream.name, index, segments.len(), &err, last_good)
                }
            };
            summary.record(&report);
            let stop = report.status == FrameStatus::Aborted;
            reports.push(report);
            if stop {
                break;
            }
        }

        summary.stages = detector.stats();
        debug!(
            "{}: frames={} processed={} skipped={} reused={} aborted={}",
            stream.name,
            summary.frames,
            summary.processed,
            summary.skipped,
            summary.reused,
            summary.aborted
        );
        StreamReport {
            name: stream.name.clone(),
            width: stream.width,
            height: stream.height,
            summary,
            frames: reports,
        }
    }

    fn recover(
        &self,
        name: &str,
        index: usize,
        segments: usize,
        err: &LaneError,
        last_good: Option<(LaneGeometry, TurnLabel, f64)>,
    ) -> FrameReport {
        let mut report = match (self.policy, last_good) {
            (FrameErrorPolicy::ReuseLast, Some((geometry, turn, vanish_x))) => {
                warn!("{name}: frame {index}: {err}; reusing last lane");
                let mut r = FrameReport::empty(index, FrameStatus::Reused, segments);
                r.geometry = Some(geometry);
                r.turn = Some(turn);
                r.vanish_x = Some(vanish_x);
                r
            }
            (FrameErrorPolicy::Abort, _) => {
                warn!("{name}: frame {index}: {err}; aborting stream");
                FrameReport::empty(index, FrameStatus::Aborted, segments)
            }
            _ => {
                debug!("{name}: frame {index}: {err}; skipping");
                FrameReport::empty(index, FrameStatus::Skipped, segments)
            }
        };
        report.error = Some(err.to_string());
        report
    }

    /// Process independent streams in parallel; output order follows input order.
    pub fn run_all(&self, streams: &[SegmentStream]) -> Vec<StreamReport> {
        streams.par_iter().map(|stream| self.run(stream)).collect()
    }
}
