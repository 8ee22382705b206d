//! Per-stream lane pipeline.
//!
//! [`LaneDetector`] chains the classifier, the boundary fitter and the turn
//! predictor for one video stream. Feed it the segments of each frame in
//! order:
//!
//! ```no_run
//! use lane_detector::{FrameContext, FrameOutcome, LaneDetector, LaneParams, Segment};
//!
//! # fn example(frames: Vec<Vec<Segment>>) {
//! let frame = FrameContext::new(1280, 720);
//! let mut detector = LaneDetector::new(LaneParams::default());
//! for segments in &frames {
//!     match detector.process_frame(segments, &frame) {
//!         Ok(FrameOutcome::Lane(lane)) => println!("{}", lane.turn.label),
//!         Ok(FrameOutcome::NoSegments) => {}
//!         Err(err) => eprintln!("frame dropped: {err}"),
//!     }
//! }
//! # }
//! ```
use super::params::LaneParams;
use super::stats::{StageAverages, StageStats};
use crate::classify::SegmentClassifier;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{Stage, TimingBreakdown};
use crate::error::LaneError;
use crate::fit::{BoundaryFitter, SideUpdate};
use crate::turn::{TurnPrediction, TurnPredictor};
use crate::types::{FrameContext, LaneGeometry, LaneSide, LineEquation, Segment};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Result of a frame that ran through every stage.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneFrame {
    pub geometry: LaneGeometry,
    pub turn: TurnPrediction,
    pub right_segments: usize,
    pub left_segments: usize,
    pub right_update: SideUpdate,
    pub left_update: SideUpdate,
    pub timings: TimingBreakdown,
}

/// Non-error outcome of [`LaneDetector::process_frame`].
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    /// The frame carried no segments at all. No stage ran and the persisted
    /// boundaries are untouched.
    NoSegments,
    Lane(LaneFrame),
}

/// Lane detector owning the persisted boundaries and counters of one stream.
pub struct LaneDetector {
    params: LaneParams,
    classifier: SegmentClassifier,
    fitter: BoundaryFitter,
    predictor: TurnPredictor,
    stats: StageStats,
}

impl LaneDetector {
    pub fn new(params: LaneParams) -> Self {
        Self {
            params,
            classifier: SegmentClassifier::new(params.classifier),
            fitter: BoundaryFitter::new(params.fitter),
            predictor: TurnPredictor::new(params.turn),
            stats: StageStats::default(),
        }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Run classify -> fit -> predict on one frame.
    ///
    /// Errors leave the detector usable; boundaries fit before the failure
    /// stay persisted for the next frame.
    pub fn process_frame(
        &mut self,
        segments: &[Segment],
        frame: &FrameContext,
    ) -> Result<FrameOutcome, LaneError> {
        if segments.is_empty() {
            debug!("LaneDetector: frame without segments, skipping stages");
            return Ok(FrameOutcome::NoSegments);
        }
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let stage_start = Instant::now();
        let buckets = self.classifier.classify(segments, frame.center_x);
        timings.push(Stage::Classify, elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let fitted = self
            .fitter
            .fit_detailed(&buckets.right, &buckets.left, frame.height);
        timings.push(Stage::Fit, elapsed_ms(stage_start));
        let details = match fitted {
            Ok(details) => details,
            Err(err) => {
                self.finish(timings, total_start, false);
                return Err(err);
            }
        };

        let stage_start = Instant::now();
        let predicted = self
            .fitter
            .lines()
            .and_then(|(right, left)| self.predictor.predict(&right, &left, frame.center_x));
        timings.push(Stage::Predict, elapsed_ms(stage_start));
        let turn = match predicted {
            Ok(turn) => turn,
            Err(err) => {
                self.finish(timings, total_start, false);
                return Err(err);
            }
        };

        let timings = self.finish(timings, total_start, true);
        debug!(
            "LaneDetector: right={} ({:?}) left={} ({:?}) turn={} total_ms={:.3}",
            buckets.right.len(),
            details.right,
            buckets.left.len(),
            details.left,
            turn.label,
            timings.total_ms
        );
        Ok(FrameOutcome::Lane(LaneFrame {
            geometry: details.geometry,
            turn,
            right_segments: buckets.right.len(),
            left_segments: buckets.left.len(),
            right_update: details.right,
            left_update: details.left,
            timings,
        }))
    }

    fn finish(
        &mut self,
        mut timings: TimingBreakdown,
        total_start: Instant,
        succeeded: bool,
    ) -> TimingBreakdown {
        timings.total_ms = elapsed_ms(total_start);
        self.stats.record(&timings, succeeded);
        timings
    }

    /// Persisted boundary for `side`, for renderers that draw the raw lines.
    pub fn line(&self, side: LaneSide) -> Option<&LineEquation> {
        self.fitter.line(side)
    }

    /// Both persisted boundaries as `(right, left)`.
    pub fn lines(&self) -> Result<(LineEquation, LineEquation), LaneError> {
        self.fitter.lines()
    }

    /// Mean stage timings since construction or the last reset.
    pub fn stats(&self) -> StageAverages {
        self.stats.averages()
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Start a new stream: forget boundaries and clear counters.
    pub fn reset(&mut self) {
        self.fitter.reset();
        self.stats.reset();
    }
}
