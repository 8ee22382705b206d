#![doc = include_str!("../README.md")]

// Core stages
pub mod classify;
pub mod detector;
pub mod fit;
pub mod turn;

pub mod diagnostics;
pub mod error;
pub mod types;

// Stream tooling used by the binaries.
pub mod config;
pub mod io;
pub mod runner;

// --- High-level re-exports -------------------------------------------------

// Main entry point and its per-frame results.
pub use crate::detector::{FrameOutcome, LaneDetector, LaneFrame, LaneParams};
pub use crate::error::LaneError;
pub use crate::types::{
    FrameContext, LaneGeometry, LaneSide, LineEquation, Segment, TurnLabel,
};

// Stage components for callers that drive the stages themselves.
pub use crate::classify::{Buckets, ClassifierOptions, SegmentClassifier};
pub use crate::fit::{BoundaryFitter, FitterOptions};
pub use crate::turn::{predict_turn, TurnOptions, TurnPrediction, TurnPredictor};

pub use crate::runner::{FrameErrorPolicy, StreamRunner};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use lane_detector::prelude::*;
///
/// let frame = FrameContext::new(1280, 720);
/// let mut det = LaneDetector::new(LaneParams::default());
/// let segments = [
///     Segment::new(760, 520, 1000, 700),
///     Segment::new(520, 520, 280, 700),
/// ];
/// match det.process_frame(&segments, &frame) {
///     Ok(FrameOutcome::Lane(lane)) => assert_eq!(lane.turn.label, TurnLabel::Straight),
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
pub mod prelude {
    pub use crate::{
        FrameContext, FrameOutcome, LaneDetector, LaneError, LaneGeometry, LaneParams, Segment,
        TurnLabel,
    };
}
