//! Lane detector orchestrating the per-frame pipeline.
//!
//! Overview
//! - Splits the frame's raw segments into right/left buckets by slope sign,
//!   slope magnitude and end column ([`crate::classify`]).
//! - Fits one total-least-squares line per non-empty bucket and carries the
//!   previous line over for empty ones ([`crate::fit`]).
//! - Projects both lines onto the bottom row and the horizon row, then
//!   intersects them to decide the turn direction ([`crate::turn`]).
//!
//! Modules
//! - [`params`] – configuration shared by the three stages.
//! - `pipeline` – the [`LaneDetector`] implementation.
//! - `stats` – per-instance stage timing counters.
//!
//! Each detector owns its boundary state, so independent streams need
//! independent detectors. Frames of one stream must be processed in order.

pub mod params;
mod pipeline;
mod stats;

pub use params::LaneParams;
pub use pipeline::{FrameOutcome, LaneDetector, LaneFrame};
pub use stats::{StageAverages, StageStats};
