//! Serializable diagnostics produced by the detector and the stream runner.
//!
//! `timing` holds the per-frame stage breakdown returned with every processed
//! frame; `report` holds the per-frame and per-stream records the runner
//! writes out as JSON.

pub mod report;
pub mod timing;

pub use report::{FrameReport, FrameStatus, StreamReport, StreamSummary};
pub use timing::{Stage, StageTiming, TimingBreakdown};
