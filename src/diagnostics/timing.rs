use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Stages of the per-frame lane pipeline that are timed individually.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Classify,
    Fit,
    Predict,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Classify, Stage::Fit, Stage::Predict];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Classify => "classify",
            Stage::Fit => "fit",
            Stage::Predict => "predict",
        }
    }
}

/// Timing entry describing a single stage of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: Stage,
    pub elapsed_ms: f64,
}

/// Per-frame timing trace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, stage: Stage, elapsed_ms: f64) {
        self.stages.push(StageTiming { stage, elapsed_ms });
    }

    /// Time spent in `stage`, if it ran.
    pub fn elapsed(&self, stage: Stage) -> Option<f64> {
        self.stages
            .iter()
            .filter(|t| t.stage == stage)
            .map(|t| t.elapsed_ms)
            .reduce(|a, b| a + b)
    }
}

/// Milliseconds elapsed since `start`.
#[inline]
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
