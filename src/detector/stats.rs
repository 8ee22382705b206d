//! Per-instance performance counters.
//!
//! Stage times are accumulated over every frame that reached classification.
//! The counters belong to one [`LaneDetector`](super::LaneDetector) and are
//! cleared explicitly at stream start.

use crate::diagnostics::{Stage, TimingBreakdown};
use serde::Serialize;

#[derive(Clone, Debug, Default)]
pub struct StageStats {
    frames: usize,
    failed: usize,
    classify_ms: f64,
    fit_ms: f64,
    predict_ms: f64,
}

/// Mean per-frame stage times.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageAverages {
    pub frames: usize,
    pub failed: usize,
    pub classify_ms: f64,
    pub fit_ms: f64,
    pub predict_ms: f64,
    pub total_ms: f64,
    /// Upper bound on the frame rate of the core alone, `1000 / total_ms`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fps: Option<f64>,
}

impl StageStats {
    pub fn record(&mut self, timings: &TimingBreakdown, succeeded: bool) {
        self.frames += 1;
        if !succeeded {
            self.failed += 1;
        }
        for stage in Stage::ALL {
            let ms = timings.elapsed(stage).unwrap_or(0.0);
            match stage {
                Stage::Classify => self.classify_ms += ms,
                Stage::Fit => self.fit_ms += ms,
                Stage::Predict => self.predict_ms += ms,
            }
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn averages(&self) -> StageAverages {
        if self.frames == 0 {
            return StageAverages::default();
        }
        let n = self.frames as f64;
        let classify_ms = self.classify_ms / n;
        let fit_ms = self.fit_ms / n;
        let predict_ms = self.predict_ms / n;
        let total_ms = classify_ms + fit_ms + predict_ms;
        StageAverages {
            frames: self.frames,
            failed: self.failed,
            classify_ms,
            fit_ms,
            predict_ms,
            total_ms,
            max_fps: (total_ms > 0.0).then(|| 1000.0 / total_ms),
        }
    }
}
