use serde::{Deserialize, Serialize};

/// Slope gates used to sort raw segments into lane sides.
///
/// - `slope_thresh_min` rejects near-horizontal detections (shadows, stop lines).
/// - `slope_thresh_max` rejects near-vertical noise.
/// - `slope_epsilon` is added to `dx` before dividing; classification is only
///   bit-reproducible when it stays at the documented value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierOptions {
    /// Exclusive lower bound on `|slope|`.
    pub slope_thresh_min: f64,
    /// Exclusive upper bound on `|slope|`.
    pub slope_thresh_max: f64,
    /// Added to the horizontal extent before dividing.
    pub slope_epsilon: f64,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            slope_thresh_min: 0.3,
            slope_thresh_max: 0.85,
            slope_epsilon: 1e-5,
        }
    }
}

impl ClassifierOptions {
    /// True when `slope` falls strictly inside the accepted magnitude band.
    #[inline]
    pub fn accepts(&self, slope: f64) -> bool {
        let mag = slope.abs();
        mag > self.slope_thresh_min && mag < self.slope_thresh_max
    }
}
