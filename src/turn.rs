//! Turn prediction from the vanishing point of the two lane boundaries.
//!
//! With both boundaries in point-slope form the x-coordinate of their
//! intersection is
//!
//! ```text
//! vx = (mr * xr - ml * xl - yr + yl) / (mr - ml)
//! ```
//!
//! where `(xr, yr)` / `(xl, yl)` are the anchors and `mr` / `ml` the slopes.
//! The offset of `vx` from the frame center is bucketed into left, right or
//! straight using a symmetric dead band.
//!
//! Parallel boundaries have no finite vanishing point. That case is an error
//! ([`LaneError::NoConvergence`]) rather than a silent "straight".

use crate::error::LaneError;
use crate::types::{LaneSide, LineEquation, TurnLabel};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnOptions {
    /// Half-width (pixels) of the band around the frame center that counts as straight.
    pub threshold_px: f64,
}

impl Default for TurnOptions {
    fn default() -> Self {
        Self { threshold_px: 10.0 }
    }
}

/// Label plus the vanishing x it was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnPrediction {
    pub label: TurnLabel,
    pub vanish_x: f64,
}

#[derive(Clone, Debug, Default)]
pub struct TurnPredictor {
    options: TurnOptions,
}

impl TurnPredictor {
    pub fn new(options: TurnOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TurnOptions {
        &self.options
    }

    pub fn predict(
        &self,
        right: &LineEquation,
        left: &LineEquation,
        center_x: f64,
    ) -> Result<TurnPrediction, LaneError> {
        let vanish_x = vanishing_x(right, left)?;
        let label = label_for(vanish_x, center_x, self.options.threshold_px);
        debug!(
            "turn: vanish_x={vanish_x:.2} center={center_x:.1} thr={:.1} -> {label}",
            self.options.threshold_px
        );
        Ok(TurnPrediction { label, vanish_x })
    }
}

/// Intersection column of two point-slope lines.
pub fn vanishing_x(right: &LineEquation, left: &LineEquation) -> Result<f64, LaneError> {
    for (side, line) in [(LaneSide::Right, right), (LaneSide::Left, left)] {
        if line.slope.is_nan() {
            return Err(LaneError::DegenerateLine {
                side,
                slope: line.slope,
            });
        }
    }
    let no_convergence = LaneError::NoConvergence {
        right_slope: right.slope,
        left_slope: left.slope,
    };
    // A vertical boundary meets the other one in its own column.
    match (right.slope.is_infinite(), left.slope.is_infinite()) {
        (true, true) => return Err(no_convergence),
        (true, false) => return Ok(right.anchor.x),
        (false, true) => return Ok(left.anchor.x),
        (false, false) => {}
    }
    let denom = right.slope - left.slope;
    if denom == 0.0 || !denom.is_finite() {
        return Err(no_convergence);
    }
    let vanish_x = (right.slope * right.anchor.x - left.slope * left.anchor.x - right.anchor.y
        + left.anchor.y)
        / denom;
    if vanish_x.is_finite() {
        Ok(vanish_x)
    } else {
        Err(no_convergence)
    }
}

/// Bucket a vanishing x against the frame center.
pub fn label_for(vanish_x: f64, center_x: f64, threshold: f64) -> TurnLabel {
    if vanish_x < center_x - threshold {
        TurnLabel::Left
    } else if vanish_x > center_x + threshold {
        TurnLabel::Right
    } else {
        TurnLabel::Straight
    }
}

/// One-shot turn decision for two boundaries.
pub fn predict_turn(
    right: &LineEquation,
    left: &LineEquation,
    center_x: f64,
    threshold: f64,
) -> Result<TurnLabel, LaneError> {
    let vanish_x = vanishing_x(right, left)?;
    Ok(label_for(vanish_x, center_x, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn line(slope: f64, x: f64, y: f64) -> LineEquation {
        LineEquation::new(slope, Point2::new(x, y))
    }

    #[test]
    fn symmetric_lane_vanishes_left_of_center() {
        let right = line(1.0, 900.0, 700.0);
        let left = line(-1.0, 300.0, 700.0);
        let vx = vanishing_x(&right, &left).unwrap();
        assert!((vx - 600.0).abs() < 1e-9, "vx={vx}");
        assert_eq!(predict_turn(&right, &left, 640.0, 10.0).unwrap(), TurnLabel::Left);
    }

    #[test]
    fn intersection_lies_on_both_lines() {
        let right = line(0.6, 900.0, 700.0);
        let left = line(-0.7, 350.0, 690.0);
        let vx = vanishing_x(&right, &left).unwrap();
        assert!((right.y_at(vx) - left.y_at(vx)).abs() < 1e-9);
    }

    #[test]
    fn labels_are_monotonic_in_vanish_x() {
        let center = 640.0;
        let thr = 10.0;
        let mut last = TurnLabel::Left;
        let order = |l: TurnLabel| match l {
            TurnLabel::Left => 0,
            TurnLabel::Straight => 1,
            TurnLabel::Right => 2,
        };
        for step in 0..=400 {
            let vx = 440.0 + step as f64;
            let label = label_for(vx, center, thr);
            assert!(order(label) >= order(last), "vx={vx}");
            if vx < center - thr {
                assert_eq!(label, TurnLabel::Left);
            } else if vx > center + thr {
                assert_eq!(label, TurnLabel::Right);
            } else {
                assert_eq!(label, TurnLabel::Straight);
            }
            last = label;
        }
    }

    #[test]
    fn band_edges_are_straight() {
        assert_eq!(label_for(630.0, 640.0, 10.0), TurnLabel::Straight);
        assert_eq!(label_for(650.0, 640.0, 10.0), TurnLabel::Straight);
        assert_eq!(label_for(629.999, 640.0, 10.0), TurnLabel::Left);
        assert_eq!(label_for(650.001, 640.0, 10.0), TurnLabel::Right);
    }

    #[test]
    fn parallel_lines_fail_with_no_convergence() {
        let right = line(0.5, 900.0, 700.0);
        let left = line(0.5, 300.0, 700.0);
        let err = predict_turn(&right, &left, 640.0, 10.0).unwrap_err();
        assert!(matches!(err, LaneError::NoConvergence { .. }), "{err:?}");
    }

    #[test]
    fn two_vertical_lines_fail_with_no_convergence() {
        let right = line(f64::INFINITY, 900.0, 700.0);
        let left = line(f64::INFINITY, 300.0, 700.0);
        let err = vanishing_x(&right, &left).unwrap_err();
        assert!(matches!(err, LaneError::NoConvergence { .. }), "{err:?}");
    }

    #[test]
    fn vertical_boundary_vanishes_in_its_own_column() {
        let right = line(0.8, 900.0, 700.0);
        let left = line(f64::NEG_INFINITY, 320.0, 600.0);
        assert_eq!(vanishing_x(&right, &left).unwrap(), 320.0);
    }

    #[test]
    fn nan_slope_is_reported_as_degenerate() {
        let right = line(f64::NAN, 900.0, 700.0);
        let left = line(-1.0, 300.0, 700.0);
        let err = vanishing_x(&right, &left).unwrap_err();
        assert!(matches!(
            err,
            LaneError::DegenerateLine {
                side: LaneSide::Right,
                ..
            }
        ));
    }

    #[test]
    fn predictor_uses_configured_threshold() {
        let right = line(1.0, 900.0, 700.0);
        let left = line(-1.0, 300.0, 700.0);
        let wide = TurnPredictor::new(TurnOptions { threshold_px: 50.0 });
        let pred = wide.predict(&right, &left, 640.0).unwrap();
        assert_eq!(pred.label, TurnLabel::Straight);
        assert!((pred.vanish_x - 600.0).abs() < 1e-9);
    }
}
