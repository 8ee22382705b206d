//! Per-side boundary fitting with temporal carry-over.
//!
//! For every non-empty bucket the start and end points of all its segments are
//! pooled and reduced to one line with a total-least-squares fit
//! ([`fit_line_tls`]). The fitted slope and the centroid of the pool replace
//! the side's persisted [`LineEquation`]. An empty bucket, or one whose points
//! do not determine a direction, leaves the previous line untouched.
//!
//! Once both sides are known the lines are intersected with two rows, the
//! bottom of the frame and the configured horizon row, giving the four
//! endpoints a renderer needs.
//!
//! State is per instance. A fitter must not be shared between streams, and
//! one frame must finish before the next starts.

mod options;
mod tls;

pub use options::FitterOptions;
pub use tls::{fit_line_tls, LineFit};

use crate::error::LaneError;
use crate::types::{LaneGeometry, LaneSide, LineEquation, Segment};
use log::{debug, warn};
use nalgebra::Point2;
use serde::Serialize;

/// What happened to one side's persisted line during a fit call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SideUpdate {
    /// A fresh line was fit from this frame's bucket.
    Fitted,
    /// The bucket was empty; the previous line (if any) was kept.
    CarriedOver,
    /// The bucket had segments but they did not determine a usable line;
    /// the previous line (if any) was kept.
    Degenerate,
}

/// Geometry plus per-side bookkeeping from [`BoundaryFitter::fit_detailed`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitDetails {
    pub geometry: LaneGeometry,
    pub right: SideUpdate,
    pub left: SideUpdate,
}

/// Owns the persisted right/left boundary lines of one stream.
#[derive(Clone, Debug, Default)]
pub struct BoundaryFitter {
    options: FitterOptions,
    right: Option<LineEquation>,
    left: Option<LineEquation>,
}

impl BoundaryFitter {
    pub fn new(options: FitterOptions) -> Self {
        Self {
            options,
            right: None,
            left: None,
        }
    }

    pub fn options(&self) -> &FitterOptions {
        &self.options
    }

    /// Persisted line for `side`, if that side has ever been fit.
    pub fn line(&self, side: LaneSide) -> Option<&LineEquation> {
        match side {
            LaneSide::Right => self.right.as_ref(),
            LaneSide::Left => self.left.as_ref(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.right.is_some() && self.left.is_some()
    }

    /// Both persisted lines as `(right, left)`.
    pub fn lines(&self) -> Result<(LineEquation, LineEquation), LaneError> {
        match (self.right, self.left) {
            (Some(right), Some(left)) => Ok((right, left)),
            (right, left) => Err(LaneError::NotInitialized {
                right_missing: right.is_none(),
                left_missing: left.is_none(),
            }),
        }
    }

    /// Forget both lines, e.g. at the start of a new stream.
    pub fn reset(&mut self) {
        self.right = None;
        self.left = None;
    }

    /// Update both sides from this frame's buckets and project the lane
    /// endpoints at `frame_height` and the horizon row.
    pub fn fit(
        &mut self,
        right: &[Segment],
        left: &[Segment],
        frame_height: u32,
    ) -> Result<LaneGeometry, LaneError> {
        self.fit_detailed(right, left, frame_height)
            .map(|details| details.geometry)
    }

    /// Same as [`fit`](Self::fit) but also reports how each side was resolved.
    ///
    /// Side updates are applied even when the call fails with
    /// [`LaneError::NotInitialized`], so a side fit now is available to later
    /// frames.
    pub fn fit_detailed(
        &mut self,
        right: &[Segment],
        left: &[Segment],
        frame_height: u32,
    ) -> Result<FitDetails, LaneError> {
        let right_update = self.update_side(LaneSide::Right, right);
        let left_update = self.update_side(LaneSide::Left, left);

        let (right_line, left_line) = self.lines()?;
        let near_y = f64::from(frame_height);
        let far_y = f64::from(self.options.horizon_row);
        let (right_near, right_far) = project(LaneSide::Right, &right_line, near_y, far_y)?;
        let (left_near, left_far) = project(LaneSide::Left, &left_line, near_y, far_y)?;

        Ok(FitDetails {
            geometry: LaneGeometry {
                right_near,
                right_far,
                left_near,
                left_far,
            },
            right: right_update,
            left: left_update,
        })
    }

    fn update_side(&mut self, side: LaneSide, bucket: &[Segment]) -> SideUpdate {
        if bucket.is_empty() {
            debug!("fit: {side} bucket empty, carrying previous line over");
            return SideUpdate::CarriedOver;
        }

        let points: Vec<Point2<f64>> = bucket
            .iter()
            .flat_map(|seg| [seg.start(), seg.end()])
            .collect();
        if points.len() < self.options.min_points {
            warn!(
                "fit: {side} bucket has {} points (< {}), carrying previous line over",
                points.len(),
                self.options.min_points
            );
            return SideUpdate::Degenerate;
        }

        let Some(fit) = fit_line_tls(&points) else {
            warn!(
                "fit: {side} points do not determine a direction ({} points), carrying previous line over",
                points.len()
            );
            return SideUpdate::Degenerate;
        };
        let line = fit.to_equation();
        if line.is_degenerate() {
            warn!(
                "fit: {side} fit is horizontal (slope {}), carrying previous line over",
                line.slope
            );
            return SideUpdate::Degenerate;
        }

        debug!(
            "fit: {side} segments={} slope={:.4} anchor=({:.1}, {:.1}) rms={:.3}",
            bucket.len(),
            line.slope,
            line.anchor.x,
            line.anchor.y,
            fit.rms_residual
        );
        match side {
            LaneSide::Right => self.right = Some(line),
            LaneSide::Left => self.left = Some(line),
        }
        SideUpdate::Fitted
    }
}

fn project(
    side: LaneSide,
    line: &LineEquation,
    near_y: f64,
    far_y: f64,
) -> Result<(Point2<f64>, Point2<f64>), LaneError> {
    if line.is_degenerate() {
        return Err(LaneError::DegenerateLine {
            side,
            slope: line.slope,
        });
    }
    Ok((
        Point2::new(line.x_at(near_y), near_y),
        Point2::new(line.x_at(far_y), far_y),
    ))
}
