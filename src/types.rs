//! Core data model shared by the classifier, the fitter and the predictor.
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw line segment `(x1, y1) -> (x2, y2)` as produced by the upstream
/// Hough-style extractor.
///
/// Serialized as a flat `[x1, y1, x2, y2]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Segment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Slope `dy / (dx + epsilon)`. The epsilon keeps vertical segments finite.
    #[inline]
    pub fn slope(&self, epsilon: f64) -> f64 {
        let dy = f64::from(self.y2) - f64::from(self.y1);
        let dx = f64::from(self.x2) - f64::from(self.x1);
        dy / (dx + epsilon)
    }

    pub fn start(&self) -> Point2<f64> {
        Point2::new(f64::from(self.x1), f64::from(self.y1))
    }

    pub fn end(&self) -> Point2<f64> {
        Point2::new(f64::from(self.x2), f64::from(self.y2))
    }
}

impl From<[i32; 4]> for Segment {
    fn from(v: [i32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Segment> for [i32; 4] {
    fn from(s: Segment) -> Self {
        [s.x1, s.y1, s.x2, s.y2]
    }
}

/// Lane side a segment or a fitted boundary belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneSide {
    Right,
    Left,
}

impl fmt::Display for LaneSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneSide::Right => f.write_str("right"),
            LaneSide::Left => f.write_str("left"),
        }
    }
}

/// Read-only per-frame geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameContext {
    pub width: u32,
    pub height: u32,
    pub center_x: f64,
}

impl FrameContext {
    /// Frame geometry with the horizontal center at `width / 2`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            center_x: f64::from(width) / 2.0,
        }
    }

    pub fn with_center(mut self, center_x: f64) -> Self {
        self.center_x = center_x;
        self
    }
}

/// Point-slope line `y = slope * (x - anchor.x) + anchor.y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineEquation {
    pub slope: f64,
    pub anchor: Point2<f64>,
}

impl LineEquation {
    pub fn new(slope: f64, anchor: Point2<f64>) -> Self {
        Self { slope, anchor }
    }

    /// Column where the line crosses row `y`. A vertical line (infinite
    /// slope) returns `anchor.x`.
    #[inline]
    pub fn x_at(&self, y: f64) -> f64 {
        (y - self.anchor.y) / self.slope + self.anchor.x
    }

    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * (x - self.anchor.x) + self.anchor.y
    }

    /// True when the line cannot be projected onto a row: horizontal or NaN.
    pub fn is_degenerate(&self) -> bool {
        self.slope == 0.0
            || self.slope.is_nan()
            || !self.anchor.x.is_finite()
            || !self.anchor.y.is_finite()
    }
}

/// Rasterizable lane endpoints, recomputed every frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneGeometry {
    pub right_near: Point2<f64>,
    pub right_far: Point2<f64>,
    pub left_near: Point2<f64>,
    pub left_far: Point2<f64>,
}

impl LaneGeometry {
    /// Points in the fixed order right-near, right-far, left-near, left-far.
    pub fn points(&self) -> [Point2<f64>; 4] {
        [self.right_near, self.right_far, self.left_near, self.left_far]
    }

    /// Closed lane polygon in drawing order: left-near, right-near, right-far, left-far.
    pub fn polygon(&self) -> [Point2<f64>; 4] {
        [self.left_near, self.right_near, self.right_far, self.left_far]
    }
}

/// Turn decision derived from the vanishing point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnLabel {
    #[serde(rename = "Turn left")]
    Left,
    #[serde(rename = "Turn right")]
    Right,
    #[serde(rename = "Straight")]
    Straight,
}

impl TurnLabel {
    /// Verbatim tag consumed by downstream renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnLabel::Left => "Turn left",
            TurnLabel::Right => "Turn right",
            TurnLabel::Straight => "Straight",
        }
    }
}

impl fmt::Display for TurnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
