//! Slope-based split of raw segments into left/right lane boundary candidates.
//!
//! Each segment's slope is computed as `dy / (dx + eps)`. Segments whose slope
//! magnitude falls outside `(slope_thresh_min, slope_thresh_max)` are dropped.
//! Survivors are assigned by sign and by where they end horizontally:
//!
//! - right bucket: `slope > 0` and `x2 > center_x`
//! - left bucket: `slope < 0` and `x2 < center_x`
//!
//! Image rows grow downwards, so the right boundary of a lane seen from the
//! driver's seat has positive slope and the left one negative slope.
//! Anything else (e.g. a positive slope ending left of center) is dropped.
//!
//! The split is a pure function of its inputs; an empty input yields two empty
//! buckets.

mod options;

pub use options::ClassifierOptions;

use crate::types::{LaneSide, Segment};
use log::debug;
use serde::Serialize;

/// Per-frame side assignment of segments. Rebuilt every frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Buckets {
    pub right: Vec<Segment>,
    pub left: Vec<Segment>,
}

impl Buckets {
    pub fn is_empty(&self) -> bool {
        self.right.is_empty() && self.left.is_empty()
    }

    pub fn side(&self, side: LaneSide) -> &[Segment] {
        match side {
            LaneSide::Right => &self.right,
            LaneSide::Left => &self.left,
        }
    }
}

/// Stateless classifier carrying its slope gates.
#[derive(Clone, Debug, Default)]
pub struct SegmentClassifier {
    options: ClassifierOptions,
}

impl SegmentClassifier {
    pub fn new(options: ClassifierOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    /// Side a single segment lands on, or `None` when it is dropped.
    pub fn side_of(&self, segment: &Segment, center_x: f64) -> Option<LaneSide> {
        let slope = segment.slope(self.options.slope_epsilon);
        if !self.options.accepts(slope) {
            return None;
        }
        let end_x = f64::from(segment.x2);
        if slope > 0.0 && end_x > center_x {
            Some(LaneSide::Right)
        } else if slope < 0.0 && end_x < center_x {
            Some(LaneSide::Left)
        } else {
            None
        }
    }

    /// Partition `segments` into right and left buckets.
    pub fn classify(&self, segments: &[Segment], center_x: f64) -> Buckets {
        let mut buckets = Buckets::default();
        for seg in segments {
            match self.side_of(seg, center_x) {
                Some(LaneSide::Right) => buckets.right.push(*seg),
                Some(LaneSide::Left) => buckets.left.push(*seg),
                None => {}
            }
        }
        debug!(
            "classify: segments={} right={} left={} dropped={}",
            segments.len(),
            buckets.right.len(),
            buckets.left.len(),
            segments.len() - buckets.right.len() - buckets.left.len()
        );
        buckets
    }
}

/// Convenience wrapper around [`SegmentClassifier::classify`].
pub fn classify_segments(
    segments: &[Segment],
    center_x: f64,
    options: ClassifierOptions,
) -> Buckets {
    SegmentClassifier::new(options).classify(segments, center_x)
}

#[cfg(test)]
mod tests;
