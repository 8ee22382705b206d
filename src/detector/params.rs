//! Parameter types configuring the lane pipeline stages.
//!
//! Defaults reproduce the tuning used for 1280x720 highway footage: a slope
//! band of (0.3, 0.85), far endpoints projected at row 470, and a 10 px dead
//! band around the frame center for the straight label.

use crate::classify::ClassifierOptions;
use crate::fit::FitterOptions;
use crate::turn::TurnOptions;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Slope gates for the left/right split.
    pub classifier: ClassifierOptions,
    /// Horizon row and minimum point count for the boundary fit.
    pub fitter: FitterOptions,
    /// Dead band for the straight label.
    pub turn: TurnOptions,
}
