use crate::types::LaneSide;

/// Failures surfaced by the lane core. Empty frames and empty buckets are not
/// errors; they resolve through carry-over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LaneError {
    /// At least one boundary has never been fit on this detector instance.
    NotInitialized { right_missing: bool, left_missing: bool },
    /// The fitted boundaries are parallel; the vanishing point is undefined.
    NoConvergence { right_slope: f64, left_slope: f64 },
    /// A persisted boundary is horizontal or NaN and cannot be projected onto a row.
    DegenerateLine { side: LaneSide, slope: f64 },
}

impl LaneError {
    /// Short machine-friendly tag, used for error histograms in stream summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            LaneError::NotInitialized { .. } => "not_initialized",
            LaneError::NoConvergence { .. } => "no_convergence",
            LaneError::DegenerateLine { .. } => "degenerate_line",
        }
    }
}

impl std::fmt::Display for LaneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaneError::NotInitialized {
                right_missing,
                left_missing,
            } => {
                let missing = match (right_missing, left_missing) {
                    (true, true) => "right and left",
                    (true, false) => "right",
                    (false, true) => "left",
                    (false, false) => "no",
                };
                write!(f, "lane not yet initialized ({missing} boundary never fit)")
            }
            LaneError::NoConvergence {
                right_slope,
                left_slope,
            } => write!(
                f,
                "no convergence: boundaries are parallel (right slope {right_slope:.6}, left slope {left_slope:.6})"
            ),
            LaneError::DegenerateLine { side, slope } => {
                write!(f, "degenerate {side} boundary (slope {slope})")
            }
        }
    }
}

impl std::error::Error for LaneError {}
