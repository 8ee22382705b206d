use serde::{Deserialize, Serialize};

/// Options for the per-side boundary fit and endpoint projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitterOptions {
    /// Row at which the far endpoints are projected (roughly the horizon of
    /// the region of interest).
    pub horizon_row: u32,
    /// Minimum number of endpoints required to fit a side; smaller point sets
    /// carry the previous line over.
    pub min_points: usize,
}

impl Default for FitterOptions {
    fn default() -> Self {
        Self {
            horizon_row: 470,
            min_points: 2,
        }
    }
}
