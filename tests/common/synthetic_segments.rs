use lane_detector::Segment;

/// Straight road seen through a forward camera: both boundaries meet at
/// `(vanish_x, vanish_y)` and cross the bottom row at the given columns.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticRoad {
    pub width: u32,
    pub height: u32,
    pub vanish_x: f64,
    pub vanish_y: f64,
    pub right_bottom_x: f64,
    pub left_bottom_x: f64,
}

impl SyntheticRoad {
    pub fn new(vanish_x: f64) -> Self {
        Self {
            width: 1280,
            height: 720,
            vanish_x,
            vanish_y: 400.0,
            right_bottom_x: 1100.0,
            left_bottom_x: 180.0,
        }
    }

    fn x_on(&self, bottom_x: f64, y: f64) -> f64 {
        let t = (y - self.vanish_y) / (f64::from(self.height) - self.vanish_y);
        self.vanish_x + t * (bottom_x - self.vanish_x)
    }

    /// Dashed marking along one boundary between `top_y` and the bottom row.
    pub fn dashes(&self, bottom_x: f64, top_y: f64, count: usize) -> Vec<Segment> {
        assert!(count > 0, "need at least one dash");
        let bottom = f64::from(self.height);
        let step = (bottom - top_y) / count as f64;
        let dash = step * 0.6;
        (0..count)
            .map(|k| {
                let y1 = top_y + k as f64 * step;
                let y2 = y1 + dash;
                Segment::new(
                    self.x_on(bottom_x, y1).round() as i32,
                    y1.round() as i32,
                    self.x_on(bottom_x, y2).round() as i32,
                    y2.round() as i32,
                )
            })
            .collect()
    }

    pub fn right_dashes(&self, count: usize) -> Vec<Segment> {
        self.dashes(self.right_bottom_x, 480.0, count)
    }

    pub fn left_dashes(&self, count: usize) -> Vec<Segment> {
        self.dashes(self.left_bottom_x, 480.0, count)
    }

    /// Both boundaries, right dashes first.
    pub fn frame(&self, count: usize) -> Vec<Segment> {
        let mut segments = self.right_dashes(count);
        segments.extend(self.left_dashes(count));
        segments
    }
}

/// Segments every classifier configuration with default gates rejects:
/// horizontal, near-vertical, and wrong-side diagonals.
pub fn clutter() -> Vec<Segment> {
    vec![
        Segment::new(100, 650, 1200, 650),
        Segment::new(640, 300, 641, 700),
        Segment::new(200, 500, 400, 620),
        Segment::new(1100, 500, 900, 620),
    ]
}
