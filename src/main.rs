use lane_detector::{FrameContext, FrameOutcome, LaneDetector, LaneParams, Segment};

fn main() {
    // Demo stub: a synthetic road whose vanishing point drifts from left to right
    let _ = env_logger::try_init();
    let frame = FrameContext::new(1280, 720);
    let mut det = LaneDetector::new(LaneParams::default());

    for step in 0..9 {
        let vx = 560 + step * 20;
        let segments = [
            boundary_segment(vx, 400, 1100, 720),
            boundary_segment(vx, 400, 180, 720),
        ];
        match det.process_frame(&segments, &frame) {
            Ok(FrameOutcome::Lane(lane)) => println!(
                "frame={step} vanish_x={:.1} turn={}",
                lane.turn.vanish_x, lane.turn.label
            ),
            Ok(FrameOutcome::NoSegments) => println!("frame={step} no segments"),
            Err(err) => println!("frame={step} error: {err}"),
        }
    }

    let stats = det.stats();
    println!(
        "avg_total_ms={:.4} max_fps={}",
        stats.total_ms,
        stats
            .max_fps
            .map_or_else(|| "n/a".to_string(), |fps| format!("{fps:.1}"))
    );
}

/// Lower half of the line from `(vx, vy)` to `(bx, by)`.
fn boundary_segment(vx: i32, vy: i32, bx: i32, by: i32) -> Segment {
    let mid_x = (vx + bx) / 2;
    let mid_y = (vy + by) / 2;
    Segment::new(mid_x, mid_y, bx, by)
}
