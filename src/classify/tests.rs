use super::*;

const CENTER: f64 = 640.0;

fn classify(segments: &[Segment]) -> Buckets {
    classify_segments(segments, CENTER, ClassifierOptions::default())
}

#[test]
fn empty_input_yields_empty_buckets() {
    let buckets = classify(&[]);
    assert!(buckets.is_empty());
}

#[test]
fn steep_segment_is_rejected() {
    // slope = -2
    let buckets = classify(&[Segment::new(100, 700, 200, 500)]);
    assert!(buckets.is_empty(), "got {:?}", buckets);
}

#[test]
fn unit_slope_segment_is_rejected() {
    // slope = -1, above the 0.85 ceiling
    let buckets = classify(&[Segment::new(700, 700, 900, 500)]);
    assert!(buckets.is_empty(), "got {:?}", buckets);
}

#[test]
fn negative_slope_ending_right_of_center_is_dropped() {
    // slope = -0.5 but ends at x=900 > 640
    let buckets = classify(&[Segment::new(700, 700, 900, 600)]);
    assert!(buckets.is_empty(), "got {:?}", buckets);
}

#[test]
fn positive_slope_ending_right_of_center_lands_right() {
    let seg = Segment::new(700, 600, 900, 700);
    let buckets = classify(&[seg]);
    assert_eq!(buckets.right, vec![seg]);
    assert!(buckets.left.is_empty());
}

#[test]
fn negative_slope_ending_left_of_center_lands_left() {
    let seg = Segment::new(300, 600, 100, 700);
    let buckets = classify(&[seg]);
    assert_eq!(buckets.left, vec![seg]);
    assert!(buckets.right.is_empty());
}

#[test]
fn positive_slope_ending_left_of_center_is_dropped() {
    let buckets = classify(&[Segment::new(100, 600, 300, 700)]);
    assert!(buckets.is_empty(), "got {:?}", buckets);
}

#[test]
fn segment_ending_exactly_on_center_is_dropped() {
    let buckets = classify(&[
        Segment::new(440, 600, 640, 700),
        Segment::new(840, 600, 640, 700),
    ]);
    assert!(buckets.is_empty(), "got {:?}", buckets);
}

#[test]
fn horizontal_and_vertical_segments_are_rejected() {
    let buckets = classify(&[
        Segment::new(700, 650, 900, 650),
        Segment::new(900, 500, 900, 700),
        Segment::new(700, 650, 900, 710), // epsilon pulls slope just under 0.3
    ]);
    assert!(buckets.is_empty(), "got {:?}", buckets);
}

#[test]
fn slope_band_filter_holds_over_a_sweep() {
    let classifier = SegmentClassifier::default();
    let opts = *classifier.options();
    for dy in -200..=200 {
        let seg = Segment::new(800, 600, 1000, 600 + dy);
        let slope = seg.slope(opts.slope_epsilon);
        let side = classifier.side_of(&seg, CENTER);
        if slope.abs() <= opts.slope_thresh_min || slope.abs() >= opts.slope_thresh_max {
            assert_eq!(side, None, "dy={dy} slope={slope}");
        }
        if slope < 0.0 {
            // ends right of center, so never left
            assert_ne!(side, Some(LaneSide::Left), "dy={dy}");
        }
    }
}

#[test]
fn mixed_input_keeps_relative_order() {
    let r1 = Segment::new(700, 600, 900, 700);
    let l1 = Segment::new(500, 500, 300, 600);
    let r2 = Segment::new(800, 550, 1000, 650);
    let noise = Segment::new(0, 0, 10, 0);
    let buckets = classify(&[r1, noise, l1, r2]);
    assert_eq!(buckets.right, vec![r1, r2]);
    assert_eq!(buckets.left, vec![l1]);
    assert_eq!(buckets.side(LaneSide::Right).len(), 2);
}

#[test]
fn custom_center_moves_the_split() {
    let seg = Segment::new(450, 500, 550, 560);
    let opts = ClassifierOptions::default();
    assert!(classify_segments(&[seg], 640.0, opts).is_empty());
    assert_eq!(classify_segments(&[seg], 500.0, opts).right, vec![seg]);
}
