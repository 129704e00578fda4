use trellis::engine::window::{clamp_range, compute_range};

#[test]
fn test_range_at_scroll_zero() {
    // 256 items, 24px rows, 200px viewport: ceil(200/24) = 9.
    assert_eq!(compute_range(0.0, 24.0, 200.0), (0, 9));
}

#[test]
fn test_range_mid_scroll() {
    // floor(100/24) = 4, ceil(300/24) = 13.
    assert_eq!(compute_range(100.0, 24.0, 200.0), (4, 13));
}

#[test]
fn test_range_covers_every_visible_row() {
    let item = 24.0;
    for scroll in [0.0, 1.0, 23.0, 24.0, 100.0, 777.5] {
        for viewport in [0.0, 10.0, 200.0, 333.0] {
            let (start, end) = compute_range(scroll, item, viewport);
            for i in 0..200i64 {
                let top = i as f64 * item;
                let bottom = top + item;
                let visible = top < scroll + viewport && bottom > scroll;
                if visible {
                    assert!(
                        i >= start && i < end,
                        "row {i} visible at scroll {scroll}, viewport {viewport} but outside [{start}, {end})"
                    );
                }
            }
        }
    }
}

#[test]
fn test_range_monotonic_in_scroll() {
    let mut previous = compute_range(0.0, 24.0, 200.0);
    for step in 1..400 {
        let range = compute_range(step as f64 * 7.3, 24.0, 200.0);
        assert!(range.0 >= previous.0);
        assert!(range.1 >= previous.1);
        previous = range;
    }
}

#[test]
fn test_negative_scroll_does_not_panic() {
    // Outside the caller contract, but must stay total: no clamping here.
    let (start, end) = compute_range(-50.0, 24.0, 200.0);
    assert!(start < 0);
    assert!(end >= start);
}

#[test]
fn test_clamp_range() {
    assert_eq!(clamp_range((-3, 7), 10), (0, 7));
    assert_eq!(clamp_range((4, 13), 10), (4, 10));
    assert_eq!(clamp_range((12, 20), 10), (10, 10));
    assert_eq!(clamp_range((0, 0), 10), (0, 0));
}
