use trellis::engine::sticky::{FixedSide, fixed_seams, sticky_offsets};

const L: Option<FixedSide> = Some(FixedSide::Left);
const R: Option<FixedSide> = Some(FixedSide::Right);
const U: Option<FixedSide> = None;

#[test]
fn test_left_offsets_accumulate() {
    let offsets = sticky_offsets(&[L, L, L], &[10.0, 20.0, 30.0]);
    assert_eq!(offsets.left, vec![Some(0.0), Some(10.0), Some(30.0)]);
    assert_eq!(offsets.right, vec![None, None, None]);
}

#[test]
fn test_right_offsets_accumulate_from_end() {
    let offsets = sticky_offsets(&[R, R], &[40.0, 60.0]);
    assert_eq!(offsets.right, vec![Some(60.0), Some(0.0)]);
    assert_eq!(offsets.left, vec![None, None]);
}

#[test]
fn test_unpinned_columns_get_no_offset() {
    let offsets = sticky_offsets(&[L, U, R], &[80.0, 100.0, 60.0]);
    assert_eq!(offsets.left, vec![Some(0.0), None, None]);
    assert_eq!(offsets.right, vec![None, None, Some(0.0)]);
}

#[test]
fn test_missing_widths_count_as_zero() {
    let offsets = sticky_offsets(&[L, L], &[80.0]);
    assert_eq!(offsets.left, vec![Some(0.0), Some(80.0)]);
}

#[test]
fn test_seams_empty_when_unscrolled() {
    let seams = fixed_seams(&[L, U, R], &[80.0, 100.0, 60.0], 200.0, 240.0, 0.0);
    assert!(seams.left.is_empty());
    assert_eq!(seams.right, vec![2]);
}

#[test]
fn test_seams_empty_at_max_scroll() {
    // Max scroll: content 240, window 200 => offset 40.
    let seams = fixed_seams(&[L, U, R], &[80.0, 100.0, 60.0], 200.0, 240.0, 40.0);
    assert_eq!(seams.left, vec![0]);
    assert!(seams.right.is_empty());
}

#[test]
fn test_seams_active_on_both_sides_mid_scroll() {
    let seams = fixed_seams(&[L, U, R], &[80.0, 100.0, 60.0], 200.0, 240.0, 20.0);
    assert_eq!(seams.left, vec![0]);
    assert_eq!(seams.right, vec![2]);
    assert_eq!(seams.left_boundary(), Some(0));
    assert_eq!(seams.right_boundary(), Some(2));
}

#[test]
fn test_left_seam_boundary_is_innermost_pinned_column() {
    // Two leading pinned columns: both seam as soon as content is scrolled
    // under them, and the boundary divider belongs to the inner one.
    let seams = fixed_seams(&[L, L, U, U], &[80.0, 80.0, 100.0, 100.0], 200.0, 360.0, 10.0);
    assert_eq!(seams.left, vec![1, 0]);
    assert_eq!(seams.left_boundary(), Some(1));
}

#[test]
fn test_left_walk_stops_at_first_failing_pinned_column() {
    // A pinned column separated from the first by a wide unpinned one only
    // seams once enough content has scrolled past the gap.
    let pins = [L, U, L, U];
    let widths = [80.0, 100.0, 50.0, 300.0];
    let seams = fixed_seams(&pins, &widths, 200.0, 530.0, 50.0);
    assert_eq!(seams.left, vec![0]);

    let seams = fixed_seams(&pins, &widths, 200.0, 530.0, 150.0);
    assert_eq!(seams.left, vec![2, 0]);
    assert_eq!(seams.left_boundary(), Some(2));
}
