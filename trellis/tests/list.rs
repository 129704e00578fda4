use trellis::widgets::list::List;

fn sample_list() -> List<usize> {
    let list = List::with_items(24.0, (0..256).collect());
    list.set_viewport_height(200.0);
    list
}

#[test]
fn test_window_at_scroll_zero() {
    let list = sample_list();
    let window = list.window();
    assert_eq!((window.start, window.end), (0, 9));
    assert_eq!(window.offset_y, 0.0);
    assert_eq!(window.content_height, 256.0 * 24.0);
}

#[test]
fn test_window_mid_scroll() {
    let list = sample_list();
    list.on_scroll(100.0);
    let window = list.window();
    assert_eq!((window.start, window.end), (4, 13));
    assert_eq!(window.offset_y, 4.0 * 24.0);
}

#[test]
fn test_windowed_items_carry_absolute_indices() {
    let list = sample_list();
    list.on_scroll(100.0);
    let items = list.windowed_items();
    assert_eq!(items.len(), 9);
    assert_eq!(items[0], (4, 4));
    assert_eq!(items[8], (12, 12));
}

#[test]
fn test_sub_row_scroll_does_not_mark_dirty() {
    let list = sample_list();
    list.clear_dirty();

    // Still within the same (start, end): reposition only.
    list.on_scroll(10.0);
    assert!(!list.is_dirty());
    assert_eq!(list.scroll_offset(), 10.0);

    // Crossing a row boundary changes the range.
    list.on_scroll(30.0);
    assert!(list.is_dirty());
}

#[test]
fn test_window_clamps_to_item_count() {
    let list = List::with_items(24.0, (0..5).collect::<Vec<usize>>());
    list.set_viewport_height(200.0);
    let window = list.window();
    assert_eq!((window.start, window.end), (0, 5));
}

#[test]
fn test_scroll_to_index() {
    let list = sample_list();
    list.scroll_to_index(20);
    assert_eq!(list.scroll_offset(), 480.0);

    // Out-of-bounds index is silently ignored.
    list.scroll_to_index(10_000);
    assert_eq!(list.scroll_offset(), 480.0);
}

#[test]
fn test_scroll_to_index_if_needed() {
    let list = sample_list();

    // Already visible: no-op.
    list.scroll_to_index_if_needed(5);
    assert_eq!(list.scroll_offset(), 0.0);

    // Below the viewport: lands at the row top.
    list.scroll_to_index_if_needed(20);
    assert_eq!(list.scroll_offset(), 480.0);

    // Above the viewport: same.
    list.scroll_to_index_if_needed(2);
    assert_eq!(list.scroll_offset(), 48.0);
}

#[test]
fn test_set_items_recomputes_window() {
    let list = sample_list();
    list.on_scroll(100.0);
    list.set_items((0..3).collect());
    let window = list.window();
    assert_eq!((window.start, window.end), (3, 3));
    assert_eq!(window.content_height, 3.0 * 24.0);
}

#[test]
fn test_clones_share_state() {
    let list = sample_list();
    let handle = list.clone();
    handle.on_scroll(100.0);
    assert_eq!(list.scroll_offset(), 100.0);
    assert_eq!(list.id(), handle.id());
}
