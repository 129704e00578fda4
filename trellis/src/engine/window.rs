//! Windowed rendering range computation.

/// Compute the half-open index range of items that overlap the viewport.
///
/// `start = floor(scroll_offset / item_size)`,
/// `end = ceil((scroll_offset + viewport_size) / item_size)`.
///
/// The floor/ceil split deliberately over-includes up to one row at each
/// edge so partially visible rows are always materialized and no gap shows
/// while scrolling. Callers clamp the range to their item count when
/// slicing.
///
/// Total function: a negative `scroll_offset` is outside the caller
/// contract but yields a negative `start` instead of panicking. No clamping
/// happens here.
pub fn compute_range(scroll_offset: f64, item_size: f64, viewport_size: f64) -> (i64, i64) {
    let start = (scroll_offset / item_size).floor() as i64;
    let end = ((scroll_offset + viewport_size) / item_size).ceil() as i64;
    (start, end)
}

/// Clamp a computed range to `len` items, yielding usable slice bounds.
pub fn clamp_range(range: (i64, i64), len: usize) -> (usize, usize) {
    let (start, end) = range;
    let start = start.max(0) as usize;
    let end = end.max(0) as usize;
    (start.min(len), end.min(len))
}
