//! Sticky (pinned) column offset and seam computation.
//!
//! Two independent pure computations over a column list:
//!
//! - **Static pin offsets**: the `left`/`right` pixel offset each pinned
//!   column is stuck at, cumulative over the pinned columns before it on the
//!   same side.
//! - **Dynamic seam set**: which pinned columns currently sit on top of
//!   scrolled-under content and therefore need a visible boundary shadow.
//!   Depends on the horizontal scroll offset, so it is recomputed per scroll
//!   event while the static offsets only change with widths or columns.

/// Which edge a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixedSide {
    Left,
    Right,
}

/// Static pin offsets, parallel to the column list.
///
/// `left[i]` is the sticky offset of column `i` when it is pinned left
/// (`None` when it is not), symmetric for `right[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StickyOffsets {
    pub left: Vec<Option<f64>>,
    pub right: Vec<Option<f64>>,
}

/// The set of pinned columns that currently need a boundary shadow.
///
/// Each side is ordered boundary-first: the first element is the pinned
/// column adjacent to scrolled, non-pinned content — the one that renders
/// the "last fixed" divider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeamSet {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl SeamSet {
    /// The column carrying the left-side divider, if any.
    pub fn left_boundary(&self) -> Option<usize> {
        self.left.first().copied()
    }

    /// The column carrying the right-side divider, if any.
    pub fn right_boundary(&self) -> Option<usize> {
        self.right.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Compute static pin offsets from pin directions and measured widths.
///
/// Left-pinned columns accumulate the widths of the left-pinned columns
/// scanned before them; right-pinned columns symmetrically from the end.
/// `widths` shorter than `pins` is treated as missing measurements (width 0).
pub fn sticky_offsets(pins: &[Option<FixedSide>], widths: &[f64]) -> StickyOffsets {
    let len = pins.len();
    let mut offsets = StickyOffsets {
        left: vec![None; len],
        right: vec![None; len],
    };

    let mut left = 0.0;
    for (i, pin) in pins.iter().enumerate() {
        if *pin == Some(FixedSide::Left) {
            offsets.left[i] = Some(left);
            left += width_at(widths, i);
        }
    }

    let mut right = 0.0;
    for (i, pin) in pins.iter().enumerate().rev() {
        if *pin == Some(FixedSide::Right) {
            offsets.right[i] = Some(right);
            right += width_at(widths, i);
        }
    }

    offsets
}

/// Compute the dynamic seam set for the current scroll position.
///
/// Walking pinned-left columns in order, a column stays in the seam while
/// the scrolled-past budget (the scroll offset plus the widths of seam
/// columns already admitted) still exceeds the cumulative width of every
/// column scanned so far; the first pinned column failing the test stops
/// the walk. The right side walks symmetrically with
/// `content_size - (window_size + offset)` as its starting budget.
///
/// A fully unscrolled table has an empty left seam; a table scrolled to its
/// maximum has an empty right seam. Offsets past those extremes are the
/// caller's contract to avoid, not clamped here.
pub fn fixed_seams(
    pins: &[Option<FixedSide>],
    widths: &[f64],
    window_size: f64,
    content_size: f64,
    offset: f64,
) -> SeamSet {
    let len = pins.len();
    let mut seams = SeamSet::default();

    let mut scanned = 0.0;
    let mut budget = offset;
    for i in 0..len {
        if pins[i] == Some(FixedSide::Left) {
            if budget > scanned {
                seams.left.insert(0, i);
                budget += width_at(widths, i);
            } else {
                break;
            }
        }
        scanned += width_at(widths, i);
    }

    let mut scanned = 0.0;
    let mut budget = content_size - (window_size + offset);
    for i in (0..len).rev() {
        if pins[i] == Some(FixedSide::Right) {
            if budget > scanned {
                seams.right.insert(0, i);
                budget += width_at(widths, i);
            } else {
                break;
            }
        }
        scanned += width_at(widths, i);
    }

    seams
}

fn width_at(widths: &[f64], i: usize) -> f64 {
    widths.get(i).copied().unwrap_or(0.0)
}
