//! Table widget state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::batch::{FlushToken, LayoutState};
use crate::engine::sticky::{FixedSide, SeamSet, StickyOffsets, fixed_seams, sticky_offsets};
use crate::engine::window::{clamp_range, compute_range};
use crate::viewport::{SubscriptionSlot, ViewportObserver};

use super::column::{Column, SCROLLBAR_KEY, SCROLLBAR_WIDTH, TableRow, column_keys};

/// Unique identifier for a Table widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Sticky positioning the host applies to one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStyle {
    /// Which edge the cell sticks to.
    pub side: FixedSide,
    /// Pixel offset from that edge.
    pub offset: f64,
}

/// Internal state for the Table widget.
#[derive(Debug)]
pub(super) struct TableInner<R: TableRow> {
    /// Column definitions.
    pub columns: Vec<Column>,
    /// Assigned unique keys, parallel to `columns`.
    pub keys: Vec<String>,
    /// The rows in the table.
    pub rows: Vec<R>,
    /// Committed measured widths by key (snapshot of the batcher state).
    pub measured: HashMap<String, f64>,
    /// Fixed row height for windowing.
    pub row_height: f64,
    /// Horizontal scroll offset of the body pane.
    pub scroll_left: f64,
    /// Vertical scroll offset of the body pane.
    pub scroll_top: f64,
    /// Scrollable content width reported by the body pane.
    pub content_width: f64,
    /// Mirror of the header pane's scroll position.
    pub head_scroll_left: f64,
    /// Measured body viewport size.
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Current sort state (column index, ascending).
    pub sort: Option<(usize, bool)>,
    /// Cached static pin offsets (head columns, stub included).
    pub offsets: StickyOffsets,
    /// Cached seam set for the current scroll position.
    pub seams: SeamSet,
    /// Windowed row range.
    pub row_range: (i64, i64),
    /// Resize observation handle.
    pub subscription: SubscriptionSlot,
}

/// A sticky-column data table.
///
/// Composes the sticky column engine with batched column-width
/// measurement, head/body horizontal scroll mirroring, and row windowing
/// through the shared windowing engine. The measured-width map is mutated
/// only through the batched update path
/// ([`report_column_width`](Table::report_column_width) →
/// [`commit_widths`](Table::commit_widths)).
#[derive(Debug)]
pub struct Table<R: TableRow> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner<R>>>,
    /// Batched width reports awaiting their flush.
    widths: LayoutState<HashMap<String, f64>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl<R: TableRow> Table<R> {
    /// Create a new table with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        let keys = column_keys(&columns);
        let table = Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner {
                columns,
                keys,
                rows: Vec::new(),
                measured: HashMap::new(),
                row_height: 1.0,
                scroll_left: 0.0,
                scroll_top: 0.0,
                content_width: 0.0,
                head_scroll_left: 0.0,
                viewport_width: 0.0,
                viewport_height: 0.0,
                sort: None,
                offsets: StickyOffsets::default(),
                seams: SeamSet::default(),
                row_range: (0, 0),
                subscription: SubscriptionSlot::default(),
            })),
            widths: LayoutState::new(HashMap::new()),
            dirty: Arc::new(AtomicBool::new(false)),
        };
        if let Ok(mut guard) = table.inner.write() {
            Self::recompute_sticky(&mut guard);
        }
        table
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<R>) -> Self {
        let table = Self::new(columns);
        if let Ok(mut guard) = table.inner.write() {
            guard.rows = rows;
        }
        table
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Set the column definitions. Re-assigns keys, resets horizontal
    /// scroll, and drops measurements for keys that no longer exist.
    pub fn set_columns(&self, columns: Vec<Column>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.keys = column_keys(&columns);
            guard.columns = columns;
            guard.scroll_left = 0.0;
            let keys: Vec<String> = guard.keys.clone();
            guard.measured.retain(|k, _| keys.contains(k));
            Self::recompute_sticky(&mut guard);
            Self::recompute_row_range(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.inner.read().map(|g| g.columns.len()).unwrap_or(0)
    }

    /// The assigned unique column keys, in column order.
    pub fn column_keys(&self) -> Vec<String> {
        self.inner.read().map(|g| g.keys.clone()).unwrap_or_default()
    }

    /// The header pane's column list: the body columns plus the
    /// scrollbar-stub column that pads the header over the body scrollbar.
    pub fn head_columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| {
                let mut cols = g.columns.clone();
                cols.push(
                    Column::new("")
                        .key(SCROLLBAR_KEY)
                        .width(SCROLLBAR_WIDTH),
                );
                cols
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<R> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(index).cloned())
    }

    /// Get all rows.
    pub fn rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Find a row by ID.
    pub fn find_row(&self, id: &str) -> Option<(usize, R)> {
        self.inner.read().ok().and_then(|g| {
            g.rows
                .iter()
                .enumerate()
                .find(|(_, row)| row.id() == id)
                .map(|(i, row)| (i, row.clone()))
        })
    }

    /// Set all rows.
    pub fn set_rows(&self, rows: Vec<R>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            Self::recompute_row_range(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear all rows.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows.clear();
            guard.scroll_top = 0.0;
            Self::recompute_row_range(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Measured widths (batched)
    // -------------------------------------------------------------------------

    /// Report one column's rendered width, as measured by its probe cell.
    ///
    /// Reports are queued, not committed: the returned token must be
    /// redeemed via [`commit_widths`](Table::commit_widths) on the host's
    /// next microtask, and only the newest token wins. That merges the
    /// per-column burst of a layout pass into a single state transition.
    pub fn report_column_width(&self, key: &str, width: f64) -> FlushToken {
        log::trace!("{} column {key} measured {width}", self.id);
        let key = key.to_string();
        self.widths.update(move |m| {
            m.insert(key, width);
        })
    }

    /// Commit queued width reports if `token` is still the newest.
    /// Returns whether a commit ran.
    pub fn commit_widths(&self, token: FlushToken) -> bool {
        if !self.widths.flush(token) {
            return false;
        }
        let measured = self.widths.get();
        if let Ok(mut guard) = self.inner.write() {
            guard.measured = measured;
            Self::recompute_sticky(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!("{} committed measured widths", self.id);
            return true;
        }
        false
    }

    /// Commit whatever is queued under the newest token. Convenience for
    /// hosts that schedule a single "after layout" callback.
    pub fn commit_pending_widths(&self) -> bool {
        self.commit_widths(self.widths.latest_token())
    }

    /// The committed measured widths by column key.
    pub fn measured_widths(&self) -> HashMap<String, f64> {
        self.inner
            .read()
            .map(|g| g.measured.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Handle a scroll event from the body pane.
    ///
    /// Records both offsets and the body's scrollable content width, then
    /// refreshes the seam set and the windowed row range. Marks dirty only
    /// when either derivation changed.
    pub fn on_body_scroll(&self, scroll_left: f64, scroll_top: f64, content_width: f64) {
        if let Ok(mut guard) = self.inner.write() {
            guard.scroll_left = scroll_left;
            guard.scroll_top = scroll_top;
            guard.content_width = content_width;
            let seams_changed = Self::recompute_sticky(&mut guard);
            let range_changed = Self::recompute_row_range(&mut guard);
            if seams_changed || range_changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Get the body's horizontal scroll offset.
    pub fn scroll_left(&self) -> f64 {
        self.inner.read().map(|g| g.scroll_left).unwrap_or(0.0)
    }

    /// Get the body's vertical scroll offset.
    pub fn scroll_top(&self) -> f64 {
        self.inner.read().map(|g| g.scroll_top).unwrap_or(0.0)
    }

    /// The scroll position the header pane must be written to, if it
    /// differs from what it was last given. Writing only on difference
    /// keeps the head/body mirroring from feeding back on itself.
    pub fn take_head_sync(&self) -> Option<f64> {
        if let Ok(mut guard) = self.inner.write()
            && guard.head_scroll_left != guard.scroll_left
        {
            guard.head_scroll_left = guard.scroll_left;
            return Some(guard.head_scroll_left);
        }
        None
    }

    // -------------------------------------------------------------------------
    // Viewport
    // -------------------------------------------------------------------------

    /// Set the measured body viewport size (resize observation callback).
    pub fn set_viewport_size(&self, width: f64, height: f64) {
        if let Ok(mut guard) = self.inner.write() {
            guard.viewport_width = width;
            guard.viewport_height = height;
            let seams_changed = Self::recompute_sticky(&mut guard);
            let range_changed = Self::recompute_row_range(&mut guard);
            if seams_changed || range_changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Get the measured body viewport width.
    pub fn viewport_width(&self) -> f64 {
        self.inner.read().map(|g| g.viewport_width).unwrap_or(0.0)
    }

    /// Subscribe the table's body viewport size to a host resize observer.
    pub fn attach(&self, observer: &dyn ViewportObserver) {
        let table = self.clone();
        let subscription = observer.observe(Box::new(move |width, height| {
            table.set_viewport_size(width, height);
        }));
        if let Ok(mut guard) = self.inner.write() {
            guard.subscription.replace(subscription);
        }
        log::debug!("{} attached to viewport observer", self.id);
    }

    /// Release the resize subscription synchronously.
    pub fn detach(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.subscription.release();
        }
    }

    // -------------------------------------------------------------------------
    // Row windowing
    // -------------------------------------------------------------------------

    /// Set the fixed row height used for windowing.
    pub fn set_row_height(&self, row_height: f64) {
        if let Ok(mut guard) = self.inner.write() {
            guard.row_height = row_height;
            if Self::recompute_row_range(&mut guard) {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// The windowed range of rows to materialize, clamped.
    pub fn visible_row_range(&self) -> (usize, usize) {
        self.inner
            .read()
            .map(|g| clamp_range(g.row_range, g.rows.len()))
            .unwrap_or((0, 0))
    }

    // -------------------------------------------------------------------------
    // Sticky derivation
    // -------------------------------------------------------------------------

    /// Cached static pin offsets over the head columns (stub included).
    pub fn sticky_offsets(&self) -> StickyOffsets {
        self.inner
            .read()
            .map(|g| g.offsets.clone())
            .unwrap_or_default()
    }

    /// Cached seam set for the current scroll position.
    pub fn seams(&self) -> SeamSet {
        self.inner
            .read()
            .map(|g| g.seams.clone())
            .unwrap_or_default()
    }

    /// Sticky positioning for a cell of column `index`, if that column is
    /// pinned.
    pub fn fixed_style(&self, index: usize) -> Option<FixedStyle> {
        self.inner.read().ok().and_then(|g| {
            if let Some(offset) = g.offsets.left.get(index).copied().flatten() {
                return Some(FixedStyle {
                    side: FixedSide::Left,
                    offset,
                });
            }
            if let Some(offset) = g.offsets.right.get(index).copied().flatten() {
                return Some(FixedStyle {
                    side: FixedSide::Right,
                    offset,
                });
            }
            None
        })
    }

    /// Whether column `index` currently carries the "last fixed" boundary
    /// divider, and on which side.
    pub fn fixed_boundary(&self, index: usize) -> Option<FixedSide> {
        self.inner.read().ok().and_then(|g| {
            if g.seams.left_boundary() == Some(index) {
                Some(FixedSide::Left)
            } else if g.seams.right_boundary() == Some(index) {
                Some(FixedSide::Right)
            } else {
                None
            }
        })
    }

    /// Engine input widths for the head columns: measured width when a
    /// probe has reported one, declared width until then, zero otherwise.
    fn head_widths(inner: &TableInner<R>) -> Vec<f64> {
        let mut widths: Vec<f64> = inner
            .keys
            .iter()
            .zip(&inner.columns)
            .map(|(key, column)| {
                inner
                    .measured
                    .get(key)
                    .copied()
                    .or(column.width)
                    .unwrap_or(0.0)
            })
            .collect();
        widths.push(SCROLLBAR_WIDTH);
        widths
    }

    fn head_pins(inner: &TableInner<R>) -> Vec<Option<FixedSide>> {
        let mut pins: Vec<Option<FixedSide>> = inner.columns.iter().map(|c| c.fixed).collect();
        pins.push(None);
        pins
    }

    /// Recompute pin offsets and the seam set; returns whether either
    /// changed.
    fn recompute_sticky(inner: &mut TableInner<R>) -> bool {
        let pins = Self::head_pins(inner);
        let widths = Self::head_widths(inner);
        let offsets = sticky_offsets(&pins, &widths);
        let seams = fixed_seams(
            &pins,
            &widths,
            inner.viewport_width,
            inner.content_width,
            inner.scroll_left,
        );
        let changed = offsets != inner.offsets || seams != inner.seams;
        if seams != inner.seams {
            log::debug!("seam set changed: {seams:?}");
        }
        inner.offsets = offsets;
        inner.seams = seams;
        changed
    }

    fn recompute_row_range(inner: &mut TableInner<R>) -> bool {
        let range = compute_range(inner.scroll_top, inner.row_height, inner.viewport_height);
        if range != inner.row_range {
            inner.row_range = range;
            true
        } else {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort(&self) -> Option<(usize, bool)> {
        self.inner.read().ok().and_then(|g| g.sort)
    }

    /// Set sort by column index and direction.
    ///
    /// This does not reorder the rows — it records the state; the host
    /// sorts its data and calls [`set_rows`](Table::set_rows).
    pub fn set_sort(&self, column_index: usize, ascending: bool) {
        if let Ok(mut guard) = self.inner.write()
            && column_index < guard.columns.len()
            && guard.columns[column_index].sortable
        {
            guard.sort = Some((column_index, ascending));
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle sort for a column: same column flips direction, a different
    /// column starts ascending. Returns the new sort state.
    pub fn toggle_sort(&self, column_index: usize) -> Option<(usize, bool)> {
        if let Ok(mut guard) = self.inner.write()
            && column_index < guard.columns.len()
            && guard.columns[column_index].sortable
        {
            let new_sort = match guard.sort {
                Some((idx, asc)) if idx == column_index => (column_index, !asc),
                _ => (column_index, true),
            };
            guard.sort = Some(new_sort);
            self.dirty.store(true, Ordering::SeqCst);
            return Some(new_sort);
        }
        None
    }

    /// Clear sort state.
    pub fn clear_sort(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sort = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table needs a re-render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<R: TableRow> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            widths: self.widths.clone(),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
