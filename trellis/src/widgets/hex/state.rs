//! Hex view widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::format::row_count;

/// Unique identifier for a HexView widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexViewId(usize);

impl HexViewId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for HexViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__hexview_{}", self.0)
    }
}

/// Inclusive byte range; `start` and `end` may be given in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether `index` falls inside the range, whichever way it points.
    pub fn contains(&self, index: usize) -> bool {
        let lo = self.start.min(self.end);
        let hi = self.start.max(self.end);
        index >= lo && index <= hi
    }

    /// The range with `start <= end`.
    pub fn normalized(&self) -> Self {
        Self {
            start: self.start.min(self.end),
            end: self.start.max(self.end),
        }
    }
}

/// Render flags for a single byte cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellFlags {
    pub highlighted: bool,
    pub selected: bool,
    pub active: bool,
    pub hovered: bool,
}

/// Internal state for the HexView widget.
#[derive(Debug, Default)]
struct HexViewInner {
    /// The bytes on display.
    data: Vec<u8>,
    /// Externally supplied highlight range.
    highlight: Option<ByteRange>,
    /// In-progress or committed drag selection.
    selection: Option<ByteRange>,
    /// Byte index under the pointer.
    hover: Option<usize>,
    /// Byte index the last completed drag ended on.
    active: Option<usize>,
    /// Whether a drag is in progress.
    selecting: bool,
    /// Most recently entered index (the release target).
    last_index: Option<usize>,
}

/// A hex/byte viewer with drag selection.
#[derive(Debug)]
pub struct HexView {
    /// Unique identifier.
    id: HexViewId,
    /// Internal state.
    inner: Arc<RwLock<HexViewInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl HexView {
    /// Create an empty hex view.
    pub fn new() -> Self {
        Self {
            id: HexViewId::new(),
            inner: Arc::new(RwLock::new(HexViewInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a hex view over the given bytes.
    pub fn with_data(data: Vec<u8>) -> Self {
        let view = Self::new();
        if let Ok(mut guard) = view.inner.write() {
            guard.data = data;
        }
        view
    }

    /// Get the unique ID.
    pub fn id(&self) -> HexViewId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// The bytes on display.
    pub fn data(&self) -> Vec<u8> {
        self.inner
            .read()
            .map(|g| g.data.clone())
            .unwrap_or_default()
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.data.len()).unwrap_or(0)
    }

    /// Check if there are no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of 16-byte rows.
    pub fn row_count(&self) -> usize {
        row_count(self.len())
    }

    /// Replace the bytes; selection and pointer state reset.
    pub fn set_data(&self, data: Vec<u8>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.data = data;
            guard.selection = None;
            guard.hover = None;
            guard.active = None;
            guard.selecting = false;
            guard.last_index = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Highlight and selection
    // -------------------------------------------------------------------------

    /// Set (or clear) the externally supplied highlight range.
    pub fn set_highlight(&self, highlight: Option<ByteRange>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.highlight = highlight;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// The current selection, normalized, if any.
    pub fn selection(&self) -> Option<ByteRange> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.selection.map(|r| r.normalized()))
    }

    /// Whether a drag is in progress.
    pub fn is_selecting(&self) -> bool {
        self.inner.read().map(|g| g.selecting).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Pointer events
    // -------------------------------------------------------------------------

    /// Pointer pressed on a byte cell: start a drag anchored there.
    pub fn mouse_down(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selecting = true;
            guard.hover = Some(index);
            guard.last_index = Some(index);
            guard.selection = Some(ByteRange::new(index, index));
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Pointer entered a byte cell: update hover, extend a live drag.
    pub fn mouse_enter(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.last_index = Some(index);
            guard.hover = Some(index);
            if guard.selecting
                && let Some(selection) = &mut guard.selection
            {
                selection.end = index;
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Pointer released: end the drag and return the normalized selection
    /// for the host's select-end callback.
    pub fn mouse_up(&self) -> Option<ByteRange> {
        if let Ok(mut guard) = self.inner.write() {
            guard.selecting = false;
            guard.active = guard.last_index;
            self.dirty.store(true, Ordering::SeqCst);
            return guard.selection.map(|r| r.normalized());
        }
        None
    }

    // -------------------------------------------------------------------------
    // Render queries
    // -------------------------------------------------------------------------

    /// Render flags for the byte cell at `index`.
    pub fn cell_flags(&self, index: usize) -> CellFlags {
        self.inner
            .read()
            .map(|g| CellFlags {
                highlighted: g.highlight.is_some_and(|r| r.contains(index)),
                selected: g.selection.is_some_and(|r| r.contains(index)),
                active: g.active == Some(index),
                hovered: g.hover == Some(index),
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the view needs a re-render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for HexView {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for HexView {
    fn default() -> Self {
        Self::new()
    }
}
