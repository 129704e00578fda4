//! List widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::engine::window::{clamp_range, compute_range};
use crate::viewport::{SubscriptionSlot, ViewportObserver};

/// Unique identifier for a List widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(usize);

impl ListId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__list_{}", self.0)
    }
}

/// What the host must materialize for the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListWindow {
    /// First materialized index (inclusive, clamped to the item count).
    pub start: usize,
    /// Past-the-end materialized index (clamped to the item count).
    pub end: usize,
    /// Absolute offset of the materialized block from the top of the spacer.
    pub offset_y: f64,
    /// Spacer height: `items.len() * item_height`.
    pub content_height: f64,
}

/// Internal state for the List widget.
#[derive(Debug)]
pub(super) struct ListInner<T> {
    /// The items in the list.
    pub items: Vec<T>,
    /// Fixed height of each item.
    pub item_height: f64,
    /// Current scroll offset (mirrors the host viewport's scroll position).
    pub scroll_offset: f64,
    /// Measured viewport height.
    pub viewport_height: f64,
    /// Rendered range, unclamped (recomputed, never persisted).
    pub range: (i64, i64),
    /// Resize observation handle.
    pub subscription: SubscriptionSlot,
}

/// A virtualized list widget.
///
/// Only items inside the rendered range are materialized. Re-render (the
/// dirty flag) is coalesced to range changes: sub-row scroll deltas that
/// leave `(start, end)` unchanged reposition without re-rendering.
///
/// Scroll offsets are taken as given — clamping to the scrollable extent is
/// the host viewport's job, not the list's.
#[derive(Debug)]
pub struct List<T> {
    /// Unique identifier.
    id: ListId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<ListInner<T>>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl<T: Clone + Send + Sync + 'static> List<T> {
    /// Create an empty list with a fixed per-item height.
    pub fn new(item_height: f64) -> Self {
        Self::with_items(item_height, Vec::new())
    }

    /// Create a list with initial items.
    pub fn with_items(item_height: f64, items: Vec<T>) -> Self {
        Self {
            id: ListId::new(),
            inner: Arc::new(RwLock::new(ListInner {
                items,
                item_height,
                scroll_offset: 0.0,
                viewport_height: 0.0,
                range: (0, 0),
                subscription: SubscriptionSlot::default(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID.
    pub fn id(&self) -> ListId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.items.len()).unwrap_or(0)
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get an item by index.
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.items.get(index).cloned())
    }

    /// Get all items.
    pub fn items(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.items.clone())
            .unwrap_or_default()
    }

    /// The materialized slice of items, paired with absolute indices.
    pub fn windowed_items(&self) -> Vec<(usize, T)> {
        self.inner
            .read()
            .map(|g| {
                let (start, end) = clamp_range(g.range, g.items.len());
                g.items[start..end]
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(i, item)| (start + i, item))
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Item mutation
    // -------------------------------------------------------------------------

    /// Set all items.
    pub fn set_items(&self, items: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.items = items;
            Self::recompute_range(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Push an item to the end.
    pub fn push(&self, item: T) {
        if let Ok(mut guard) = self.inner.write() {
            guard.items.push(item);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Scroll events
    // -------------------------------------------------------------------------

    /// Get the current scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.inner.read().map(|g| g.scroll_offset).unwrap_or(0.0)
    }

    /// Handle a scroll event from the host viewport.
    ///
    /// Always records the offset; marks dirty only when the rendered range
    /// actually changed.
    pub fn on_scroll(&self, scroll_offset: f64) {
        if let Ok(mut guard) = self.inner.write() {
            guard.scroll_offset = scroll_offset;
            if Self::recompute_range(&mut guard) {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Set the scroll position directly, immediately (no animation).
    ///
    /// The host mirrors this into its viewport; the range is recomputed
    /// right away so the next paint is already correct.
    pub fn scroll_to(&self, offset: f64) {
        self.on_scroll(offset);
    }

    /// Scroll so the given item sits at `index * item_height`.
    /// An index outside the current item count is silently ignored.
    pub fn scroll_to_index(&self, index: usize) {
        let target = match self.inner.read() {
            Ok(g) if index < g.items.len() => index as f64 * g.item_height,
            _ => return,
        };
        self.scroll_to(target);
    }

    /// Scroll the minimal amount to bring an item into view.
    ///
    /// No-ops when the item's projected top already lies inside the
    /// `[scroll_offset, scroll_offset + viewport_height]` band; otherwise
    /// scrolls to the item's top in both directions. An index outside the
    /// current item count is silently ignored.
    pub fn scroll_to_index_if_needed(&self, index: usize) {
        let target = match self.inner.read() {
            Ok(g) if index < g.items.len() => {
                let top = index as f64 * g.item_height;
                if top >= g.scroll_offset && top <= g.scroll_offset + g.viewport_height {
                    return;
                }
                top
            }
            _ => return,
        };
        self.scroll_to(target);
    }

    // -------------------------------------------------------------------------
    // Viewport
    // -------------------------------------------------------------------------

    /// Set the measured viewport height (resize observation callback).
    pub fn set_viewport_height(&self, height: f64) {
        if let Ok(mut guard) = self.inner.write() {
            guard.viewport_height = height;
            if Self::recompute_range(&mut guard) {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Get the measured viewport height.
    pub fn viewport_height(&self) -> f64 {
        self.inner.read().map(|g| g.viewport_height).unwrap_or(0.0)
    }

    /// Subscribe this list's viewport height to a host resize observer.
    /// Any previous subscription is released first.
    pub fn attach(&self, observer: &dyn ViewportObserver) {
        let list = self.clone();
        let subscription = observer.observe(Box::new(move |_width, height| {
            list.set_viewport_height(height);
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
    // Rendering contract
    // -------------------------------------------------------------------------

    /// The raw rendered range, unclamped.
    pub fn range(&self) -> (i64, i64) {
        self.inner.read().map(|g| g.range).unwrap_or((0, 0))
    }

    /// The window the host should materialize right now.
    pub fn window(&self) -> ListWindow {
        self.inner
            .read()
            .map(|g| {
                let (start, end) = clamp_range(g.range, g.items.len());
                ListWindow {
                    start,
                    end,
                    offset_y: start as f64 * g.item_height,
                    content_height: g.items.len() as f64 * g.item_height,
                }
            })
            .unwrap_or(ListWindow {
                start: 0,
                end: 0,
                offset_y: 0.0,
                content_height: 0.0,
            })
    }

    /// Recompute the range from current state; returns whether it changed.
    fn recompute_range(inner: &mut ListInner<T>) -> bool {
        let range = compute_range(inner.scroll_offset, inner.item_height, inner.viewport_height);
        if range != inner.range {
            inner.range = range;
            true
        } else {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the list needs a re-render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
