//! Restricted input widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use regex::Regex;

use crate::bridge::ValueBridge;
use crate::error::WidgetError;

/// Unique identifier for a RestrictInput widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

/// Internal state for the RestrictInput widget.
#[derive(Debug)]
struct InputInner {
    /// Current text value (controlled or widget-owned).
    value: ValueBridge<String>,
    /// Per-character admission pattern.
    restrict: Regex,
    /// Maximum value length in characters.
    max_chars: Option<usize>,
    /// Whether an IME composition session is open.
    composing: bool,
    /// Selection snapshot (char offsets) taken on the last key-down.
    last_selection: (usize, usize),
    /// Value snapshot taken on the last key-down.
    last_value: String,
}

/// A text input that only admits characters matching a pattern.
///
/// Edit handlers return the caret position (char offset) the host should
/// restore, when one needs restoring; `None` leaves the caret where the
/// host's edit put it.
#[derive(Debug)]
pub struct RestrictInput {
    /// Unique identifier.
    id: InputId,
    /// Internal state.
    inner: Arc<RwLock<InputInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl RestrictInput {
    /// Create an input admitting characters that match `restrict`.
    pub fn new(restrict: Regex) -> Self {
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(InputInner {
                value: ValueBridge::uncontrolled(String::new()),
                restrict,
                max_chars: None,
                composing: false,
                last_selection: (0, 0),
                last_value: String::new(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an input from a pattern string.
    pub fn with_pattern(pattern: &str) -> Result<Self, WidgetError> {
        Ok(Self::new(Regex::new(pattern)?))
    }

    /// Cap the value length in characters.
    pub fn max_chars(self, max_chars: usize) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.max_chars = Some(max_chars);
        }
        self
    }

    /// Operate the value in controlled mode: the host owns it and receives
    /// every accepted change through `on_change`.
    pub fn controlled(
        self,
        value: impl Into<String>,
        on_change: impl Fn(&String) + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = ValueBridge::controlled(value.into(), on_change);
        }
        self
    }

    /// Keep the value widget-owned but report accepted changes.
    pub fn on_change_notify(
        self,
        on_change: impl Fn(&String) + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            let current = guard.value.get();
            guard.value = ValueBridge::uncontrolled_with(current, on_change);
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> InputId {
        self.id
    }

    /// Current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|g| g.value.get())
            .unwrap_or_default()
    }

    /// Host-side push of a new controlled value (mirror refresh).
    pub fn sync_value(&self, value: impl Into<String>) {
        if let Ok(guard) = self.inner.read() {
            guard.value.sync(value.into());
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Edit events
    // -------------------------------------------------------------------------

    /// Snapshot the selection (char offsets) and value before an edit.
    /// Hosts call this from key-down; snapshots are skipped while a
    /// composition session is open.
    pub fn on_key_down(&self, selection_start: usize, selection_end: usize) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.composing
        {
            guard.last_selection = (selection_start, selection_end);
            guard.last_value = guard.value.get();
        }
    }

    /// Handle the host input field's changed text.
    ///
    /// Outside composition the raw text is filtered to admitted characters;
    /// an edit that would exceed `max_chars` is rejected outright and the
    /// returned caret (the snapshot selection end) must be restored. During
    /// composition the raw text is accepted verbatim so the IME sees its
    /// own intermediate states.
    pub fn on_change(&self, raw: &str) -> Option<usize> {
        if let Ok(guard) = self.inner.write() {
            if guard.composing {
                guard.value.set(raw.to_string());
                self.dirty.store(true, Ordering::SeqCst);
                return None;
            }
            let filtered = filter_by_restrict(&guard.restrict, raw);
            if let Some(max) = guard.max_chars
                && max > 0
                && filtered.chars().count() > max
            {
                return Some(guard.last_selection.1);
            }
            guard.value.set(filtered);
            self.dirty.store(true, Ordering::SeqCst);
        }
        None
    }

    /// Open an IME composition session.
    pub fn on_composition_start(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.composing = true;
        }
    }

    /// Commit an IME composition session with its final data.
    /// Returns the caret position the host should set.
    pub fn on_composition_end(&self, data: &str) -> Option<usize> {
        let caret = self.splice(data);
        if let Ok(mut guard) = self.inner.write() {
            guard.composing = false;
        }
        caret
    }

    /// Handle pasted text through the same splice path as composition.
    pub fn on_paste(&self, data: &str) -> Option<usize> {
        self.splice(data)
    }

    /// Splice `data` into the snapshot value at the snapshot selection,
    /// filtered and capped.
    ///
    /// When nothing fits inside `max_chars` the snapshot value is restored
    /// and the caret returns to the selection end; otherwise the caret
    /// lands after the inserted text.
    fn splice(&self, data: &str) -> Option<usize> {
        if let Ok(guard) = self.inner.write() {
            let (start, end) = guard.last_selection;
            let last_value = guard.last_value.clone();
            let last_len = last_value.chars().count();

            let mut filtered = filter_by_restrict(&guard.restrict, data);
            if let Some(max) = guard.max_chars
                && max > 0
            {
                let remaining = (max + (end - start)).saturating_sub(last_len);
                if remaining == 0 {
                    guard.value.set(last_value);
                    self.dirty.store(true, Ordering::SeqCst);
                    return Some(end);
                }
                filtered = filtered.chars().take(remaining).collect();
            }

            let inserted = filtered.chars().count();
            let mut value: String = last_value.chars().take(start).collect();
            value.push_str(&filtered);
            value.extend(last_value.chars().skip(end));

            guard.value.set(value);
            self.dirty.store(true, Ordering::SeqCst);
            return Some(start + inserted);
        }
        None
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the input needs a re-render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for RestrictInput {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

/// Keep only the characters the restrict pattern admits.
fn filter_by_restrict(restrict: &Regex, value: &str) -> String {
    value
        .chars()
        .filter(|ch| restrict.is_match(ch.encode_utf8(&mut [0u8; 4])))
        .collect()
}
