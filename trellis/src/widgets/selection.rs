//! Selection state shared by the keyed widgets.
//!
//! Selection tracks string keys, not indices, so it stays stable while
//! items move or the rendered sequence changes. One anchor key — the most
//! recently explicitly selected key — feeds shift-range selection.

use std::collections::HashSet;

/// Keyed selection set plus range-selection anchor.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Currently selected keys.
    selected: HashSet<String>,
    /// Starting point for shift-range selection.
    anchor: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// All selected keys (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.selected.iter().cloned().collect();
        keys.sort();
        keys
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The anchor key for range selection.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Add a key to the selection and move the anchor to it.
    /// Returns `true` if the key was newly selected.
    pub fn select(&mut self, key: &str) -> bool {
        let added = self.selected.insert(key.to_string());
        self.anchor = Some(key.to_string());
        added
    }

    /// Remove a key from the selection. The anchor is left in place.
    /// Returns `true` if the key had been selected.
    pub fn unselect(&mut self, key: &str) -> bool {
        self.selected.remove(key)
    }

    /// Toggle a key (ctrl+click behavior). Moves the anchor to the key.
    /// Returns `(added, removed)` keys.
    pub fn toggle(&mut self, key: &str) -> (Vec<String>, Vec<String>) {
        self.anchor = Some(key.to_string());
        if self.selected.remove(key) {
            (vec![], vec![key.to_string()])
        } else {
            self.selected.insert(key.to_string());
            (vec![key.to_string()], vec![])
        }
    }

    /// Shift-range selection (shift+click behavior).
    ///
    /// Replaces the selection with the contiguous run of `rendered` between
    /// the anchor and `target`, inclusive. When there is no anchor, or the
    /// anchor is not part of the rendered sequence, the target becomes both
    /// the whole selection and the new anchor. A target missing from
    /// `rendered` is a no-op.
    ///
    /// Returns `(added, removed)` keys.
    pub fn select_shifted(
        &mut self,
        target: &str,
        rendered: &[String],
    ) -> (Vec<String>, Vec<String>) {
        let Some(target_pos) = rendered.iter().position(|k| k == target) else {
            return (vec![], vec![]);
        };
        let anchor_pos = self
            .anchor
            .as_ref()
            .and_then(|a| rendered.iter().position(|k| k == a));

        let range: HashSet<String> = match anchor_pos {
            Some(a) => {
                let (start, end) = if a <= target_pos {
                    (a, target_pos)
                } else {
                    (target_pos, a)
                };
                rendered[start..=end].iter().cloned().collect()
            }
            None => {
                // No usable anchor: anchor at the target itself.
                self.anchor = Some(target.to_string());
                std::iter::once(target.to_string()).collect()
            }
        };

        let removed: Vec<String> = self
            .selected
            .iter()
            .filter(|k| !range.contains(*k))
            .cloned()
            .collect();
        for key in &removed {
            self.selected.remove(key);
        }
        let mut added = Vec::new();
        for key in range {
            if self.selected.insert(key.clone()) {
                added.push(key);
            }
        }
        (added, removed)
    }

    /// Select every key in `keys`. Returns the newly selected keys.
    pub fn select_all(&mut self, keys: &[String]) -> Vec<String> {
        let mut added = Vec::new();
        for key in keys {
            if self.selected.insert(key.clone()) {
                added.push(key.clone());
            }
        }
        added
    }

    /// Clear the selection and the anchor. Returns the deselected keys.
    pub fn clear(&mut self) -> Vec<String> {
        let removed: Vec<_> = self.selected.drain().collect();
        self.anchor = None;
        removed
    }
}
