//! Tree widget state.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::engine::window::{clamp_range, compute_range};
use crate::viewport::{SubscriptionSlot, ViewportObserver};
use crate::widgets::selection::Selection;

use super::node::{FlatNode, flatten};
use super::source::TreeSource;

/// Unique identifier for a Tree widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(usize);

impl TreeId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TreeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__tree_{}", self.0)
    }
}

/// Default expansion policy applied when roots are first supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpandDefault {
    /// Everything starts collapsed.
    #[default]
    Collapsed,
    /// Every expandable node starts expanded.
    All,
    /// Nodes with `level < n` start expanded.
    Level(usize),
}

impl ExpandDefault {
    fn applies_to(self, level: usize) -> bool {
        match self {
            ExpandDefault::Collapsed => false,
            ExpandDefault::All => true,
            ExpandDefault::Level(n) => level < n,
        }
    }
}

/// Per-row view model handed to the rendering host.
#[derive(Debug, Clone)]
pub struct TreeRow<N> {
    pub key: String,
    pub level: usize,
    pub is_leaf: bool,
    pub expanded: bool,
    pub selected: bool,
    pub checked: bool,
    pub half_checked: bool,
    pub checkable: bool,
    pub selectable: bool,
    /// Label accessor output, when the source has one.
    pub label: Option<String>,
    /// Icon accessor output, when the source has one.
    pub icon: Option<String>,
    pub data: N,
}

/// Internal state for the Tree widget.
#[derive(Debug)]
pub(super) struct TreeInner<N> {
    /// Data-source accessors.
    pub source: TreeSource<N>,
    /// Caller-supplied roots.
    pub roots: Vec<N>,
    /// Flattened arena, pre-order.
    pub nodes: Vec<FlatNode<N>>,
    /// Arena indices of the roots.
    pub root_indices: Vec<usize>,
    /// Key -> arena index.
    pub index: HashMap<String, usize>,
    /// Set of expanded node keys.
    pub expanded: HashSet<String>,
    /// Selection state (by key) with shift anchor.
    pub selection: Selection,
    /// Fully checked keys.
    pub checked: HashSet<String>,
    /// Half-checked keys (disjoint from `checked`).
    pub half_checked: HashSet<String>,
    /// Active filter mask: keys that match or are ancestors of a match.
    pub filter: Option<HashSet<String>>,
    /// Rendered sequence (arena indices), derived from expansion + filter.
    pub rendered: Vec<usize>,
    /// Row height for windowing.
    pub item_height: f64,
    /// Current scroll offset.
    pub scroll_offset: f64,
    /// Measured viewport height.
    pub viewport_height: f64,
    /// Windowed range over the rendered sequence.
    pub range: (i64, i64),
    /// Resize observation handle.
    pub subscription: SubscriptionSlot,
}

/// A tree state machine with expand/collapse, selection and tri-state
/// checking, virtualized through the shared windowing engine.
///
/// The flattened arena, expansion set, selection set and check sets are
/// exclusively owned by one instance; clones share the same state.
#[derive(Debug)]
pub struct Tree<N> {
    /// Unique identifier.
    id: TreeId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TreeInner<N>>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl<N: Clone + Send + Sync + 'static> Tree<N> {
    /// Create an empty tree over the given source accessors.
    pub fn new(source: TreeSource<N>) -> Self {
        Self {
            id: TreeId::new(),
            inner: Arc::new(RwLock::new(TreeInner {
                source,
                roots: Vec::new(),
                nodes: Vec::new(),
                root_indices: Vec::new(),
                index: HashMap::new(),
                expanded: HashSet::new(),
                selection: Selection::new(),
                checked: HashSet::new(),
                half_checked: HashSet::new(),
                filter: None,
                rendered: Vec::new(),
                item_height: 1.0,
                scroll_offset: 0.0,
                viewport_height: 0.0,
                range: (0, 0),
                subscription: SubscriptionSlot::default(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a tree with initial roots, everything collapsed.
    pub fn with_roots(source: TreeSource<N>, roots: Vec<N>) -> Self {
        Self::with_expand(source, roots, ExpandDefault::Collapsed)
    }

    /// Create a tree with initial roots and a default-expansion policy.
    pub fn with_expand(source: TreeSource<N>, roots: Vec<N>, expand: ExpandDefault) -> Self {
        let tree = Self::new(source);
        if let Ok(mut guard) = tree.inner.write() {
            guard.roots = roots;
            Self::rebuild(&mut guard);
            let default_expanded: Vec<String> = guard
                .nodes
                .iter()
                .filter(|n| !n.is_leaf && expand.applies_to(n.level))
                .map(|n| n.key.clone())
                .collect();
            guard.expanded.extend(default_expanded);
            Self::rebuild_rendered(&mut guard);
        }
        tree
    }

    /// Get the unique ID.
    pub fn id(&self) -> TreeId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Source data
    // -------------------------------------------------------------------------

    /// Get the root nodes.
    pub fn roots(&self) -> Vec<N> {
        self.inner
            .read()
            .map(|g| g.roots.clone())
            .unwrap_or_default()
    }

    /// Replace the roots and rebuild the arena. Expansion, selection and
    /// check state are kept (stale keys simply stop resolving).
    pub fn set_roots(&self, roots: Vec<N>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.roots = roots;
            Self::rebuild(&mut guard);
            Self::rebuild_rendered(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Total number of flattened nodes, collapsed ones included.
    pub fn node_count(&self) -> usize {
        self.inner.read().map(|g| g.nodes.len()).unwrap_or(0)
    }

    /// Check if the tree has no roots.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.roots.is_empty())
            .unwrap_or(true)
    }

    /// Look up a flattened node by key (collapsed nodes included).
    pub fn node(&self, key: &str) -> Option<FlatNode<N>> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.index.get(key).map(|&i| g.nodes[i].clone()))
    }

    /// Rebuild the arena and key index from the current roots.
    fn rebuild(inner: &mut TreeInner<N>) {
        let (nodes, root_indices) = flatten(&inner.roots, &inner.source);
        inner.index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.key.clone(), i))
            .collect();
        inner.nodes = nodes;
        inner.root_indices = root_indices;
    }

    /// Rebuild the rendered sequence from expansion state and filter mask.
    fn rebuild_rendered(inner: &mut TreeInner<N>) {
        let mut rendered = Vec::new();
        let mut stack: Vec<usize> = inner.root_indices.iter().rev().copied().collect();
        while let Some(i) = stack.pop() {
            let node = &inner.nodes[i];
            if let Some(filter) = &inner.filter
                && !filter.contains(&node.key)
            {
                // Not a match and not above one: the whole subtree is out.
                continue;
            }
            rendered.push(i);
            if inner.expanded.contains(&node.key) {
                for &child in node.children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        inner.rendered = rendered;
        Self::recompute_range(inner);
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    /// Expand a node by key. Unknown keys are ignored.
    pub fn expand(&self, key: &str) {
        if let Ok(mut guard) = self.inner.write()
            && guard.index.contains_key(key)
            && guard.expanded.insert(key.to_string())
        {
            Self::rebuild_rendered(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Collapse a node by key. Unknown keys are ignored.
    pub fn collapse(&self, key: &str) {
        if let Ok(mut guard) = self.inner.write()
            && guard.expanded.remove(key)
        {
            Self::rebuild_rendered(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle expansion for a node by key.
    pub fn toggle_expand(&self, key: &str) {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.index.contains_key(key) {
                return;
            }
            if !guard.expanded.remove(key) {
                guard.expanded.insert(key.to_string());
            }
            Self::rebuild_rendered(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if a node is expanded.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.expanded.contains(key))
            .unwrap_or(false)
    }

    /// Expand every expandable node.
    pub fn expand_all(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let keys: Vec<String> = guard
                .nodes
                .iter()
                .filter(|n| !n.is_leaf)
                .map(|n| n.key.clone())
                .collect();
            guard.expanded.extend(keys);
            Self::rebuild_rendered(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Collapse every node.
    pub fn collapse_all(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.expanded.clear();
            Self::rebuild_rendered(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Currently expanded keys (sorted for deterministic ordering).
    pub fn expanded_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| {
                let mut keys: Vec<_> = g.expanded.iter().cloned().collect();
                keys.sort();
                keys
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select a node by key and anchor future shift-selection at it.
    /// Unknown or non-selectable keys are ignored.
    pub fn select(&self, key: &str) {
        if let Ok(mut guard) = self.inner.write()
            && Self::is_selectable(&guard, key)
            && guard.selection.select(key)
        {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Remove a node from the selection. The anchor stays where it was.
    pub fn unselect(&self, key: &str) {
        if let Ok(mut guard) = self.inner.write()
            && guard.selection.unselect(key)
        {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Shift-range selection over the current rendered sequence.
    ///
    /// Replaces the selection with the contiguous run between the anchor
    /// and `key`, inclusive. Without a usable anchor the selection becomes
    /// `{key}` and the anchor moves there. Returns `(added, removed)`.
    pub fn select_shifted(&self, key: &str) -> (Vec<String>, Vec<String>) {
        if let Ok(mut guard) = self.inner.write() {
            if !Self::is_selectable(&guard, key) {
                return (vec![], vec![]);
            }
            let rendered_keys = Self::rendered_keys_inner(&guard);
            let result = guard.selection.select_shifted(key, &rendered_keys);
            if !result.0.is_empty() || !result.1.is_empty() {
                self.dirty.store(true, Ordering::SeqCst);
            }
            return result;
        }
        (vec![], vec![])
    }

    /// Select every selectable node in the rendered sequence.
    pub fn select_all(&self) -> Vec<String> {
        if let Ok(mut guard) = self.inner.write() {
            let keys: Vec<String> = guard
                .rendered
                .iter()
                .map(|&i| &guard.nodes[i])
                .filter(|n| n.selectable)
                .map(|n| n.key.clone())
                .collect();
            let added = guard.selection.select_all(&keys);
            if !added.is_empty() {
                self.dirty.store(true, Ordering::SeqCst);
            }
            return added;
        }
        vec![]
    }

    /// Clear the selection. Returns the deselected keys.
    pub fn unselect_all(&self) -> Vec<String> {
        if let Ok(mut guard) = self.inner.write() {
            let removed = guard.selection.clear();
            if !removed.is_empty() {
                self.dirty.store(true, Ordering::SeqCst);
            }
            return removed;
        }
        vec![]
    }

    /// Check if a node is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(key))
            .unwrap_or(false)
    }

    /// All selected keys (sorted).
    pub fn selected_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selection.selected())
            .unwrap_or_default()
    }

    /// The shift-selection anchor key.
    pub fn anchor_key(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.selection.anchor().map(str::to_string))
    }

    fn is_selectable(inner: &TreeInner<N>, key: &str) -> bool {
        inner
            .index
            .get(key)
            .map(|&i| inner.nodes[i].selectable)
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Checking
    // -------------------------------------------------------------------------

    /// Check a node: the node and all checkable descendants reachable
    /// through checkable children become fully checked, then each ancestor
    /// re-derives its own state from its immediate checkable children.
    /// Unknown keys are ignored.
    pub fn check(&self, key: &str) {
        if let Ok(mut guard) = self.inner.write() {
            let Some(&start) = guard.index.get(key) else {
                return;
            };
            let mut stack = vec![start];
            while let Some(i) = stack.pop() {
                let node_key = guard.nodes[i].key.clone();
                guard.checked.insert(node_key.clone());
                guard.half_checked.remove(&node_key);
                let children: Vec<usize> = guard.nodes[i]
                    .children
                    .iter()
                    .copied()
                    .filter(|&c| guard.nodes[c].checkable)
                    .collect();
                stack.extend(children);
            }
            let mut current = guard.nodes[start].parent;
            while let Some(parent) = current {
                Self::rederive_after_check(&mut guard, parent);
                current = guard.nodes[parent].parent;
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Uncheck a node: the node and all checkable descendants reachable
    /// through checkable children lose both check states, then ancestors
    /// re-derive. Runs even when the node has no checkable descendants, so
    /// the ancestor pass always happens. Unknown keys are ignored.
    pub fn uncheck(&self, key: &str) {
        if let Ok(mut guard) = self.inner.write() {
            let Some(&start) = guard.index.get(key) else {
                return;
            };
            let mut stack = vec![start];
            while let Some(i) = stack.pop() {
                let node_key = guard.nodes[i].key.clone();
                guard.checked.remove(&node_key);
                guard.half_checked.remove(&node_key);
                let children: Vec<usize> = guard.nodes[i]
                    .children
                    .iter()
                    .copied()
                    .filter(|&c| guard.nodes[c].checkable)
                    .collect();
                stack.extend(children);
            }
            let mut current = guard.nodes[start].parent;
            while let Some(parent) = current {
                Self::rederive_after_uncheck(&mut guard, parent);
                current = guard.nodes[parent].parent;
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if a node is fully checked.
    pub fn is_checked(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.checked.contains(key))
            .unwrap_or(false)
    }

    /// Check if a node is half-checked.
    pub fn is_half_checked(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.half_checked.contains(key))
            .unwrap_or(false)
    }

    /// All fully checked keys (sorted).
    pub fn checked_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| {
                let mut keys: Vec<_> = g.checked.iter().cloned().collect();
                keys.sort();
                keys
            })
            .unwrap_or_default()
    }

    /// All half-checked keys (sorted).
    pub fn half_checked_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| {
                let mut keys: Vec<_> = g.half_checked.iter().cloned().collect();
                keys.sort();
                keys
            })
            .unwrap_or_default()
    }

    /// Re-derive one ancestor's state after a check.
    ///
    /// A node whose checkable-children set is empty is never auto-derived;
    /// its state is only ever changed by direct calls on itself.
    fn rederive_after_check(inner: &mut TreeInner<N>, parent: usize) {
        if !inner.nodes[parent].checkable {
            return;
        }
        let children: Vec<usize> = inner.nodes[parent]
            .children
            .iter()
            .copied()
            .filter(|&c| inner.nodes[c].checkable)
            .collect();
        if children.is_empty() {
            return;
        }
        let parent_key = inner.nodes[parent].key.clone();
        let all_checked = children
            .iter()
            .all(|&c| inner.checked.contains(&inner.nodes[c].key));
        if all_checked {
            inner.checked.insert(parent_key.clone());
            inner.half_checked.remove(&parent_key);
        } else {
            let some_checked = children.iter().any(|&c| {
                let key = &inner.nodes[c].key;
                inner.checked.contains(key) || inner.half_checked.contains(key)
            });
            if some_checked {
                inner.half_checked.insert(parent_key);
            }
        }
    }

    /// Re-derive one ancestor's state after an uncheck.
    fn rederive_after_uncheck(inner: &mut TreeInner<N>, parent: usize) {
        if !inner.nodes[parent].checkable {
            return;
        }
        let children: Vec<usize> = inner.nodes[parent]
            .children
            .iter()
            .copied()
            .filter(|&c| inner.nodes[c].checkable)
            .collect();
        if children.is_empty() {
            return;
        }
        let parent_key = inner.nodes[parent].key.clone();
        inner.checked.remove(&parent_key);
        inner.half_checked.remove(&parent_key);
        let some_checked = children.iter().any(|&c| {
            let key = &inner.nodes[c].key;
            inner.checked.contains(key) || inner.half_checked.contains(key)
        });
        if some_checked {
            inner.half_checked.insert(parent_key);
        }
    }

    // -------------------------------------------------------------------------
    // Filter
    // -------------------------------------------------------------------------

    /// Apply a filter mask: only keys in the set (matches and their
    /// ancestors) stay in the rendered sequence. `None` clears the filter.
    /// The flattened arena is untouched.
    pub fn set_filter(&self, keys: Option<HashSet<String>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.filter = keys;
            Self::rebuild_rendered(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the filter mask.
    pub fn clear_filter(&self) {
        self.set_filter(None);
    }

    // -------------------------------------------------------------------------
    // Rendered sequence and windowing
    // -------------------------------------------------------------------------

    /// Number of rows in the rendered sequence.
    pub fn rendered_len(&self) -> usize {
        self.inner.read().map(|g| g.rendered.len()).unwrap_or(0)
    }

    /// Keys of the rendered sequence, in order.
    pub fn rendered_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| Self::rendered_keys_inner(&g))
            .unwrap_or_default()
    }

    fn rendered_keys_inner(inner: &TreeInner<N>) -> Vec<String> {
        inner
            .rendered
            .iter()
            .map(|&i| inner.nodes[i].key.clone())
            .collect()
    }

    /// The full rendered sequence as row view models.
    pub fn rows(&self) -> Vec<TreeRow<N>> {
        self.inner
            .read()
            .map(|g| g.rendered.iter().map(|&i| Self::row_inner(&g, i)).collect())
            .unwrap_or_default()
    }

    /// The windowed slice of rendered rows, paired with rendered indices.
    pub fn windowed_rows(&self) -> Vec<(usize, TreeRow<N>)> {
        self.inner
            .read()
            .map(|g| {
                let (start, end) = clamp_range(g.range, g.rendered.len());
                (start..end)
                    .map(|pos| (pos, Self::row_inner(&g, g.rendered[pos])))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn row_inner(inner: &TreeInner<N>, i: usize) -> TreeRow<N> {
        let node = &inner.nodes[i];
        TreeRow {
            key: node.key.clone(),
            level: node.level,
            is_leaf: node.is_leaf,
            expanded: inner.expanded.contains(&node.key),
            selected: inner.selection.is_selected(&node.key),
            checked: inner.checked.contains(&node.key),
            half_checked: inner.half_checked.contains(&node.key),
            checkable: node.checkable,
            selectable: node.selectable,
            label: node.label.clone(),
            icon: node.icon.clone(),
            data: node.data.clone(),
        }
    }

    /// Set the row height used for windowing.
    pub fn set_item_height(&self, item_height: f64) {
        if let Ok(mut guard) = self.inner.write() {
            guard.item_height = item_height;
            if Self::recompute_range(&mut guard) {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Handle a scroll event from the host viewport.
    pub fn on_scroll(&self, scroll_offset: f64) {
        if let Ok(mut guard) = self.inner.write() {
            guard.scroll_offset = scroll_offset;
            if Self::recompute_range(&mut guard) {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Get the current scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.inner.read().map(|g| g.scroll_offset).unwrap_or(0.0)
    }

    /// Scroll so the row for `key` sits at the top of the viewport.
    /// Keys missing from the rendered sequence are ignored.
    pub fn scroll_to_key(&self, key: &str) {
        let target = match self.inner.read() {
            Ok(g) => match g
                .rendered
                .iter()
                .position(|&i| g.nodes[i].key == key)
                .map(|pos| pos as f64 * g.item_height)
            {
                Some(offset) => offset,
                None => return,
            },
            Err(_) => return,
        };
        self.on_scroll(target);
    }

    /// Set the measured viewport height (resize observation callback).
    pub fn set_viewport_height(&self, height: f64) {
        if let Ok(mut guard) = self.inner.write() {
            guard.viewport_height = height;
            if Self::recompute_range(&mut guard) {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Subscribe the tree's viewport height to a host resize observer.
    pub fn attach(&self, observer: &dyn ViewportObserver) {
        let tree = self.clone();
        let subscription = observer.observe(Box::new(move |_width, height| {
            tree.set_viewport_height(height);
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

    /// The windowed range over the rendered sequence, clamped.
    pub fn visible_range(&self) -> (usize, usize) {
        self.inner
            .read()
            .map(|g| clamp_range(g.range, g.rendered.len()))
            .unwrap_or((0, 0))
    }

    fn recompute_range(inner: &mut TreeInner<N>) -> bool {
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

    /// Check if the tree needs a re-render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<N> Clone for Tree<N> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
