//! Data-source capabilities for the tree.

type ChildrenFn<N> = Box<dyn Fn(&N) -> Option<Vec<N>> + Send + Sync>;
type KeyFn<N> = Box<dyn Fn(&N) -> String + Send + Sync>;
type FlagFn<N> = Box<dyn Fn(&N) -> bool + Send + Sync>;
type TextFn<N> = Box<dyn Fn(&N) -> String + Send + Sync>;

/// Accessor bundle describing how to read a caller-supplied node type.
///
/// The flatten step walks the structure through these capabilities, so the
/// algorithm stays free of any trait on the node type itself. Only the
/// child accessor is mandatory:
///
/// - `get_key` — stable unique key; defaults to the dash-joined
///   root-relative position path (`"0-2-1"`).
/// - `get_label` / `get_icon` — row text and icon name; rows fall back to
///   nothing and the host reads `data` instead.
/// - `get_checkable` / `get_selectable` — default to `true`.
///
/// Returning `None` from the child accessor marks a leaf; `Some(vec![])`
/// is a non-leaf that currently has no children.
///
/// Callers must guarantee the structure is acyclic: a cycle makes the
/// flatten step non-terminating.
pub struct TreeSource<N> {
    pub(super) get_children: ChildrenFn<N>,
    pub(super) get_key: Option<KeyFn<N>>,
    pub(super) get_label: Option<TextFn<N>>,
    pub(super) get_icon: Option<TextFn<N>>,
    pub(super) get_checkable: Option<FlagFn<N>>,
    pub(super) get_selectable: Option<FlagFn<N>>,
}

impl<N> TreeSource<N> {
    /// Create a source from the child accessor.
    pub fn new(get_children: impl Fn(&N) -> Option<Vec<N>> + Send + Sync + 'static) -> Self {
        Self {
            get_children: Box::new(get_children),
            get_key: None,
            get_label: None,
            get_icon: None,
            get_checkable: None,
            get_selectable: None,
        }
    }

    /// Supply a key accessor.
    pub fn with_key(mut self, get_key: impl Fn(&N) -> String + Send + Sync + 'static) -> Self {
        self.get_key = Some(Box::new(get_key));
        self
    }

    /// Supply a label accessor.
    pub fn with_label(mut self, get_label: impl Fn(&N) -> String + Send + Sync + 'static) -> Self {
        self.get_label = Some(Box::new(get_label));
        self
    }

    /// Supply an icon accessor.
    pub fn with_icon(mut self, get_icon: impl Fn(&N) -> String + Send + Sync + 'static) -> Self {
        self.get_icon = Some(Box::new(get_icon));
        self
    }

    /// Supply a checkability accessor.
    pub fn with_checkable(
        mut self,
        get_checkable: impl Fn(&N) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.get_checkable = Some(Box::new(get_checkable));
        self
    }

    /// Supply a selectability accessor.
    pub fn with_selectable(
        mut self,
        get_selectable: impl Fn(&N) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.get_selectable = Some(Box::new(get_selectable));
        self
    }
}

impl<N> std::fmt::Debug for TreeSource<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeSource")
            .field("has_key", &self.get_key.is_some())
            .field("has_label", &self.get_label.is_some())
            .field("has_icon", &self.get_icon.is_some())
            .field("has_checkable", &self.get_checkable.is_some())
            .field("has_selectable", &self.get_selectable.is_some())
            .finish_non_exhaustive()
    }
}
