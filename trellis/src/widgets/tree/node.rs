//! Flattened tree nodes and the flatten step.

use super::source::TreeSource;

/// One node of the flattened tree arena.
///
/// Parent/child links are indices into the owning arena, never structural
/// links, so upward traversal is a plain read with no ownership cycle. The
/// arena is laid out in depth-first pre-order and rebuilt whenever the
/// source roots or accessors change; it is never patched incrementally.
#[derive(Debug, Clone)]
pub struct FlatNode<N> {
    /// Unique key within the tree, stable across rebuilds given a stable
    /// key accessor.
    pub key: String,
    /// Arena index of the parent, `None` for roots.
    pub parent: Option<usize>,
    /// Arena indices of the children, in order.
    pub children: Vec<usize>,
    /// Depth from the root level (0-based).
    pub level: usize,
    /// Path of sibling indices from the root set.
    pub position: Vec<usize>,
    /// Whether the source yielded no child collection for this node.
    pub is_leaf: bool,
    /// Whether this node participates in checking.
    pub checkable: bool,
    /// Whether this node participates in selection.
    pub selectable: bool,
    /// Row text from the label accessor, if one was supplied.
    pub label: Option<String>,
    /// Icon name from the icon accessor, if one was supplied.
    pub icon: Option<String>,
    /// The source node this row was derived from.
    pub data: N,
}

/// Flatten the roots depth-first, pre-order. Returns the arena and the
/// arena indices of the roots.
///
/// Recursion depth is bounded only by the input; cyclic inputs do not
/// terminate (caller contract).
pub(super) fn flatten<N: Clone>(
    roots: &[N],
    source: &TreeSource<N>,
) -> (Vec<FlatNode<N>>, Vec<usize>) {
    let mut arena = Vec::new();
    let mut root_indices = Vec::with_capacity(roots.len());
    for (i, root) in roots.iter().enumerate() {
        root_indices.push(flatten_node(root, None, 0, vec![i], source, &mut arena));
    }
    (arena, root_indices)
}

fn flatten_node<N: Clone>(
    node: &N,
    parent: Option<usize>,
    level: usize,
    position: Vec<usize>,
    source: &TreeSource<N>,
    arena: &mut Vec<FlatNode<N>>,
) -> usize {
    let key = match &source.get_key {
        Some(get_key) => get_key(node),
        None => position
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("-"),
    };
    let checkable = source
        .get_checkable
        .as_ref()
        .map(|f| f(node))
        .unwrap_or(true);
    let selectable = source
        .get_selectable
        .as_ref()
        .map(|f| f(node))
        .unwrap_or(true);
    let label = source.get_label.as_ref().map(|f| f(node));
    let icon = source.get_icon.as_ref().map(|f| f(node));

    let index = arena.len();
    arena.push(FlatNode {
        key,
        parent,
        children: Vec::new(),
        level,
        position: position.clone(),
        is_leaf: false,
        checkable,
        selectable,
        label,
        icon,
        data: node.clone(),
    });

    match (source.get_children)(node) {
        Some(children) => {
            let mut child_indices = Vec::with_capacity(children.len());
            for (i, child) in children.iter().enumerate() {
                let mut child_position = position.clone();
                child_position.push(i);
                child_indices.push(flatten_node(
                    child,
                    Some(index),
                    level + 1,
                    child_position,
                    source,
                    arena,
                ));
            }
            arena[index].children = child_indices;
        }
        None => arena[index].is_leaf = true,
    }

    index
}
