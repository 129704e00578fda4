//! Tree search: computing filter masks.
//!
//! A filter mask is the set of keys that either match a predicate or sit
//! on the ancestor path of a match. The rendering layer applies the mask
//! through [`Tree::set_filter`]; the flattened arena itself is never
//! rebuilt for a search.

use std::collections::HashSet;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::state::{Tree, TreeInner};

impl<N: Clone + Send + Sync + 'static> Tree<N> {
    /// Compute the filter mask for a predicate over the source node data:
    /// every matching node's key plus the keys of all its ancestors.
    pub fn filter_keys(&self, predicate: impl Fn(&N) -> bool) -> HashSet<String> {
        self.inner
            .read()
            .map(|g| Self::mask_for(&g, |node_index| predicate(&g.nodes[node_index].data)))
            .unwrap_or_default()
    }

    /// Compute and apply the mask for a predicate in one step.
    pub fn filter_by(&self, predicate: impl Fn(&N) -> bool) {
        let keys = self.filter_keys(predicate);
        self.set_filter(Some(keys));
    }

    /// Compute the filter mask for a fuzzy text query against a label
    /// accessor. An empty query matches every node.
    pub fn fuzzy_filter_keys(
        &self,
        query: &str,
        label: impl Fn(&N) -> String,
    ) -> HashSet<String> {
        self.inner
            .read()
            .map(|g| {
                if query.is_empty() {
                    return g.nodes.iter().map(|n| n.key.clone()).collect();
                }
                let mut matcher = Matcher::new(Config::DEFAULT);
                let pattern = Pattern::new(
                    query,
                    CaseMatching::Ignore,
                    Normalization::Smart,
                    AtomKind::Fuzzy,
                );
                Self::mask_for(&g, |node_index| {
                    let text = label(&g.nodes[node_index].data);
                    let mut buf = Vec::new();
                    let haystack = Utf32Str::new(&text, &mut buf);
                    pattern.score(haystack, &mut matcher).is_some()
                })
            })
            .unwrap_or_default()
    }

    /// Collect matches and their ancestor chains over the arena.
    fn mask_for(inner: &TreeInner<N>, mut matches: impl FnMut(usize) -> bool) -> HashSet<String> {
        let mut mask = HashSet::new();
        for i in 0..inner.nodes.len() {
            if !matches(i) {
                continue;
            }
            mask.insert(inner.nodes[i].key.clone());
            let mut current = inner.nodes[i].parent;
            while let Some(parent) = current {
                if !mask.insert(inner.nodes[parent].key.clone()) {
                    // Ancestors above are already in the mask.
                    break;
                }
                current = inner.nodes[parent].parent;
            }
        }
        mask
    }
}
