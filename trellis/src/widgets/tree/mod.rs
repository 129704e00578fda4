//! Tree widget state machine.
//!
//! Hierarchical data is flattened into a pre-order arena once per source
//! change, then three independent layers of derived state sit on top of it:
//! expansion (visibility), selection (with shift-range over the rendered
//! sequence), and tri-state checking (full/half/empty with bounded
//! propagation). A fourth, optional mask — the filter — hides rows without
//! rebuilding anything.
//!
//! Rendering composes with the same windowing engine the list uses: the
//! tree tracks scroll offset and viewport height and hands the host a
//! windowed slice of [`TreeRow`] view models.
//!
//! # Example
//!
//! ```
//! use trellis::widgets::tree::{Tree, TreeSource};
//!
//! #[derive(Clone)]
//! struct Entry {
//!     name: String,
//!     children: Vec<Entry>,
//! }
//!
//! let roots = vec![Entry {
//!     name: "src".into(),
//!     children: vec![
//!         Entry { name: "lib.rs".into(), children: vec![] },
//!         Entry { name: "main.rs".into(), children: vec![] },
//!     ],
//! }];
//!
//! let source = TreeSource::new(|e: &Entry| {
//!     if e.children.is_empty() {
//!         None
//!     } else {
//!         Some(e.children.clone())
//!     }
//! })
//! .with_key(|e: &Entry| e.name.clone());
//!
//! let tree = Tree::with_roots(source, roots);
//! assert_eq!(tree.rendered_len(), 1); // collapsed root
//!
//! tree.expand("src");
//! assert_eq!(tree.rendered_len(), 3);
//! ```

mod filter;
mod node;
mod source;
mod state;

pub use node::FlatNode;
pub use source::TreeSource;
pub use state::{ExpandDefault, Tree, TreeId, TreeRow};
