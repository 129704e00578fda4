//! Interactive widget state machines.
//!
//! Each widget lives in its own module directory and follows the same
//! shell: a process-unique ID, internal state behind `Arc<RwLock<_>>`
//! shared by clones, and an atomic dirty flag the host polls and clears
//! per render pass. Widgets never touch the DOM — hosts feed them events
//! (`on_scroll`, `mouse_down`, `on_change`, …) and read view models back.

pub mod hex;
pub mod input;
pub mod list;
pub mod selection;
pub mod table;
pub mod tree;

pub use hex::HexView;
pub use input::RestrictInput;
pub use list::List;
pub use selection::Selection;
pub use table::Table;
pub use tree::Tree;
