//! Virtualized list widget.
//!
//! `List<T>` owns scroll position and viewport size, recomputes the
//! rendered index range through the windowing engine on every scroll and
//! resize event, and exposes the [`ListWindow`] view model the host renders
//! from: only the ranged items are materialized, absolutely offset inside a
//! spacer sized to the full content height so native scrollbar proportions
//! stay truthful.
//!
//! # Example
//!
//! ```
//! use trellis::widgets::list::List;
//!
//! let list = List::with_items(24.0, (0..256).collect::<Vec<_>>());
//! list.set_viewport_height(200.0);
//! list.on_scroll(100.0);
//!
//! let window = list.window();
//! assert_eq!((window.start, window.end), (4, 13));
//! ```

mod state;

pub use state::{List, ListId, ListWindow};
