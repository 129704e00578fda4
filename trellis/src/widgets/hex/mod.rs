//! Hex/byte viewer widget.
//!
//! Pure formatting helpers (16-byte rows, uppercase hex cells, printable
//! ascii cells, six-digit row addresses) plus a small drag-selection state
//! machine over byte indices: press starts a selection, entering cells
//! extends it, release commits it and reports the normalized range.
//!
//! # Example
//!
//! ```
//! use trellis::widgets::hex::{HexView, format};
//!
//! let view = HexView::with_data(vec![0x48, 0x49, 0x0A]);
//! assert_eq!(view.row_count(), 1);
//! assert_eq!(format::hex_cells(&view.data(), 0, 3), ["48", "49", "0A"]);
//! assert_eq!(format::ascii_cells(&view.data(), 0, 3), ["H", "I", "."]);
//!
//! view.mouse_down(0);
//! view.mouse_enter(1);
//! let selection = view.mouse_up().unwrap();
//! assert_eq!((selection.start, selection.end), (0, 1));
//! ```

pub mod format;
mod state;

pub use state::{ByteRange, CellFlags, HexView, HexViewId};
