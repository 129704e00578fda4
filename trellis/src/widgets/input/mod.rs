//! Restricted-character text input widget.
//!
//! The value only ever admits characters matching a restrict pattern, with
//! an optional length cap. Ordinary edits are filtered per character; IME
//! composition sessions are passed through raw while open and spliced
//! through the filter once, on commit, against a pre-edit snapshot of the
//! value and selection. Paste goes through the same splice path.
//!
//! The value itself lives behind the controlled/uncontrolled bridge, so a
//! host can own it (value + change callback) or let the widget manage it.
//!
//! # Example
//!
//! ```
//! use trellis::widgets::input::RestrictInput;
//!
//! let input = RestrictInput::with_pattern("[0-9]").unwrap().max_chars(4);
//! input.on_change("12ab34");
//! assert_eq!(input.value(), "1234");
//! ```

mod state;

pub use state::{InputId, RestrictInput};
