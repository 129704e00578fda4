//! trellis — embeddable interactive widget state machines.
//!
//! A library of UI widget logic meant to sit under a rendering host: a
//! virtualized list, a tree view with expand/select/check state, a
//! sticky-column data table, a restricted-character text input, and a
//! hex/byte viewer. The host owns rendering, resize observation and the
//! event loop; this crate owns the algorithms and the derived state the
//! host renders from:
//!
//! - the windowing engine that turns scroll position into the index range
//!   worth materializing ([`engine::window`]);
//! - the sticky column engine computing pin offsets and the "seam" set of
//!   pinned columns that need a boundary shadow ([`engine::sticky`]);
//! - the tree flatten/expand/select/check state machine
//!   ([`widgets::tree`]);
//! - batched layout commits ([`batch`]) and the controlled/uncontrolled
//!   value bridge ([`bridge`]) the widgets are built on.
//!
//! All state lives on the host's single UI thread; every operation is
//! synchronous and runs to completion inside one event handler.

pub mod batch;
pub mod bridge;
pub mod engine;
pub mod error;
pub mod viewport;
pub mod widgets;

pub mod prelude {
    pub use crate::batch::{FlushToken, LayoutState};
    pub use crate::bridge::ValueBridge;
    pub use crate::engine::sticky::{SeamSet, StickyOffsets, fixed_seams, sticky_offsets};
    pub use crate::engine::window::compute_range;
    pub use crate::error::WidgetError;
    pub use crate::viewport::{ResizeSubscription, ViewportObserver};
    pub use crate::widgets::hex::{ByteRange, HexView};
    pub use crate::widgets::input::RestrictInput;
    pub use crate::widgets::list::{List, ListWindow};
    pub use crate::widgets::selection::Selection;
    pub use crate::widgets::table::{Column, FixedSide, MeasureProbe, Table, TableRow};
    pub use crate::widgets::tree::{ExpandDefault, Tree, TreeRow, TreeSource};
}
