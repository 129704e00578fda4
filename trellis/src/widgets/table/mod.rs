//! Sticky-column data table widget.
//!
//! The table composes four pieces:
//!
//! - column key assignment and de-duplication;
//! - batched column-width measurement ([`MeasureProbe`] cells report into
//!   a queue that commits once per layout pass);
//! - the sticky column engine, whose static pin offsets and dynamic seam
//!   set are re-derived whenever widths, columns, viewport or horizontal
//!   scroll change;
//! - head/body scroll mirroring (the header pane is written only when its
//!   position actually differs) and row windowing through the shared
//!   windowing engine.
//!
//! # Example
//!
//! ```
//! use trellis::widgets::table::{Column, FixedSide, Table, TableRow};
//!
//! #[derive(Clone)]
//! struct Host {
//!     name: String,
//!     addr: String,
//! }
//!
//! impl TableRow for Host {
//!     fn id(&self) -> String {
//!         self.name.clone()
//!     }
//!     fn cell(&self, column_key: &str) -> String {
//!         match column_key {
//!             "name" => self.name.clone(),
//!             "addr" => self.addr.clone(),
//!             _ => String::new(),
//!         }
//!     }
//! }
//!
//! let table = Table::with_rows(
//!     vec![
//!         Column::new("Name").key("name").fixed(FixedSide::Left).width(80.0),
//!         Column::new("Address").key("addr").width(100.0),
//!     ],
//!     vec![Host { name: "web-1".into(), addr: "10.0.0.1".into() }],
//! );
//!
//! let token = table.report_column_width("name", 96.0);
//! assert!(table.commit_widths(token));
//! assert_eq!(table.measured_widths().get("name"), Some(&96.0));
//! ```

mod column;
mod measure;
mod state;

pub use column::{Column, FixedSide, SCROLLBAR_KEY, SCROLLBAR_WIDTH, TableRow};
pub use measure::MeasureProbe;
pub use state::{FixedStyle, Table, TableId};
