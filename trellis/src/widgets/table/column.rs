//! Column descriptors and the TableRow trait.

use std::collections::HashSet;

pub use crate::engine::sticky::FixedSide;

/// Key assigned to columns that declare none.
pub(super) const INNER_KEY: &str = "__inner_key";

/// Key of the synthetic scrollbar-stub column appended to the header pane.
pub const SCROLLBAR_KEY: &str = "__inner_scrollbar";

/// Width of the scrollbar-stub column.
pub const SCROLLBAR_WIDTH: f64 = 17.0;

/// Column configuration.
///
/// Caller-supplied and immutable from the table's point of view; measured
/// widths are tracked separately by the table itself.
///
/// # Examples
///
/// ```
/// use trellis::widgets::table::{Column, FixedSide};
///
/// let columns = vec![
///     Column::new("Name").key("name").fixed(FixedSide::Left).width(80.0),
///     Column::new("Status").key("status").sortable(),
///     Column::new("Actions").key("actions").fixed(FixedSide::Right).width(60.0),
/// ];
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Unique key; assigned and de-duplicated by the table when absent.
    pub key: Option<String>,
    /// Header text.
    pub title: String,
    /// Declared width, used until a measurement arrives.
    pub width: Option<f64>,
    /// Pin direction, if any.
    pub fixed: Option<FixedSide>,
    /// Whether this column responds to sort toggling.
    pub sortable: bool,
}

impl Column {
    /// Create a column with a header title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            key: None,
            title: title.into(),
            width: None,
            fixed: None,
            sortable: false,
        }
    }

    /// Set the column key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the declared width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Pin the column to one edge.
    pub fn fixed(mut self, side: FixedSide) -> Self {
        self.fixed = Some(side);
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Assign a unique key to every column, in order.
///
/// Columns without a key get [`INNER_KEY`]; collisions (including repeated
/// keyless columns) are resolved by appending `_next` until unique.
pub(super) fn column_keys(columns: &[Column]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keys = Vec::with_capacity(columns.len());
    for column in columns {
        let mut key = column.key.clone().unwrap_or_else(|| INNER_KEY.to_string());
        while !seen.insert(key.clone()) {
            key = format!("{key}_next");
        }
        keys.push(key);
    }
    keys
}

/// Trait for items that can be displayed as rows in a Table.
pub trait TableRow: Clone + Send + Sync + 'static {
    /// Unique, stable identifier for this row.
    fn id(&self) -> String;

    /// Cell text for a column key. Unknown keys should render empty.
    fn cell(&self, column_key: &str) -> String;
}
