//! Column width measurement collaborator.

use std::sync::{Arc, RwLock};

use crate::batch::FlushToken;
use crate::viewport::{SubscriptionSlot, ViewportObserver};

use super::column::TableRow;
use super::state::Table;

/// Per-column measurement probe.
///
/// The host renders one probe cell per column — zero height, full column
/// width — and routes its measured width here. Reports flow into the
/// table's batched width state, so a layout pass that measures every
/// column still costs one commit.
pub struct MeasureProbe<R: TableRow> {
    table: Table<R>,
    key: String,
    subscription: Arc<RwLock<SubscriptionSlot>>,
}

impl<R: TableRow> MeasureProbe<R> {
    /// Create a probe for one column key.
    pub fn new(table: &Table<R>, key: impl Into<String>) -> Self {
        Self {
            table: table.clone(),
            key: key.into(),
            subscription: Arc::new(RwLock::new(SubscriptionSlot::default())),
        }
    }

    /// The column key this probe measures.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Report a rendered width. Returns the flush token the host redeems
    /// (or lets [`Table::commit_pending_widths`] redeem) on its next
    /// microtask.
    pub fn report(&self, width: f64) -> FlushToken {
        self.table.report_column_width(&self.key, width)
    }

    /// Subscribe this probe to a host resize observer watching its cell.
    pub fn attach(&self, observer: &dyn ViewportObserver) {
        let probe = self.clone();
        let subscription = observer.observe(Box::new(move |width, _height| {
            probe.report(width);
        }));
        if let Ok(mut guard) = self.subscription.write() {
            guard.replace(subscription);
        }
    }

    /// Release the resize subscription synchronously.
    pub fn detach(&self) {
        if let Ok(mut guard) = self.subscription.write() {
            guard.release();
        }
    }
}

impl<R: TableRow> Clone for MeasureProbe<R> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            key: self.key.clone(),
            subscription: Arc::clone(&self.subscription),
        }
    }
}

impl<R: TableRow> std::fmt::Debug for MeasureProbe<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasureProbe")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
