//! Resize observation contract between widgets and their host.
//!
//! The host environment owns the actual observation primitive (a
//! `ResizeObserver` in a browser, a layout pass elsewhere). Widgets only
//! need two things from it: subscribe to content-box size changes of their
//! viewport element, and release that subscription synchronously on
//! disposal so no callback fires after detach.

/// Callback invoked with the observed element's `(width, height)`.
pub type ResizeCallback = Box<dyn Fn(f64, f64) + Send + Sync>;

/// Host-side observation source for one element.
pub trait ViewportObserver {
    /// Start observing; the returned subscription keeps the observation
    /// alive until cancelled.
    fn observe(&self, on_resize: ResizeCallback) -> Box<dyn ResizeSubscription>;
}

/// Live observation handle. `cancel` must take effect synchronously;
/// implementations should also cancel from `Drop`.
pub trait ResizeSubscription: Send + Sync {
    fn cancel(&self);
}

/// Widget-side slot holding at most one live subscription.
#[derive(Default)]
pub(crate) struct SubscriptionSlot {
    current: Option<Box<dyn ResizeSubscription>>,
}

impl SubscriptionSlot {
    /// Replace the held subscription, cancelling the previous one first.
    pub(crate) fn replace(&mut self, subscription: Box<dyn ResizeSubscription>) {
        self.release();
        self.current = Some(subscription);
    }

    /// Cancel and drop the held subscription, if any.
    pub(crate) fn release(&mut self) {
        if let Some(subscription) = self.current.take() {
            log::debug!("viewport subscription released");
            subscription.cancel();
        }
    }
}

impl std::fmt::Debug for SubscriptionSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionSlot")
            .field("subscribed", &self.current.is_some())
            .finish()
    }
}

impl Drop for SubscriptionSlot {
    fn drop(&mut self) {
        self.release();
    }
}
