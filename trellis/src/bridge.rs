//! Controlled/uncontrolled value bridge.
//!
//! Every stateful aspect of a widget (text value, expanded keys, checked
//! keys) can either be managed internally or be controlled by the host,
//! which supplies the current value plus a change callback. The widget code
//! never branches on the mode per call-site: it reads and writes through
//! one accessor pair, and the branch was taken once, at construction.

use std::sync::{Arc, RwLock};

type ChangeFn<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A value that is either widget-owned or host-controlled.
///
/// - **Uncontrolled**: `set` stores the value and notifies the optional
///   change callback.
/// - **Controlled**: `set` only notifies the host; the stored value is a
///   mirror the host refreshes through [`ValueBridge::sync`] when it
///   re-renders with a new value.
pub struct ValueBridge<T> {
    value: Arc<RwLock<T>>,
    on_change: Option<ChangeFn<T>>,
    controlled: bool,
}

impl<T: Clone + Default> ValueBridge<T> {
    /// Widget-owned value starting at `initial`.
    pub fn uncontrolled(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            on_change: None,
            controlled: false,
        }
    }

    /// Widget-owned value that also reports changes to the host.
    pub fn uncontrolled_with(initial: T, on_change: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            on_change: Some(Arc::new(on_change)),
            controlled: false,
        }
    }

    /// Host-controlled value: `set` calls the host back and the host pushes
    /// the accepted value in with [`ValueBridge::sync`].
    pub fn controlled(current: T, on_change: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Self {
            value: Arc::new(RwLock::new(current)),
            on_change: Some(Arc::new(on_change)),
            controlled: true,
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Current value, whichever side owns it.
    pub fn get(&self) -> T {
        self.value.read().map(|g| g.clone()).unwrap_or_default()
    }

    /// Write through the accessor pair.
    pub fn set(&self, value: T) {
        if !self.controlled
            && let Ok(mut guard) = self.value.write()
        {
            *guard = value.clone();
        }
        if let Some(on_change) = &self.on_change {
            on_change(&value);
        }
    }

    /// Host-side push of the current controlled value (mirror refresh).
    /// Also accepted in uncontrolled mode, where it behaves like a plain
    /// store without notification.
    pub fn sync(&self, value: T) {
        if let Ok(mut guard) = self.value.write() {
            *guard = value;
        }
    }
}

impl<T> Clone for ValueBridge<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            on_change: self.on_change.clone(),
            controlled: self.controlled,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ValueBridge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueBridge")
            .field("controlled", &self.controlled)
            .field("value", &self.value.read().ok())
            .finish_non_exhaustive()
    }
}
