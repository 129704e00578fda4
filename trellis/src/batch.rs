//! Batched layout-state commits.
//!
//! Measurement callbacks (column width reports and the like) arrive in
//! bursts — one per column per layout pass. Committing each one separately
//! would cost a re-render per report, so updates are queued and flushed in
//! one state transition: every `update` returns a flush token, the host
//! schedules `flush(token)` for its next microtask, and only the most
//! recently issued token actually commits. The winning flush drains the
//! whole queue, including updates enqueued by superseded tokens.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

type Updater<T> = Box<dyn FnOnce(&mut T) + Send + Sync>;

/// Token identifying a scheduled flush. Issued by [`LayoutState::update`],
/// redeemed once by [`LayoutState::flush`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlushToken(u64);

struct LayoutInner<T> {
    state: T,
    queue: Vec<Updater<T>>,
}

/// Batched state container.
///
/// Shared handles (`Clone`) all point at the same state, matching the other
/// widget shells in this crate.
pub struct LayoutState<T> {
    inner: Arc<RwLock<LayoutInner<T>>>,
    latest: Arc<AtomicU64>,
}

impl<T: Clone + PartialEq> LayoutState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LayoutInner {
                state: initial,
                queue: Vec::new(),
            })),
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the last committed state. Queued updates are not visible
    /// until a flush commits them.
    pub fn get(&self) -> T
    where
        T: Default,
    {
        self.inner
            .read()
            .map(|g| g.state.clone())
            .unwrap_or_default()
    }

    /// Read the committed state through a closure (no `Default` needed).
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.inner.read().ok().map(|g| f(&g.state))
    }

    /// Queue an update and return the token the host must redeem on its
    /// next microtask. Issuing a new token supersedes every earlier one.
    pub fn update(&self, f: impl FnOnce(&mut T) + Send + Sync + 'static) -> FlushToken {
        if let Ok(mut guard) = self.inner.write() {
            guard.queue.push(Box::new(f));
        }
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        log::trace!("layout update queued, token {token}");
        FlushToken(token)
    }

    /// The most recently issued token — the only one a flush will honor.
    pub fn latest_token(&self) -> FlushToken {
        FlushToken(self.latest.load(Ordering::SeqCst))
    }

    /// Whether updates are waiting for a flush.
    pub fn is_pending(&self) -> bool {
        self.inner
            .read()
            .map(|g| !g.queue.is_empty())
            .unwrap_or(false)
    }

    /// Commit the queued updates if `token` is still the latest one.
    ///
    /// A superseded flush is discarded without touching the queue — the
    /// newer token's flush will drain it. Returns `true` when a commit ran
    /// and actually changed the state.
    pub fn flush(&self, token: FlushToken) -> bool {
        if token.0 != self.latest.load(Ordering::SeqCst) {
            log::trace!("layout flush superseded, token {}", token.0);
            return false;
        }
        if let Ok(mut guard) = self.inner.write() {
            let queue = std::mem::take(&mut guard.queue);
            if queue.is_empty() {
                return false;
            }
            let previous = guard.state.clone();
            for updater in queue {
                updater(&mut guard.state);
            }
            let changed = guard.state != previous;
            log::trace!("layout flush committed, token {}, changed {changed}", token.0);
            return changed;
        }
        false
    }
}

impl<T> Clone for LayoutState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            latest: Arc::clone(&self.latest),
        }
    }
}

impl<T> std::fmt::Debug for LayoutState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutState")
            .field("latest", &self.latest.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
