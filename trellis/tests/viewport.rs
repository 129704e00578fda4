use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use trellis::viewport::{ResizeCallback, ResizeSubscription, ViewportObserver};
use trellis::widgets::list::List;

#[derive(Default)]
struct TestObserver {
    callbacks: Mutex<Vec<Arc<ResizeCallback>>>,
    cancelled: Arc<AtomicUsize>,
}

impl TestObserver {
    fn fire(&self, width: f64, height: f64) {
        let callbacks: Vec<_> = self.callbacks.lock().unwrap().clone();
        for callback in callbacks {
            (*callback)(width, height);
        }
    }

    fn cancelled(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }
}

struct TestSubscription {
    cancelled: Arc<AtomicUsize>,
}

impl ResizeSubscription for TestSubscription {
    fn cancel(&self) {
        self.cancelled.fetch_add(1, Ordering::SeqCst);
    }
}

impl ViewportObserver for TestObserver {
    fn observe(&self, on_resize: ResizeCallback) -> Box<dyn ResizeSubscription> {
        self.callbacks.lock().unwrap().push(Arc::new(on_resize));
        Box::new(TestSubscription {
            cancelled: Arc::clone(&self.cancelled),
        })
    }
}

#[test]
fn test_attach_feeds_viewport_size() {
    let observer = TestObserver::default();
    let list = List::with_items(24.0, (0..100).collect::<Vec<_>>());
    list.attach(&observer);

    observer.fire(300.0, 200.0);
    assert_eq!(list.viewport_height(), 200.0);
    assert_eq!(list.window().end, 9);
}

#[test]
fn test_detach_releases_synchronously() {
    let observer = TestObserver::default();
    let list = List::with_items(24.0, (0..100).collect::<Vec<_>>());
    list.attach(&observer);
    assert_eq!(observer.cancelled(), 0);

    list.detach();
    assert_eq!(observer.cancelled(), 1);
}

#[test]
fn test_reattach_replaces_previous_subscription() {
    let observer = TestObserver::default();
    let list = List::with_items(24.0, (0..100).collect::<Vec<_>>());
    list.attach(&observer);
    list.attach(&observer);
    assert_eq!(observer.cancelled(), 1);
}

#[test]
fn test_drop_releases_subscription() {
    let observer = TestObserver::default();
    {
        let list = List::with_items(24.0, (0..100).collect::<Vec<_>>());
        list.attach(&observer);
    }
    assert_eq!(observer.cancelled(), 1);
}
