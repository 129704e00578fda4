use std::sync::{Arc, Mutex};

use trellis::bridge::ValueBridge;

#[test]
fn test_uncontrolled_set_stores_value() {
    let bridge = ValueBridge::uncontrolled(String::new());
    assert!(!bridge.is_controlled());
    bridge.set("hello".to_string());
    assert_eq!(bridge.get(), "hello");
}

#[test]
fn test_uncontrolled_with_callback_still_stores() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let bridge = ValueBridge::uncontrolled_with(String::new(), move |v: &String| {
        sink.lock().unwrap().push(v.clone());
    });

    bridge.set("a".to_string());
    bridge.set("ab".to_string());

    assert_eq!(bridge.get(), "ab");
    assert_eq!(*seen.lock().unwrap(), vec!["a".to_string(), "ab".to_string()]);
}

#[test]
fn test_controlled_set_only_notifies() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let bridge = ValueBridge::controlled("host".to_string(), move |v: &String| {
        sink.lock().unwrap().push(v.clone());
    });

    bridge.set("edit".to_string());

    // The mirror keeps the host value until the host pushes a new one.
    assert_eq!(bridge.get(), "host");
    assert_eq!(*seen.lock().unwrap(), vec!["edit".to_string()]);

    bridge.sync("edit".to_string());
    assert_eq!(bridge.get(), "edit");
}
