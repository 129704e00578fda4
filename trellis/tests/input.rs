use std::sync::{Arc, Mutex};

use trellis::widgets::input::RestrictInput;

#[test]
fn test_rejects_characters_outside_restrict() {
    let input = RestrictInput::with_pattern("[0-9]").unwrap();
    assert_eq!(input.on_change("12ab34"), None);
    assert_eq!(input.value(), "1234");
}

#[test]
fn test_invalid_pattern_errors() {
    assert!(RestrictInput::with_pattern("[").is_err());
}

#[test]
fn test_over_long_edit_is_rejected_with_caret_restore() {
    let input = RestrictInput::with_pattern("[0-9]").unwrap().max_chars(4);
    input.on_change("123");
    input.on_key_down(3, 3);

    // Filtered result would be 5 chars: reject, restore caret to the
    // snapshot selection end.
    assert_eq!(input.on_change("12345"), Some(3));
    assert_eq!(input.value(), "123");

    assert_eq!(input.on_change("1234"), None);
    assert_eq!(input.value(), "1234");
}

#[test]
fn test_composition_passes_through_then_splices() {
    let input = RestrictInput::with_pattern("[a-z]").unwrap();
    input.on_change("abc");
    input.on_key_down(1, 2);

    input.on_composition_start();
    // Intermediate IME states are accepted raw.
    input.on_change("aXc");
    assert_eq!(input.value(), "aXc");

    // Commit splices the filtered data over the snapshot.
    let caret = input.on_composition_end("xy");
    assert_eq!(input.value(), "axyc");
    assert_eq!(caret, Some(3));
}

#[test]
fn test_composition_commit_filters_data() {
    let input = RestrictInput::with_pattern("[a-z]").unwrap();
    input.on_change("abc");
    input.on_key_down(3, 3);
    input.on_composition_start();
    let caret = input.on_composition_end("X1y");
    assert_eq!(input.value(), "abcy");
    assert_eq!(caret, Some(4));
}

#[test]
fn test_paste_splices_at_snapshot_selection() {
    let input = RestrictInput::with_pattern("[a-z]").unwrap();
    input.on_change("abcd");
    input.on_key_down(1, 3);

    let caret = input.on_paste("zz");
    assert_eq!(input.value(), "azzd");
    assert_eq!(caret, Some(3));
}

#[test]
fn test_paste_truncates_to_remaining_capacity() {
    let input = RestrictInput::with_pattern(".").unwrap().max_chars(4);
    input.on_change("abc");
    input.on_key_down(3, 3);

    let caret = input.on_paste("defg");
    assert_eq!(input.value(), "abcd");
    assert_eq!(caret, Some(4));
}

#[test]
fn test_paste_into_full_value_is_rejected() {
    let input = RestrictInput::with_pattern(".").unwrap().max_chars(4);
    input.on_change("abcd");
    input.on_key_down(4, 4);

    let caret = input.on_paste("x");
    assert_eq!(input.value(), "abcd");
    assert_eq!(caret, Some(4));
}

#[test]
fn test_controlled_mode_notifies_without_storing() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let input = RestrictInput::with_pattern("[0-9]")
        .unwrap()
        .controlled("42", move |v: &String| {
            sink.lock().unwrap().push(v.clone());
        });

    input.on_change("42a7");

    // The accepted (filtered) value went to the host...
    assert_eq!(*seen.lock().unwrap(), vec!["427".to_string()]);
    // ...while the mirror holds the host value until it pushes a new one.
    assert_eq!(input.value(), "42");
    input.sync_value("427");
    assert_eq!(input.value(), "427");
}
