use std::collections::HashMap;

use trellis::batch::LayoutState;

#[test]
fn test_updates_merge_into_one_commit() {
    let state: LayoutState<HashMap<String, f64>> = LayoutState::new(HashMap::new());
    state.update(|m| {
        m.insert("a".into(), 80.0);
    });
    state.update(|m| {
        m.insert("b".into(), 100.0);
    });
    let token = state.update(|m| {
        m.insert("c".into(), 60.0);
    });

    // Nothing visible before the flush.
    assert!(state.get().is_empty());
    assert!(state.is_pending());

    assert!(state.flush(token));
    let committed = state.get();
    assert_eq!(committed.len(), 3);
    assert_eq!(committed.get("b"), Some(&100.0));
    assert!(!state.is_pending());
}

#[test]
fn test_superseded_flush_is_discarded() {
    let state: LayoutState<HashMap<String, f64>> = LayoutState::new(HashMap::new());
    let stale = state.update(|m| {
        m.insert("a".into(), 80.0);
    });
    let fresh = state.update(|m| {
        m.insert("b".into(), 100.0);
    });

    // The older token no longer commits, and leaves the queue alone.
    assert!(!state.flush(stale));
    assert!(state.get().is_empty());
    assert!(state.is_pending());

    // The newest token drains everything queued since the last commit.
    assert!(state.flush(fresh));
    assert_eq!(state.get().len(), 2);
}

#[test]
fn test_flush_without_change_reports_false() {
    let state: LayoutState<HashMap<String, f64>> = LayoutState::new(HashMap::new());
    let token = state.update(|m| {
        m.insert("a".into(), 80.0);
    });
    assert!(state.flush(token));

    // Re-reporting the same measurement commits but changes nothing.
    let token = state.update(|m| {
        m.insert("a".into(), 80.0);
    });
    assert!(!state.flush(token));
    assert_eq!(state.get().len(), 1);
}

#[test]
fn test_latest_token_tracks_newest_update() {
    let state: LayoutState<Vec<u32>> = LayoutState::new(Vec::new());
    state.update(|v| v.push(1));
    let token = state.update(|v| v.push(2));
    assert_eq!(state.latest_token(), token);
    assert!(state.flush(state.latest_token()));
    assert_eq!(state.get(), vec![1, 2]);
}
