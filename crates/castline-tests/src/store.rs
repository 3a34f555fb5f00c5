//! Integration tests for the shared timeline store.

use std::sync::Arc;
use std::thread;

use castline_core::TimelineConfig;
use castline_timeline::{Action, Clip, Reducer, TimelineState, TimelineStore, Track};

#[test]
fn concurrent_dispatch_loses_no_updates() {
    crate::init_logging();
    let store = Arc::new(TimelineStore::new(Reducer::default(), TimelineState::default()));
    store.dispatch(Action::add_track(Track::new("t1")));
    let rx = store.subscribe();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..25 {
                    let start = (worker * 25 + i) as f64;
                    let id = format!("w{worker}-c{i}");
                    store.dispatch(Action::add_clip(Clip::new(id, "t1", start, start + 1.0)));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let state = store.state();
    assert_eq!(state.clips.len(), 100);
    assert_eq!(state.tracks["t1"].clip_count(), 100);
    assert_eq!(state.duration, 100.0);
    assert_eq!(store.revision(), 101);
    assert!(state.check_invariants(&TimelineConfig::default()).is_ok());

    let revisions: Vec<u64> = rx.try_iter().map(|e| e.revision).collect();
    assert_eq!(revisions, (2..=101).collect::<Vec<_>>());
}

#[test]
fn snapshots_are_immutable() {
    let store = TimelineStore::default();
    store.dispatch(Action::add_track(Track::new("t1")));
    store.dispatch(Action::add_clip(Clip::new("c1", "t1", 0.0, 10.0)));

    let before = store.state();
    store.dispatch(Action::split_clip("c1", 5.0));
    let after = store.state();

    assert_eq!(before.clips.len(), 1);
    assert_eq!(before.clips["c1"].end, 10.0);
    assert_eq!(after.clips.len(), 2);
    assert_eq!(after.clips["c1"].end, 5.0);
}

#[test]
fn store_uses_configured_reducer() {
    let config = TimelineConfig::from_json(br#"{ "min_clip_span": 2.0 }"#).unwrap();
    let reducer = Reducer::new(config);
    assert_eq!(reducer.config().min_clip_span, 2.0);
    let store = TimelineStore::new(reducer, TimelineState::default());
    store.dispatch(Action::add_track(Track::new("t1")));

    let rejected = store.try_dispatch(Action::add_clip(Clip::new("c1", "t1", 0.0, 1.0)));
    assert!(rejected.is_err());

    store.dispatch(Action::add_clip(Clip::new("c1", "t1", 0.0, 6.0)));
    let state = store.dispatch(Action::move_clip("c1", 9.0, None));
    assert_eq!(state.clips["c1"].end, 11.0);
}
