//! Property tests: structural invariants under arbitrary edit sequences.

use castline_core::{TimelineConfig, MIN_CLIP_SPAN};
use castline_timeline::{query, reduce, Action, Clip, ClipPatch, Edge, TimelineState, Track};
use proptest::prelude::*;

const TRACKS: [&str; 3] = ["t0", "t1", "t2"];
const CLIPS: [&str; 6] = ["c0", "c1", "c2", "c3", "c4", "c5"];

fn time() -> impl Strategy<Value = f64> {
    -20.0f64..200.0
}

fn clip_id() -> impl Strategy<Value = String> {
    prop::sample::select(CLIPS.to_vec()).prop_map(str::to_owned)
}

fn track_id() -> impl Strategy<Value = String> {
    prop::sample::select(TRACKS.to_vec()).prop_map(str::to_owned)
}

fn edge() -> impl Strategy<Value = Edge> {
    prop_oneof![Just(Edge::Start), Just(Edge::End)]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        track_id().prop_map(|id| Action::add_track(Track::new(id))),
        (clip_id(), track_id(), 0.0f64..100.0, 0.0f64..50.0).prop_map(|(id, track, start, len)| {
            Action::add_clip(Clip::new(id, track, start, start + len))
        }),
        (clip_id(), time(), prop::option::of(time()))
            .prop_map(|(id, start, end)| Action::move_clip(id, start, end)),
        (clip_id(), time()).prop_map(|(id, at)| Action::split_clip(id, at)),
        (clip_id(), edge(), time()).prop_map(|(id, edge, t)| Action::resize_clip(id, edge, t)),
        (clip_id(), prop::option::of(time()), prop::option::of(time()))
            .prop_map(|(id, i, o)| Action::trim_clip(id, i, o)),
        (clip_id(), prop::option::of(time()), prop::option::of(time())).prop_map(
            |(id, start, end)| Action::update_clip(
                id,
                ClipPatch {
                    start,
                    end,
                    ..Default::default()
                }
            )
        ),
        prop::collection::vec(clip_id(), 0..4).prop_map(|ids| Action::select_clips(ids)),
        time().prop_map(Action::zoom),
        time().prop_map(Action::set_playhead),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_after_every_action(actions in prop::collection::vec(action(), 1..60)) {
        let config = TimelineConfig::default();
        let mut state = TimelineState::default();
        for action in actions {
            let next = reduce(&state, action);
            prop_assert!(next.check_invariants(&config).is_ok(), "{:?}", next.check_invariants(&config));
            state = next;
        }
    }

    #[test]
    fn resize_never_breaks_min_span(
        start in 0.0f64..100.0,
        len in MIN_CLIP_SPAN..50.0,
        edge in edge(),
        t in time(),
    ) {
        let state = reduce(&TimelineState::default(), Action::add_track(Track::new("t1")));
        let state = reduce(&state, Action::add_clip(Clip::new("c1", "t1", start, start + len)));
        let state = reduce(&state, Action::resize_clip("c1", edge, t));
        let clip = &state.clips["c1"];
        prop_assert!(clip.span() >= MIN_CLIP_SPAN - 1e-9);
        prop_assert!(clip.start >= 0.0);
    }

    #[test]
    fn duration_never_below_latest_end(actions in prop::collection::vec(action(), 1..40)) {
        let mut state = TimelineState::default();
        for action in actions {
            state = reduce(&state, action);
            let latest = state.clips.values().map(|c| c.end).fold(0.0, f64::max);
            prop_assert!(state.duration >= latest);
            prop_assert_eq!(state.duration, query::compute_duration(&state.clips));
        }
    }

    #[test]
    fn split_inside_clip_produces_contiguous_pieces(len in 1.0f64..100.0, frac in 0.06f64..0.94) {
        let at = len * frac;
        let state = reduce(&TimelineState::default(), Action::add_track(Track::new("t1")));
        let state = reduce(&state, Action::add_clip(Clip::new("c1", "t1", 0.0, len)));
        let state = reduce(&state, Action::split_clip("c1", at));

        let order = &state.tracks["t1"].clips;
        prop_assert_eq!(order.len(), 2);
        let left = &state.clips[&order[0]];
        let right = &state.clips[&order[1]];
        prop_assert_eq!(left.id.as_str(), "c1");
        prop_assert_eq!(left.end, right.start);
        prop_assert_eq!(left.start, 0.0);
        prop_assert_eq!(right.end, len);
    }

    #[test]
    fn unknown_clip_actions_are_noops(start in time(), at in time()) {
        let state = reduce(&TimelineState::default(), Action::add_track(Track::new("t1")));
        let state = reduce(&state, Action::add_clip(Clip::new("c1", "t1", 0.0, 10.0)));
        prop_assert_eq!(&reduce(&state, Action::move_clip("ghost", start, None)), &state);
        prop_assert_eq!(&reduce(&state, Action::split_clip("ghost", at)), &state);
    }
}
