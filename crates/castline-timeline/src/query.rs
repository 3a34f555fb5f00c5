//! Read-only queries derived from timeline state.

use std::collections::BTreeMap;

use crate::clip::Clip;
use crate::id::ClipId;
use crate::state::TimelineState;

/// Latest clip end, or 0 when there are no clips.
pub fn compute_duration(clips: &BTreeMap<ClipId, Clip>) -> f64 {
    clips.values().fold(0.0, |acc, clip| acc.max(clip.end))
}

/// Resolve the selection to clips. Ids that no longer exist are skipped.
pub fn selected_clips(state: &TimelineState) -> Vec<&Clip> {
    state
        .selection
        .clip_ids()
        .iter()
        .filter_map(|id| state.clip(id.as_str()))
        .collect()
}

/// Clips of a track in list order. Empty for an unknown track.
pub fn track_clips<'a>(state: &'a TimelineState, track_id: &str) -> Vec<&'a Clip> {
    state
        .track(track_id)
        .map(|track| {
            track
                .clips
                .iter()
                .filter_map(|id| state.clip(id.as_str()))
                .collect()
        })
        .unwrap_or_default()
}

/// Clip on `track_id` whose `[start, end)` contains `time`.
pub fn clip_at<'a>(state: &'a TimelineState, track_id: &str, time: f64) -> Option<&'a Clip> {
    track_clips(state, track_id)
        .into_iter()
        .find(|clip| clip.time_span().contains(time))
}
