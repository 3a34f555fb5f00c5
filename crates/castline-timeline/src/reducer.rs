//! The timeline reducer.
//!
//! `(state, action) -> state`. The input state is never mutated: each
//! accepted action produces a fresh value, and each rejected one yields a
//! clone of the input. Rejections are logged, never raised.

use castline_core::{
    clamp_non_negative, clamp_unit, earliest_end, latest_start, meets_min_span, TimelineConfig,
};
use tracing::{debug, trace};

use crate::action::{Action, Edge};
use crate::clip::{Clip, ClipPatch};
use crate::error::EditError;
use crate::id::ClipId;
use crate::query::compute_duration;
use crate::state::TimelineState;
use crate::track::Track;

type EditResult = Result<TimelineState, EditError>;

/// Applies actions to timeline state under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Reducer {
    config: TimelineConfig,
}

impl Reducer {
    /// Create a reducer that enforces `config`.
    pub fn new(config: TimelineConfig) -> Self {
        Self { config }
    }

    /// Configuration this reducer enforces.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Apply `action`, falling back to an unchanged copy of `state` when the
    /// action is rejected.
    pub fn reduce(&self, state: &TimelineState, action: Action) -> TimelineState {
        let kind = action.kind();
        match self.try_reduce(state, action) {
            Ok(next) => {
                trace!(action = kind, duration = next.duration, "action applied");
                next
            }
            Err(err) => {
                debug!(action = kind, %err, "action rejected, state unchanged");
                state.clone()
            }
        }
    }

    /// Apply `action`, reporting why it was rejected.
    pub fn try_reduce(&self, state: &TimelineState, action: Action) -> EditResult {
        match action {
            Action::Init { patch } => Ok(state.merged(patch)),
            Action::SetPlayhead { time } => {
                ensure_finite("playhead", time)?;
                Ok(TimelineState {
                    playhead: clamp_non_negative(time),
                    ..state.clone()
                })
            }
            Action::Zoom { level } => {
                if level.is_nan() {
                    return Err(EditError::NonFiniteTime { field: "zoom" });
                }
                Ok(TimelineState {
                    zoom: clamp_unit(level),
                    ..state.clone()
                })
            }
            Action::AddTrack { track } => Ok(self.add_track(state, track)),
            Action::AddClip { clip } => self.add_clip(state, clip),
            Action::MoveClip { id, start, end } => self.move_clip(state, &id, start, end),
            Action::SelectClips { ids } => {
                let mut next = state.clone();
                next.selection.replace(ids);
                Ok(next)
            }
            Action::TrimClip {
                id,
                in_point,
                out_point,
            } => self.trim_clip(state, &id, in_point, out_point),
            Action::SplitClip { id, at } => self.split_clip(state, &id, at),
            Action::ResizeClip { id, edge, time } => self.resize_clip(state, &id, edge, time),
            Action::UpdateClip { id, patch } => self.update_clip(state, &id, &patch),
        }
    }

    fn add_track(&self, state: &TimelineState, mut track: Track) -> TimelineState {
        // Membership is owned by the clips; an overwrite keeps the existing list.
        track.clips = state
            .tracks
            .get(&track.id)
            .map(|existing| existing.clips.clone())
            .unwrap_or_default();
        let mut next = state.clone();
        next.tracks.insert(track.id.clone(), track);
        next
    }

    fn add_clip(&self, state: &TimelineState, clip: Clip) -> EditResult {
        if !state.tracks.contains_key(&clip.track_id) {
            return Err(EditError::UnknownTrack(clip.track_id));
        }
        if state.clips.contains_key(&clip.id) {
            return Err(EditError::DuplicateClip(clip.id));
        }
        ensure_finite("start", clip.start)?;
        ensure_finite("end", clip.end)?;
        ensure_placed(&clip)?;
        self.ensure_span(&clip)?;

        let mut next = state.clone();
        next.duration = next.duration.max(clip.end);
        if let Some(track) = next.tracks.get_mut(&clip.track_id) {
            track.clips.push(clip.id.clone());
        }
        next.clips.insert(clip.id.clone(), clip);
        Ok(next)
    }

    fn move_clip(&self, state: &TimelineState, id: &ClipId, start: f64, end: Option<f64>) -> EditResult {
        ensure_finite("start", start)?;
        if let Some(end) = end {
            ensure_finite("end", end)?;
        }
        let min = self.config.min_clip_span;
        self.edit_clip(state, id, |clip| {
            clip.start = clamp_non_negative(start);
            clip.end = end.unwrap_or(clip.end).max(earliest_end(clip.start, min));
            Ok(())
        })
    }

    fn trim_clip(
        &self,
        state: &TimelineState,
        id: &ClipId,
        in_point: Option<f64>,
        out_point: Option<f64>,
    ) -> EditResult {
        if let Some(t) = in_point {
            ensure_finite("in_point", t)?;
        }
        if let Some(t) = out_point {
            ensure_finite("out_point", t)?;
        }
        self.edit_clip(state, id, |clip| {
            if in_point.is_some() {
                clip.in_point = in_point;
            }
            if out_point.is_some() {
                clip.out_point = out_point;
            }
            Ok(())
        })
    }

    fn split_clip(&self, state: &TimelineState, id: &ClipId, at: f64) -> EditResult {
        ensure_finite("at", at)?;
        let original = state
            .clips
            .get(id)
            .ok_or_else(|| EditError::UnknownClip(id.clone()))?;
        let (left_span, right_span) = original
            .time_span()
            .split_at(at, self.config.min_clip_span)
            .ok_or_else(|| EditError::DegenerateSplit { id: id.clone(), at })?;

        let right_id = id.unique_split_child(right_span.start, self.config.split_id_scale, |c| {
            state.clips.contains_key(c)
        });
        let mut left = original.clone();
        left.end = left_span.end;
        let mut right = original.clone();
        right.id = right_id.clone();
        right.start = right_span.start;

        let mut next = state.clone();
        if let Some(track) = next.tracks.get_mut(&original.track_id) {
            track.insert_after(id, right_id.clone());
        }
        next.clips.insert(id.clone(), left);
        next.clips.insert(right_id, right);
        next.duration = compute_duration(&next.clips);
        Ok(next)
    }

    fn resize_clip(&self, state: &TimelineState, id: &ClipId, edge: Edge, time: f64) -> EditResult {
        ensure_finite("time", time)?;
        let min = self.config.min_clip_span;
        self.edit_clip(state, id, |clip| {
            match edge {
                Edge::Start => clip.start = clamp_non_negative(time.min(latest_start(clip.end, min))),
                Edge::End => clip.end = time.max(earliest_end(clip.start, min)),
            }
            Ok(())
        })
    }

    fn update_clip(&self, state: &TimelineState, id: &ClipId, patch: &ClipPatch) -> EditResult {
        for t in patch.times() {
            ensure_finite("patch", t)?;
        }
        self.edit_clip(state, id, |clip| {
            clip.apply_patch(patch);
            if patch.moves_clip() {
                ensure_placed(clip)?;
                self.ensure_span(clip)?;
            }
            Ok(())
        })
    }

    /// Clone `state`, run `edit` on one clip, then recompute duration.
    fn edit_clip<F>(&self, state: &TimelineState, id: &ClipId, edit: F) -> EditResult
    where
        F: FnOnce(&mut Clip) -> Result<(), EditError>,
    {
        if !state.clips.contains_key(id) {
            return Err(EditError::UnknownClip(id.clone()));
        }
        let mut next = state.clone();
        if let Some(clip) = next.clips.get_mut(id) {
            edit(clip)?;
        }
        next.duration = compute_duration(&next.clips);
        Ok(next)
    }

    fn ensure_span(&self, clip: &Clip) -> Result<(), EditError> {
        let min = self.config.min_clip_span;
        if !meets_min_span(clip.span(), min) {
            return Err(EditError::SpanTooShort {
                id: clip.id.clone(),
                span: clip.span(),
                min,
            });
        }
        Ok(())
    }
}

/// Clips never start before zero, so `end - min_clip_span` is a usable
/// upper bound for a start-edge resize.
fn ensure_placed(clip: &Clip) -> Result<(), EditError> {
    if clip.start < 0.0 {
        return Err(EditError::NegativeStart {
            id: clip.id.clone(),
            start: clip.start,
        });
    }
    Ok(())
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), EditError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EditError::NonFiniteTime { field })
    }
}

/// Apply `action` with the default configuration.
pub fn reduce(state: &TimelineState, action: Action) -> TimelineState {
    Reducer::default().reduce(state, action)
}
