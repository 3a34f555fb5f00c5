//! Timeline state and its initializer.

use std::collections::{BTreeMap, BTreeSet};

use castline_core::{meets_min_span, TimelineConfig};
use serde::{Deserialize, Serialize};

use crate::clip::Clip;
use crate::error::InvariantViolation;
use crate::id::{ClipId, TrackId};
use crate::query;
use crate::selection::Selection;
use crate::track::Track;

/// Zoom level of a fresh timeline.
pub const DEFAULT_ZOOM: f64 = 0.5;

/// Aggregate timeline state. Only the reducer produces new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineState {
    /// Track arena
    pub tracks: BTreeMap<TrackId, Track>,
    /// Clip arena
    pub clips: BTreeMap<ClipId, Clip>,
    /// Latest clip end, 0 when empty
    pub duration: f64,
    /// Zoom level in [0, 1]
    pub zoom: f64,
    /// Playhead position in seconds
    pub playhead: f64,
    /// Selected clips
    pub selection: Selection,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self {
            tracks: BTreeMap::new(),
            clips: BTreeMap::new(),
            duration: 0.0,
            zoom: DEFAULT_ZOOM,
            playhead: 0.0,
            selection: Selection::new(),
        }
    }
}

/// Partial timeline state for seeding or `Init`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelinePatch {
    pub tracks: Option<BTreeMap<TrackId, Track>>,
    pub clips: Option<BTreeMap<ClipId, Clip>>,
    pub duration: Option<f64>,
    pub zoom: Option<f64>,
    pub playhead: Option<f64>,
    pub selection: Option<Selection>,
}

impl TimelineState {
    /// Default state with `patch` merged on top. Nothing is validated.
    pub fn new(patch: TimelinePatch) -> Self {
        Self::default().merged(patch)
    }

    /// Shallow-merge the fields present in `patch`.
    pub fn merged(&self, patch: TimelinePatch) -> Self {
        let TimelinePatch {
            tracks,
            clips,
            duration,
            zoom,
            playhead,
            selection,
        } = patch;
        Self {
            tracks: tracks.unwrap_or_else(|| self.tracks.clone()),
            clips: clips.unwrap_or_else(|| self.clips.clone()),
            duration: duration.unwrap_or(self.duration),
            zoom: zoom.unwrap_or(self.zoom),
            playhead: playhead.unwrap_or(self.playhead),
            selection: selection.unwrap_or_else(|| self.selection.clone()),
        }
    }

    /// Look up a clip by id.
    pub fn clip(&self, id: &str) -> Option<&Clip> {
        self.clips.get(id)
    }

    /// Look up a track by id.
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.get(id)
    }

    /// Verify the structural invariants, returning the first violation.
    pub fn check_invariants(&self, config: &TimelineConfig) -> Result<(), InvariantViolation> {
        for clip in self.clips.values() {
            if !self.tracks.contains_key(&clip.track_id) {
                return Err(InvariantViolation::DanglingTrack {
                    clip: clip.id.clone(),
                    track: clip.track_id.clone(),
                });
            }
            if !meets_min_span(clip.span(), config.min_clip_span) {
                return Err(InvariantViolation::SpanBelowMinimum {
                    clip: clip.id.clone(),
                    span: clip.span(),
                });
            }
        }

        for track in self.tracks.values() {
            let mut listed = BTreeSet::new();
            for id in &track.clips {
                if !listed.insert(id) {
                    return Err(InvariantViolation::DuplicateListing {
                        track: track.id.clone(),
                        clip: id.clone(),
                    });
                }
            }
            let owned: BTreeSet<&ClipId> = self
                .clips
                .values()
                .filter(|clip| clip.track_id == track.id)
                .map(|clip| &clip.id)
                .collect();
            if listed != owned {
                return Err(InvariantViolation::TrackListMismatch(track.id.clone()));
            }
        }

        let expected = query::compute_duration(&self.clips);
        if self.duration != expected {
            return Err(InvariantViolation::DurationMismatch {
                expected,
                actual: self.duration,
            });
        }
        if !(0.0..=1.0).contains(&self.zoom) {
            return Err(InvariantViolation::ZoomOutOfRange(self.zoom));
        }
        if self.playhead.is_nan() || self.playhead < 0.0 {
            return Err(InvariantViolation::NegativePlayhead(self.playhead));
        }
        Ok(())
    }
}
