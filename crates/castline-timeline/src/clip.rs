//! Clip types for the timeline.

use castline_core::TimeSpan;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::{ClipId, TrackId};

/// Keys a patch's open map may not write into `extra`; they would shadow
/// typed fields on serialization.
const RESERVED_KEYS: [&str; 8] = [
    "id", "trackId", "start", "end", "inPoint", "outPoint", "name", "source",
];

/// A clip placed on exactly one track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    /// Unique clip ID
    pub id: ClipId,
    /// Owning track
    pub track_id: TrackId,
    /// Timeline start in seconds
    pub start: f64,
    /// Timeline end in seconds
    pub end: f64,
    /// Source in point (trim marker into the media)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_point: Option<f64>,
    /// Source out point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_point: Option<f64>,
    /// Clip name (displayed in UI)
    #[serde(default)]
    pub name: String,
    /// Reference to source media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Host-defined fields the engine carries but never interprets
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Clip {
    /// Create a clip spanning `[start, end)` on a track.
    pub fn new(id: impl Into<ClipId>, track_id: impl Into<TrackId>, start: f64, end: f64) -> Self {
        Self {
            id: id.into(),
            track_id: track_id.into(),
            start,
            end,
            in_point: None,
            out_point: None,
            name: String::new(),
            source: None,
            extra: Map::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the source media reference.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Placement on the timeline.
    #[inline]
    pub fn time_span(&self) -> TimeSpan {
        TimeSpan::new(self.start, self.end)
    }

    /// `end - start`.
    #[inline]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Shallow-merge a patch into this clip.
    pub fn apply_patch(&mut self, patch: &ClipPatch) {
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if patch.in_point.is_some() {
            self.in_point = patch.in_point;
        }
        if patch.out_point.is_some() {
            self.out_point = patch.out_point;
        }
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if patch.source.is_some() {
            self.source = patch.source.clone();
        }
        for (key, value) in &patch.extra {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                self.extra.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Partial clip used by the generic update.
///
/// Has no id or track field: a patch never reparents a clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClipPatch {
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub in_point: Option<f64>,
    pub out_point: Option<f64>,
    pub name: Option<String>,
    pub source: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClipPatch {
    /// True if the patch touches `start` or `end`.
    pub fn moves_clip(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Every time value carried by the patch.
    pub(crate) fn times(&self) -> impl Iterator<Item = f64> + '_ {
        [self.start, self.end, self.in_point, self.out_point]
            .into_iter()
            .flatten()
    }
}
