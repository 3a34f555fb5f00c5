//! Track types for the timeline.

use serde::{Deserialize, Serialize};

use crate::id::{ClipId, TrackId};

/// A named, ordered container of clip references.
///
/// List order keeps split pieces adjacent; timeline position comes from the
/// clips' own `start`/`end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track ID
    pub id: TrackId,
    /// Track name
    #[serde(default)]
    pub name: String,
    /// Clip ids on this track
    #[serde(default)]
    pub clips: Vec<ClipId>,
}

impl Track {
    /// Create an empty track.
    pub fn new(id: impl Into<TrackId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            clips: Vec::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Index of a clip id in this track's list.
    pub fn position_of(&self, id: &ClipId) -> Option<usize> {
        self.clips.iter().position(|c| c == id)
    }

    /// Insert `right` directly after `left`. Appends when `left` is missing.
    pub fn insert_after(&mut self, left: &ClipId, right: ClipId) {
        match self.position_of(left) {
            Some(idx) => self.clips.insert(idx + 1, right),
            None => self.clips.push(right),
        }
    }

    /// Number of clips on this track.
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }
}
