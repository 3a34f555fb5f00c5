//! Timeline actions.
//!
//! Every change to a [`TimelineState`](crate::TimelineState) is expressed as
//! one `Action` value and applied by the reducer.

use serde::{Deserialize, Serialize};

use crate::clip::{Clip, ClipPatch};
use crate::id::ClipId;
use crate::state::TimelinePatch;
use crate::track::Track;

/// Which edge of a clip a resize drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Start,
    End,
}

/// A single state transition request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Shallow-merge a partial state. Not validated.
    Init { patch: TimelinePatch },
    /// Move the playhead; negative times clamp to zero.
    SetPlayhead { time: f64 },
    /// Set zoom, clamped into [0, 1].
    Zoom { level: f64 },
    /// Insert or overwrite a track.
    AddTrack { track: Track },
    /// Place a clip on an existing track.
    AddClip { clip: Clip },
    /// Reposition a clip. Without `end` the old end is kept (and extended
    /// if the new start would leave too short a span).
    MoveClip {
        id: ClipId,
        start: f64,
        #[serde(default)]
        end: Option<f64>,
    },
    /// Replace the selection.
    SelectClips { ids: Vec<ClipId> },
    /// Set source in/out markers. Absent markers are left alone.
    TrimClip {
        id: ClipId,
        #[serde(default)]
        in_point: Option<f64>,
        #[serde(default)]
        out_point: Option<f64>,
    },
    /// Cut a clip in two at `at` seconds.
    SplitClip { id: ClipId, at: f64 },
    /// Drag one edge of a clip to `time`.
    ResizeClip { id: ClipId, edge: Edge, time: f64 },
    /// Shallow-merge arbitrary clip fields.
    UpdateClip { id: ClipId, patch: ClipPatch },
}

impl Action {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::SetPlayhead { .. } => "set_playhead",
            Self::Zoom { .. } => "zoom",
            Self::AddTrack { .. } => "add_track",
            Self::AddClip { .. } => "add_clip",
            Self::MoveClip { .. } => "move_clip",
            Self::SelectClips { .. } => "select_clips",
            Self::TrimClip { .. } => "trim_clip",
            Self::SplitClip { .. } => "split_clip",
            Self::ResizeClip { .. } => "resize_clip",
            Self::UpdateClip { .. } => "update_clip",
        }
    }

    pub fn set_playhead(time: f64) -> Self {
        Self::SetPlayhead { time }
    }

    pub fn zoom(level: f64) -> Self {
        Self::Zoom { level }
    }

    pub fn add_track(track: Track) -> Self {
        Self::AddTrack { track }
    }

    pub fn add_clip(clip: Clip) -> Self {
        Self::AddClip { clip }
    }

    pub fn move_clip(id: impl Into<ClipId>, start: f64, end: Option<f64>) -> Self {
        Self::MoveClip {
            id: id.into(),
            start,
            end,
        }
    }

    pub fn select_clips<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ClipId>,
    {
        Self::SelectClips {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn trim_clip(id: impl Into<ClipId>, in_point: Option<f64>, out_point: Option<f64>) -> Self {
        Self::TrimClip {
            id: id.into(),
            in_point,
            out_point,
        }
    }

    pub fn split_clip(id: impl Into<ClipId>, at: f64) -> Self {
        Self::SplitClip { id: id.into(), at }
    }

    pub fn resize_clip(id: impl Into<ClipId>, edge: Edge, time: f64) -> Self {
        Self::ResizeClip {
            id: id.into(),
            edge,
            time,
        }
    }

    pub fn update_clip(id: impl Into<ClipId>, patch: ClipPatch) -> Self {
        Self::UpdateClip {
            id: id.into(),
            patch,
        }
    }
}
