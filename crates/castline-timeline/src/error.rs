//! Timeline subsystem errors.

use castline_core::CastlineError;
use thiserror::Error;

use crate::id::{ClipId, TrackId};

/// Why the reducer left the state unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("unknown track: {0}")]
    UnknownTrack(TrackId),
    #[error("unknown clip: {0}")]
    UnknownClip(ClipId),
    #[error("clip already exists: {0}")]
    DuplicateClip(ClipId),
    #[error("cannot split clip {id} at {at}s: a piece would be shorter than the minimum span")]
    DegenerateSplit { id: ClipId, at: f64 },
    #[error("clip {id} span {span}s is below the minimum of {min}s")]
    SpanTooShort { id: ClipId, span: f64, min: f64 },
    #[error("clip {id} would start before zero ({start}s)")]
    NegativeStart { id: ClipId, start: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteTime { field: &'static str },
}

/// A broken structural invariant, reported by
/// [`TimelineState::check_invariants`](crate::TimelineState::check_invariants).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("clip {clip} references missing track {track}")]
    DanglingTrack { clip: ClipId, track: TrackId },
    #[error("track {0} clip list does not match the clips that reference it")]
    TrackListMismatch(TrackId),
    #[error("track {track} lists clip {clip} more than once")]
    DuplicateListing { track: TrackId, clip: ClipId },
    #[error("clip {clip} span {span}s is below the minimum")]
    SpanBelowMinimum { clip: ClipId, span: f64 },
    #[error("duration is {actual}s but the last clip ends at {expected}s")]
    DurationMismatch { expected: f64, actual: f64 },
    #[error("zoom {0} is outside [0, 1]")]
    ZoomOutOfRange(f64),
    #[error("playhead {0} is negative")]
    NegativePlayhead(f64),
}

impl From<EditError> for CastlineError {
    fn from(err: EditError) -> Self {
        CastlineError::Timeline(err.to_string())
    }
}

impl From<InvariantViolation> for CastlineError {
    fn from(err: InvariantViolation) -> Self {
        CastlineError::Timeline(err.to_string())
    }
}
