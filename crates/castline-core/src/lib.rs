//! Castline Core - Foundation types for the timeline engine
//!
//! This crate provides the types shared by every Castline crate:
//! - Time helpers (TimeSpan, clamping)
//! - Engine configuration
//! - The workspace error type

pub mod config;
pub mod error;
pub mod time;

pub use config::TimelineConfig;
pub use error::{CastlineError, Result};
pub use time::{
    clamp_non_negative, clamp_unit, earliest_end, latest_start, meets_min_span, TimeSpan,
};

/// Smallest span (end - start, in seconds) any clip may have.
pub const MIN_CLIP_SPAN: f64 = 0.05;

/// Slack allowed when comparing a span against the minimum, so that
/// `end - (end - min)` rounding below `min` still counts as valid.
pub const SPAN_TOLERANCE: f64 = 1e-9;
