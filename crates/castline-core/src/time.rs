//! Time helpers for clip placement.
//!
//! Timeline positions are plain `f64` seconds. These helpers keep the
//! clamping rules in one place so every edit applies them the same way.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::SPAN_TOLERANCE;

/// Clamp a time to `>= 0`. NaN maps to zero.
#[inline]
pub fn clamp_non_negative(t: f64) -> f64 {
    if t > 0.0 {
        t
    } else {
        0.0
    }
}

/// Clamp a value into `[0, 1]`. NaN maps to zero.
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    if v >= 1.0 {
        1.0
    } else {
        clamp_non_negative(v)
    }
}

/// Check `span >= min`, allowing for float rounding.
#[inline]
pub fn meets_min_span(span: f64, min: f64) -> bool {
    span >= min - SPAN_TOLERANCE
}

/// Smallest end at or after `start + min` whose span passes
/// [`meets_min_span`].
///
/// Far from zero a single rounding step can exceed [`SPAN_TOLERANCE`], so the
/// sum is stepped upward one ULP at a time until the computed span is long
/// enough.
pub fn earliest_end(start: f64, min: f64) -> f64 {
    let mut end = start + min;
    while end.is_finite() && !meets_min_span(end - start, min) {
        end = next_up(end);
    }
    end
}

/// Largest start at or before `end - min` whose span passes
/// [`meets_min_span`]. Stops stepping once the start reaches zero.
pub fn latest_start(end: f64, min: f64) -> f64 {
    let mut start = end - min;
    while start > 0.0 && !meets_min_span(end - start, min) {
        start = next_down(start);
    }
    start
}

fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

/// A placement on the timeline with inclusive start and exclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSpan {
    /// Start time in seconds (inclusive)
    pub start: f64,
    /// End time in seconds (exclusive)
    pub end: f64,
}

impl TimeSpan {
    /// Create a span from start and end times.
    #[inline]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the span in seconds.
    #[inline]
    pub fn len(self) -> f64 {
        self.end - self.start
    }

    /// True when the span covers no time at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() <= 0.0
    }

    /// Check if a time is within this span.
    #[inline]
    pub fn contains(self, time: f64) -> bool {
        time >= self.start && time < self.end
    }

    /// Clamp a time into `[start, end]`.
    #[inline]
    pub fn clamp(self, time: f64) -> f64 {
        time.max(self.start).min(self.end)
    }

    /// Divide the span at `at`.
    ///
    /// Returns `None` when the cut would leave either side shorter than
    /// `min_len`, which includes cuts on or outside the boundaries.
    pub fn split_at(self, at: f64, min_len: f64) -> Option<(Self, Self)> {
        let at = self.clamp(at);
        let left = Self::new(self.start, at);
        let right = Self::new(at, self.end);
        if left.is_empty() || right.is_empty() {
            return None;
        }
        if !meets_min_span(left.len(), min_len) || !meets_min_span(right.len(), min_len) {
            return None;
        }
        Some((left, right))
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}s, {:.3}s)", self.start, self.end)
    }
}
