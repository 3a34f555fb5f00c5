//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CastlineError, Result};
use crate::MIN_CLIP_SPAN;

/// Tunables for the timeline reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Minimum clip span in seconds
    pub min_clip_span: f64,
    /// Multiplier applied to the split point when deriving the right-hand
    /// clip id (1000 = milliseconds)
    pub split_id_scale: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            min_clip_span: MIN_CLIP_SPAN,
            split_id_scale: 1000.0,
        }
    }
}

impl TimelineConfig {
    /// Parse a config from JSON bytes. Missing fields take their defaults.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let config: Self = serde_json::from_slice(data)
            .map_err(|e| CastlineError::Serialization(format!("Invalid timeline config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable by the reducer.
    pub fn validate(&self) -> Result<()> {
        if !self.min_clip_span.is_finite() || self.min_clip_span <= 0.0 {
            return Err(CastlineError::InvalidParameter(format!(
                "min_clip_span must be a positive number, got {}",
                self.min_clip_span
            )));
        }
        if !self.split_id_scale.is_finite() || self.split_id_scale < 1.0 {
            return Err(CastlineError::InvalidParameter(format!(
                "split_id_scale must be >= 1, got {}",
                self.split_id_scale
            )));
        }
        Ok(())
    }
}
