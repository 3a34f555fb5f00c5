//! Clip selection state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::id::ClipId;

/// Ordered set of selected clip ids.
///
/// Ids are not checked against the clip arena; stale ids are filtered out
/// when the selection is resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    clip_ids: SmallVec<[ClipId; 4]>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection, dropping repeated ids but keeping first-seen order.
    pub fn from_ids(ids: impl IntoIterator<Item = ClipId>) -> Self {
        let mut selection = Self::new();
        selection.replace(ids);
        selection
    }

    /// Replace the whole selection.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = ClipId>) {
        self.clip_ids.clear();
        for id in ids {
            if !self.clip_ids.contains(&id) {
                self.clip_ids.push(id);
            }
        }
    }

    /// Selected ids in selection order.
    pub fn clip_ids(&self) -> &[ClipId] {
        &self.clip_ids
    }

    /// Check if a clip is selected.
    pub fn contains(&self, id: &ClipId) -> bool {
        self.clip_ids.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.clip_ids.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.clip_ids.is_empty()
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.clip_ids.clear();
    }
}
