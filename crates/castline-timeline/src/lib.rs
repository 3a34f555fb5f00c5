//! Castline Timeline - Reducer-driven timeline engine
//!
//! Models the clip editor's timeline:
//! - Tracks holding ordered clip ids, clips held in an id-keyed arena
//! - A pure reducer applying move, trim, split, resize and update actions
//! - Read-only queries (duration, selection, clips per track)
//! - A single-owner store for hosts sharing one timeline

pub mod action;
pub mod clip;
pub mod error;
pub mod id;
pub mod query;
pub mod reducer;
pub mod selection;
pub mod state;
pub mod store;
pub mod track;

pub use action::{Action, Edge};
pub use clip::{Clip, ClipPatch};
pub use error::{EditError, InvariantViolation};
pub use id::{ClipId, TrackId};
pub use reducer::{reduce, Reducer};
pub use selection::Selection;
pub use state::{TimelinePatch, TimelineState};
pub use store::{StoreEvent, TimelineStore};
pub use track::Track;
