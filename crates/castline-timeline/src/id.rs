//! Clip and track identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Unique clip identifier.
    ClipId
);

string_id!(
    /// Unique track identifier.
    TrackId
);

impl ClipId {
    /// Deterministic id for the right-hand piece of a split at `at` seconds.
    ///
    /// `scale` converts seconds to the integer unit embedded in the id.
    pub fn split_child(&self, at: f64, scale: f64) -> Self {
        let mark = (at * scale).round() as i64;
        Self(format!("{}-split-{}", self.0, mark))
    }

    /// Like [`ClipId::split_child`], but appends `-2`, `-3`, ... until
    /// `is_taken` reports the id as free.
    pub fn unique_split_child(&self, at: f64, scale: f64, is_taken: impl Fn(&ClipId) -> bool) -> Self {
        let base = self.split_child(at, scale);
        if !is_taken(&base) {
            return base;
        }
        let mut n = 2u32;
        loop {
            let candidate = Self(format!("{}-{}", base.0, n));
            if !is_taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}
