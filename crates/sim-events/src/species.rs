//! Species
//!
//! The closed set of strategy kinds a creature can be born as.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy kind of a creature.
///
/// The same type carries two meanings: the *declared* species a creature is
/// born with, and the *effective play* it shows in one encounter. Only a
/// Grudge ever has the two differ; its effective play is always `Hawk` or
/// `Dove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Species {
    Hawk,
    Dove,
    Grudge,
}

impl Species {
    /// Returns all species variants.
    pub fn all() -> &'static [Species] {
        &[Species::Hawk, Species::Dove, Species::Grudge]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Hawk => "HAWK",
            Species::Dove => "DOVE",
            Species::Grudge => "GRUDGE",
        }
    }

    pub fn is_hawk(&self) -> bool {
        matches!(self, Species::Hawk)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
