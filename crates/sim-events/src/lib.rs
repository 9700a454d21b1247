//! Shared data types and serialization for the hawk/dove simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod creature;
pub mod event;
pub mod snapshot;
pub mod species;

pub use species::Species;

pub use creature::{CreatureId, CreatureRef, Position};

// Re-export event types
pub use event::*;

// Re-export snapshot types
pub use snapshot::{
    generate_snapshot_id, Census, CreatureSnapshot, FoodPairSnapshot, WorldSnapshot,
};
