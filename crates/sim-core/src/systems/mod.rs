//! ECS Systems
//!
//! The day cycle: start of day, foraging, encounters, and fate.

pub mod day;
pub mod encounter;
pub mod fate;
pub mod foraging;

// Re-export commonly used systems
pub use day::begin_day;
pub use encounter::{play_encounter, resolve_encounters, EncounterResult};
pub use fate::{apply_fate, Fate, FateRules};
pub use foraging::assign_food_pairs;
