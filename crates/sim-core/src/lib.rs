//! Hawk / Dove / Grudge Simulation Engine
//!
//! Creatures meet in pairs over food, play Hawk or Dove, and live or breed
//! on what they gather. Grudges play Dove until a Hawk exploits them, and
//! Hawk against that particular Hawk from then on.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use uuid::Uuid;

pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod payoff;
pub mod setup;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::SimConfig;
pub use error::{ConfigError, SimError};
pub use payoff::{Outcome, PayoffMatrix, Side};
pub use simulation::{DayReport, Simulation};

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);

/// Global simulation state resource
#[derive(Resource, Debug, Clone)]
pub struct SimulationState {
    /// Day currently being (or last) simulated; 0 before the first day
    pub current_day: u64,
    /// Identifies this run in snapshots
    pub run_id: Uuid,
}

impl SimulationState {
    pub fn new() -> Self {
        Self {
            current_day: 0,
            run_id: Uuid::new_v4(),
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}
