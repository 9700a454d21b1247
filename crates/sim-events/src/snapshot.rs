//! Snapshot Types
//!
//! Serialization structs for world snapshots.
//!
//! Snapshots capture the population at a point in time, including every
//! Grudge's memory of the hawks that exploited it. They are written for
//! diagnostics and never read back by the simulation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CreatureId, Position, Species};

/// Generates a snapshot ID with the given sequence number.
pub fn generate_snapshot_id(sequence: u64) -> String {
    format!("snap_{:06}", sequence)
}

/// Head count per declared species
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub hawks: usize,
    pub doves: usize,
    pub grudges: usize,
}

impl Census {
    pub fn record(&mut self, species: Species) {
        match species {
            Species::Hawk => self.hawks += 1,
            Species::Dove => self.doves += 1,
            Species::Grudge => self.grudges += 1,
        }
    }

    pub fn count(&self, species: Species) -> usize {
        match species {
            Species::Hawk => self.hawks,
            Species::Dove => self.doves,
            Species::Grudge => self.grudges,
        }
    }

    pub fn total(&self) -> usize {
        self.hawks + self.doves + self.grudges
    }
}

/// One creature in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureSnapshot {
    pub creature_id: CreatureId,
    pub species: Species,
    pub position: Position,
    /// Hawks this creature holds a grudge against (Grudge only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hawks_memory: Vec<CreatureId>,
}

/// One food pair of the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPairSnapshot {
    pub index: usize,
    pub ring_radius: f32,
    pub position: Position,
}

/// Complete world snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub snapshot_id: String,
    /// Identifies the run this snapshot came from
    pub run_id: Uuid,
    pub day: u64,
    /// Why the snapshot was taken (e.g. "simulation_start")
    pub reason: String,
    pub census: Census,
    pub creatures: Vec<CreatureSnapshot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub food_pairs: Vec<FoodPairSnapshot>,
}

impl WorldSnapshot {
    pub fn creature(&self, creature_id: CreatureId) -> Option<&CreatureSnapshot> {
        self.creatures.iter().find(|c| c.creature_id == creature_id)
    }

    /// Total number of grudges held across the population
    pub fn total_grudges_held(&self) -> usize {
        self.creatures.iter().map(|c| c.hawks_memory.len()).sum()
    }
}
