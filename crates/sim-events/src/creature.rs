//! Creature identity
//!
//! Stable handles, positions and by-value references to creatures.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Species;

/// Stable handle of a creature within one simulation run.
///
/// Handles are allocated monotonically and never reused, so a handle that
/// outlives its creature can never alias a newborn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(pub u64);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "creature_{:05}", self.0)
    }
}

/// Point in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `angle` radians on a circle around `center`.
    pub fn on_circle(center: Position, radius: f32, angle: f32) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    pub fn distance_to(&self, other: &Position) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A creature as it was at the moment an event happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureRef {
    pub creature_id: CreatureId,
    pub species: Species,
    pub position: Position,
}

impl CreatureRef {
    pub fn new(creature_id: CreatureId, species: Species, position: Position) -> Self {
        Self {
            creature_id,
            species,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_id_is_transparent() {
        assert_eq!(serde_json::to_string(&CreatureId(17)).unwrap(), "17");
        assert_eq!(serde_json::from_str::<CreatureId>("17").unwrap(), CreatureId(17));
    }

    #[test]
    fn test_creature_id_display() {
        assert_eq!(CreatureId(42).to_string(), "creature_00042");
    }

    #[test]
    fn test_position_on_circle() {
        let center = Position::new(300.0, 300.0);
        let p = Position::on_circle(center, 280.0, 0.0);
        assert!((p.x - 580.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);

        let q = Position::on_circle(center, 280.0, std::f32::consts::PI);
        assert!((q.distance_to(&center) - 280.0).abs() < 1e-3);
    }
}
