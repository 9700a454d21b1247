//! Arena Components
//!
//! The circular arena: creatures rest on the perimeter and walk in to
//! food pairs laid out on concentric rings.

use bevy_ecs::prelude::*;
use sim_events::{FoodPairSnapshot, Position};

/// Most creatures one food pair can feed
pub const PAIR_CAPACITY: usize = 2;

/// Two food items side by side on a ring
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPair {
    pub index: usize,
    pub ring_radius: f32,
    /// Angle of the pair's centre around the arena centre
    pub angle: f32,
    pub items: [Position; 2],
}

impl FoodPair {
    /// Midpoint between the two food items
    pub fn center(&self) -> Position {
        Position::new(
            (self.items[0].x + self.items[1].x) / 2.0,
            (self.items[0].y + self.items[1].y) / 2.0,
        )
    }

    pub fn to_snapshot(&self) -> FoodPairSnapshot {
        FoodPairSnapshot {
            index: self.index,
            ring_radius: self.ring_radius,
            position: self.center(),
        }
    }
}

/// Resource: arena geometry
#[derive(Resource, Debug, Clone)]
pub struct Arena {
    pub center: Position,
    pub perimeter_radius: f32,
    pub pairs: Vec<FoodPair>,
}

impl Arena {
    /// Number of creatures the food pairs can feed in one day
    pub fn capacity(&self) -> usize {
        self.pairs.len() * PAIR_CAPACITY
    }

    /// Resting position `index` of `total` equidistant seats on the perimeter
    pub fn perimeter_seat(&self, index: usize, total: usize) -> Position {
        let angle = if total == 0 {
            0.0
        } else {
            std::f32::consts::TAU * index as f32 / total as f32
        };
        Position::on_circle(self.center, self.perimeter_radius, angle)
    }
}

/// Resource: which creatures went to which food pair today, in arrival order
#[derive(Resource, Debug, Default)]
pub struct FoodPairOccupancy {
    occupants: Vec<Vec<Entity>>,
}

impl FoodPairOccupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty every pair, resizing to `pair_count` pairs
    pub fn reset(&mut self, pair_count: usize) {
        self.occupants.clear();
        self.occupants.resize_with(pair_count, Vec::new);
    }

    /// Indices of pairs with room for another creature
    pub fn open_pairs(&self) -> Vec<usize> {
        self.occupants
            .iter()
            .enumerate()
            .filter(|(_, occupants)| occupants.len() < PAIR_CAPACITY)
            .map(|(index, _)| index)
            .collect()
    }

    /// Place `entity` at `pair`; false if the pair is full or unknown
    pub fn occupy(&mut self, pair: usize, entity: Entity) -> bool {
        match self.occupants.get_mut(pair) {
            Some(occupants) if occupants.len() < PAIR_CAPACITY => {
                occupants.push(entity);
                true
            }
            _ => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Entity]> {
        self.occupants.iter().map(Vec::as_slice)
    }
}
