//! Payoff Matrix
//!
//! Food shares for every combination of effective plays at a food pair.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use sim_events::Species;

/// Which side of an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Food each side takes home from one encounter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub first_food: f32,
    pub second_food: f32,
    /// Side that played Hawk against a Dove play
    pub exploiter: Option<Side>,
}

impl Outcome {
    /// Side that was exploited, if any
    pub fn victim(&self) -> Option<Side> {
        self.exploiter.map(Side::other)
    }
}

/// Payoff matrix for a food pair holding two units of food
///
/// Any play other than `Hawk` is resolved as a Dove play, which is what a
/// Grudge shows by default.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoffMatrix {
    /// Creature alone at a food pair
    pub uncontested: f32,
    /// Each Dove when two Doves meet
    pub dove_dove: f32,
    /// Each Hawk when two Hawks fight
    pub hawk_hawk: f32,
    /// Hawk facing a Dove
    pub hawk_vs_dove: f32,
    /// Dove facing a Hawk
    pub dove_vs_hawk: f32,
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        Self {
            uncontested: 2.0,
            dove_dove: 1.0,
            hawk_hawk: 0.0,
            hawk_vs_dove: 1.5,
            dove_vs_hawk: 0.5,
        }
    }
}

impl PayoffMatrix {
    /// Resolve one encounter from the two effective plays.
    pub fn resolve(&self, first_play: Species, second_play: Species) -> Outcome {
        match (first_play.is_hawk(), second_play.is_hawk()) {
            (true, true) => Outcome {
                first_food: self.hawk_hawk,
                second_food: self.hawk_hawk,
                exploiter: None,
            },
            (false, false) => Outcome {
                first_food: self.dove_dove,
                second_food: self.dove_dove,
                exploiter: None,
            },
            (true, false) => Outcome {
                first_food: self.hawk_vs_dove,
                second_food: self.dove_vs_hawk,
                exploiter: Some(Side::First),
            },
            (false, true) => Outcome {
                first_food: self.dove_vs_hawk,
                second_food: self.hawk_vs_dove,
                exploiter: Some(Side::Second),
            },
        }
    }

    pub fn uncontested(&self) -> f32 {
        self.uncontested
    }

    /// All five entries, for validation
    pub(crate) fn entries(&self) -> [(&'static str, f32); 5] {
        [
            ("uncontested", self.uncontested),
            ("dove_dove", self.dove_dove),
            ("hawk_hawk", self.hawk_hawk),
            ("hawk_vs_dove", self.hawk_vs_dove),
            ("dove_vs_hawk", self.dove_vs_hawk),
        ]
    }
}
