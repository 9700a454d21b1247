//! Arena Setup
//!
//! Lays out food pairs on concentric rings around the arena centre.

use sim_events::Position;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::components::arena::{Arena, FoodPair};
use crate::config::ArenaConfig;

/// Build the arena from its configuration
///
/// Pairs are spaced evenly around each ring, and the two items of a pair sit
/// `pair_offset` either side of the ring, perpendicular to it.
pub fn create_arena(config: &ArenaConfig) -> Arena {
    let center = Position::new(config.center_x, config.center_y);
    let mut pairs = Vec::with_capacity(config.total_pairs());

    for ring in &config.rings {
        for i in 0..ring.pairs {
            let angle = TAU / ring.pairs as f32 * i as f32;
            let pair_center = Position::on_circle(center, ring.radius, angle);
            pairs.push(FoodPair {
                index: pairs.len(),
                ring_radius: ring.radius,
                angle,
                items: [
                    Position::on_circle(pair_center, config.pair_offset, angle + FRAC_PI_2),
                    Position::on_circle(pair_center, config.pair_offset, angle - FRAC_PI_2),
                ],
            });
        }
    }

    Arena {
        center,
        perimeter_radius: config.perimeter_radius,
        pairs,
    }
}
