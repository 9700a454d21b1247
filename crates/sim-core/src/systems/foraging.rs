//! Foraging System
//!
//! Sends every creature to a random food pair with room left.

use bevy_ecs::prelude::*;
use rand::seq::SliceRandom;

use crate::components::arena::{Arena, FoodPairOccupancy};
use crate::components::creature::{Agent, Creature, Forage};
use crate::{SimRng, SimulationState};

/// System: assign creatures to food pairs
///
/// Creatures are sorted by handle before the seeded shuffle so the order
/// does not depend on ECS storage layout. Each creature picks uniformly among
/// the pairs that still have room. Once every pair is full the rest go
/// without food for the day.
pub fn assign_food_pairs(
    state: Res<SimulationState>,
    arena: Res<Arena>,
    mut rng: ResMut<SimRng>,
    mut occupancy: ResMut<FoodPairOccupancy>,
    mut query: Query<(Entity, &Agent, &mut Forage)>,
) {
    occupancy.reset(arena.pairs.len());

    let mut creatures: Vec<_> = query
        .iter()
        .map(|(entity, agent, _)| (agent.id(), entity))
        .collect();
    creatures.sort_unstable_by_key(|(id, _)| *id);
    creatures.shuffle(&mut rng.0);

    let mut unfed = 0usize;
    for (_, entity) in creatures {
        let open = occupancy.open_pairs();
        let Some(&pair) = open.choose(&mut rng.0) else {
            unfed += 1;
            continue;
        };
        occupancy.occupy(pair, entity);
        if let Ok((_, _, mut forage)) = query.get_mut(entity) {
            forage.pair = Some(pair);
        }
    }

    if unfed > 0 {
        tracing::warn!(
            "Day {}: not enough food pairs, {} creatures go unfed (capacity {})",
            state.current_day,
            unfed,
            arena.capacity()
        );
    }
}
