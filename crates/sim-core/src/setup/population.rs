//! Population Setup
//!
//! Spawns the founding creatures, evenly spaced around the perimeter.

use bevy_ecs::prelude::*;
use sim_events::{CreatureId, Position, Species};

use crate::components::arena::Arena;
use crate::components::creature::{Agent, CreatureIds, Forage};
use crate::config::PopulationConfig;

/// Spawn a single creature with a fresh handle
pub fn spawn_creature(world: &mut World, species: Species, position: Position) -> CreatureId {
    let id = world.resource_mut::<CreatureIds>().allocate();
    world.spawn((Agent::new(species, id, position), Forage::default()));
    id
}

/// Spawn the founding population: hawks, then doves, then grudges
pub fn spawn_population(world: &mut World, config: &PopulationConfig) -> Vec<CreatureId> {
    let total = config.total();
    let roster = [
        (Species::Hawk, config.hawks),
        (Species::Dove, config.doves),
        (Species::Grudge, config.grudges),
    ];

    let seats: Vec<Position> = {
        let arena = world.resource::<Arena>();
        (0..total).map(|i| arena.perimeter_seat(i, total)).collect()
    };

    let mut seats = seats.into_iter();
    let mut spawned = Vec::with_capacity(total);
    for (species, count) in roster {
        for position in seats.by_ref().take(count) {
            spawned.push(spawn_creature(world, species, position));
        }
    }

    tracing::info!(
        "Spawned {} creatures ({} hawks, {} doves, {} grudges)",
        spawned.len(),
        config.hawks,
        config.doves,
        config.grudges
    );
    spawned
}
