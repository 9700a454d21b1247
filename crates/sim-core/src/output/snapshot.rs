//! Snapshot Output
//!
//! Captures the population, including every Grudge's memory, as a
//! serialisable [`WorldSnapshot`].

use bevy_ecs::prelude::*;
use sim_events::{generate_snapshot_id, Census, CreatureSnapshot, WorldSnapshot};
use std::fs;
use std::path::Path;

use crate::components::arena::Arena;
use crate::components::creature::{Agent, Creature};
use crate::error::SimError;
use crate::SimulationState;

/// Resource: numbers snapshots within a run
#[derive(Resource, Debug, Default)]
pub struct SnapshotGenerator {
    snapshot_count: u64,
}

impl SnapshotGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> String {
        self.snapshot_count += 1;
        generate_snapshot_id(self.snapshot_count)
    }

    pub fn snapshot_count(&self) -> u64 {
        self.snapshot_count
    }
}

/// Head count per declared species
pub fn take_census(world: &mut World) -> Census {
    let mut census = Census::default();
    let mut query = world.query::<&Agent>();
    for agent in query.iter(world) {
        census.record(agent.species());
    }
    census
}

/// Generate a snapshot of the current world, creatures ordered by handle
pub fn generate_snapshot(world: &mut World, reason: &str) -> WorldSnapshot {
    let mut query = world.query::<&Agent>();
    let mut creatures: Vec<CreatureSnapshot> = query
        .iter(world)
        .map(|agent| CreatureSnapshot {
            creature_id: agent.id(),
            species: agent.species(),
            position: agent.position(),
            hawks_memory: agent.hawks_memory(),
        })
        .collect();
    creatures.sort_by_key(|c| c.creature_id);

    let census = take_census(world);
    let food_pairs = world
        .get_resource::<Arena>()
        .map(|arena| arena.pairs.iter().map(|p| p.to_snapshot()).collect())
        .unwrap_or_default();
    let (day, run_id) = {
        let state = world.resource::<SimulationState>();
        (state.current_day, state.run_id)
    };
    let snapshot_id = world
        .get_resource_or_insert_with(SnapshotGenerator::new)
        .next_id();

    WorldSnapshot {
        snapshot_id,
        run_id,
        day,
        reason: reason.to_string(),
        census,
        creatures,
        food_pairs,
    }
}

/// Write a snapshot as pretty JSON, creating parent directories as needed
pub fn write_snapshot(path: impl AsRef<Path>, snapshot: &WorldSnapshot) -> Result<(), SimError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::creature::CreatureIds;
    use crate::config::ArenaConfig;
    use crate::setup::{create_arena, spawn_creature};
    use sim_events::{Position, Species};

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(SimulationState::new());
        world.insert_resource(CreatureIds::new());
        world.insert_resource(create_arena(&ArenaConfig::default()));
        world
    }

    #[test]
    fn test_snapshot_orders_creatures_by_handle() {
        let mut world = world();
        spawn_creature(&mut world, Species::Grudge, Position::default());
        spawn_creature(&mut world, Species::Hawk, Position::default());
        spawn_creature(&mut world, Species::Dove, Position::default());

        let snapshot = generate_snapshot(&mut world, "simulation_start");
        let ids: Vec<u64> = snapshot.creatures.iter().map(|c| c.creature_id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(snapshot.census.total(), 3);
        assert_eq!(snapshot.food_pairs.len(), 18);
        assert_eq!(snapshot.snapshot_id, "snap_000001");

        let again = generate_snapshot(&mut world, "periodic");
        assert_eq!(again.snapshot_id, "snap_000002");
        assert_eq!(again.run_id, snapshot.run_id);
    }

    #[test]
    fn test_write_snapshot_creates_directories() {
        let mut world = world();
        spawn_creature(&mut world, Species::Hawk, Position::new(3.0, 4.0));
        let snapshot = generate_snapshot(&mut world, "test");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("snapshot.json");
        write_snapshot(&path, &snapshot).unwrap();

        let parsed: WorldSnapshot = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.creatures.len(), 1);
        assert_eq!(parsed.creatures[0].position, Position::new(3.0, 4.0));
    }
}
