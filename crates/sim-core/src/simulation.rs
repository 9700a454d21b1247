//! Simulation Driver
//!
//! Owns the ECS world and the day schedule.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sim_events::{Census, CreatureId, Event, EventType, Position, Species, WorldSnapshot};

use crate::components::arena::{Arena, FoodPairOccupancy};
use crate::components::creature::{Agent, Creature, CreatureIds};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::events::DayEvents;
use crate::output::{generate_snapshot, take_census, SnapshotGenerator};
use crate::setup::{create_arena, spawn_creature, spawn_population};
use crate::systems::{apply_fate, assign_food_pairs, begin_day, resolve_encounters};
use crate::{SimRng, SimulationState};

/// What happened on one simulated day
#[derive(Debug, Clone)]
pub struct DayReport {
    pub day: u64,
    /// Population after births and deaths
    pub census: Census,
    pub events: Vec<Event>,
}

impl DayReport {
    pub fn count(&self, event_type: EventType) -> usize {
        self.events.iter().filter(|e| e.event_type == event_type).count()
    }

    pub fn is_extinct(&self) -> bool {
        self.census.total() == 0
    }
}

/// A single hawk/dove/grudge run
pub struct Simulation {
    world: World,
    schedule: Schedule,
    config: SimConfig,
}

impl Simulation {
    /// Validate the config, build the arena, and spawn the founders.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let mut world = World::new();
        world.insert_resource(SimulationState::new());
        world.insert_resource(SimRng(SmallRng::seed_from_u64(config.simulation.seed)));
        world.insert_resource(create_arena(&config.arena));
        world.insert_resource(config.payoffs.clone());
        world.insert_resource(config.fate.clone());
        world.insert_resource(CreatureIds::new());
        world.insert_resource(FoodPairOccupancy::new());
        world.insert_resource(DayEvents::new());
        world.insert_resource(SnapshotGenerator::new());

        spawn_population(&mut world, &config.population);

        let capacity = world.resource::<Arena>().capacity();
        if config.population.total() > capacity {
            tracing::warn!(
                "Founding population of {} exceeds food pair capacity {}",
                config.population.total(),
                capacity
            );
        }

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.add_systems((begin_day, assign_food_pairs, resolve_encounters, apply_fate).chain());

        Ok(Self {
            world,
            schedule,
            config,
        })
    }

    /// Add a creature outside the founding roster
    pub fn spawn(&mut self, species: Species, position: Position) -> CreatureId {
        spawn_creature(&mut self.world, species, position)
    }

    /// Run one day and collect its events
    pub fn step_day(&mut self) -> DayReport {
        self.schedule.run(&mut self.world);

        let day = self.current_day();
        let events = self.world.resource_mut::<DayEvents>().drain();
        let census = self.census();

        tracing::info!(
            "Day {:>4}: {} hawks, {} doves, {} grudges ({} events)",
            day,
            census.hawks,
            census.doves,
            census.grudges,
            events.len()
        );

        DayReport { day, census, events }
    }

    /// Run up to `days` days, stopping early if everyone dies
    pub fn run(&mut self, days: u64) -> Vec<DayReport> {
        let mut reports = Vec::new();
        for _ in 0..days {
            let report = self.step_day();
            let extinct = report.is_extinct();
            reports.push(report);
            if extinct {
                tracing::warn!("Population extinct on day {}", self.current_day());
                break;
            }
        }
        reports
    }

    /// Run for the number of days in the config
    pub fn run_configured(&mut self) -> Vec<DayReport> {
        self.run(self.config.simulation.days)
    }

    pub fn census(&mut self) -> Census {
        take_census(&mut self.world)
    }

    pub fn is_extinct(&mut self) -> bool {
        self.census().total() == 0
    }

    pub fn current_day(&self) -> u64 {
        self.world.resource::<SimulationState>().current_day
    }

    pub fn snapshot(&mut self, reason: &str) -> WorldSnapshot {
        generate_snapshot(&mut self.world, reason)
    }

    /// Copy of a living creature
    pub fn creature(&mut self, id: CreatureId) -> Option<Agent> {
        let mut query = self.world.query::<&Agent>();
        query.iter(&self.world).find(|a| a.id() == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PopulationConfig;

    fn config(hawks: usize, doves: usize, grudges: usize) -> SimConfig {
        let mut config = SimConfig::default();
        config.population = PopulationConfig {
            hawks,
            doves,
            grudges,
        };
        config
    }

    #[test]
    fn test_new_spawns_founders() {
        let mut sim = Simulation::new(config(2, 3, 4)).unwrap();
        let census = sim.census();
        assert_eq!(census, Census { hawks: 2, doves: 3, grudges: 4 });
        assert_eq!(sim.current_day(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut bad = SimConfig::default();
        bad.fate.reproduction_chance = 2.0;
        assert!(matches!(Simulation::new(bad), Err(SimError::Config(_))));
    }

    #[test]
    fn test_step_advances_day() {
        let mut sim = Simulation::new(config(1, 1, 1)).unwrap();
        let report = sim.step_day();
        assert_eq!(report.day, 1);
        assert_eq!(sim.current_day(), 1);
        assert!(report.count(EventType::Encounter) >= 1);
    }

    #[test]
    fn test_lone_dove_thrives() {
        // One creature, many pairs: it always eats alone and always breeds
        let mut sim = Simulation::new(config(0, 1, 0)).unwrap();
        let report = sim.step_day();
        assert_eq!(report.count(EventType::Birth), 1);
        assert_eq!(report.count(EventType::Death), 0);
        assert_eq!(report.census.doves, 2);
    }

    #[test]
    fn test_empty_population_is_extinct() {
        let mut sim = Simulation::new(config(0, 0, 0)).unwrap();
        assert!(sim.is_extinct());
        let reports = sim.run(10);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].is_extinct());
    }

    #[test]
    fn test_creature_lookup() {
        let mut sim = Simulation::new(config(0, 0, 0)).unwrap();
        let id = sim.spawn(Species::Grudge, Position::new(1.0, 1.0));
        let agent = sim.creature(id).unwrap();
        assert_eq!(agent.species(), Species::Grudge);
        assert!(sim.creature(CreatureId(999)).is_none());
    }
}
