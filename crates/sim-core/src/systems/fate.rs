//! Fate System
//!
//! End-of-day survival and reproduction decided by the food each creature
//! gathered.

use bevy_ecs::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sim_events::{create_birth_event, create_death_event, DeathSubtype};

use crate::components::creature::{Agent, Creature, CreatureIds, Forage};
use crate::error::ConfigError;
use crate::events::DayEvents;
use crate::{SimRng, SimulationState};

/// What happens to one creature overnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fate {
    pub survives: bool,
    pub reproduces: bool,
}

/// Food thresholds, highest first
///
/// | food             | survives | reproduces              |
/// |------------------|----------|-------------------------|
/// | >= thrive        | yes      | yes                     |
/// | >= comfortable   | yes      | `reproduction_chance`   |
/// | >= survive       | yes      | no                      |
/// | >= desperate     | no       | `reproduction_chance`   |
/// | below            | no       | no                      |
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FateRules {
    pub thrive: f32,
    pub comfortable: f32,
    pub survive: f32,
    pub desperate: f32,
    pub reproduction_chance: f64,
}

impl Default for FateRules {
    fn default() -> Self {
        Self {
            thrive: 2.0,
            comfortable: 1.5,
            survive: 1.0,
            desperate: 0.5,
            reproduction_chance: 0.5,
        }
    }
}

impl FateRules {
    /// Decide a creature's fate. Only the two coin-flip bands draw from `rng`.
    pub fn decide(&self, food: f32, rng: &mut impl Rng) -> Fate {
        if food >= self.thrive {
            Fate { survives: true, reproduces: true }
        } else if food >= self.comfortable {
            Fate {
                survives: true,
                reproduces: rng.gen_bool(self.reproduction_chance),
            }
        } else if food >= self.survive {
            Fate { survives: true, reproduces: false }
        } else if food >= self.desperate {
            Fate {
                survives: false,
                reproduces: rng.gen_bool(self.reproduction_chance),
            }
        } else {
            Fate { survives: false, reproduces: false }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [self.thrive, self.comfortable, self.survive, self.desperate];
        if thresholds.iter().any(|t| !t.is_finite()) {
            return Err(ConfigError::Invalid("fate thresholds must be finite".into()));
        }
        if thresholds.windows(2).any(|w| w[0] < w[1]) {
            return Err(ConfigError::Invalid(format!(
                "fate thresholds must not increase: thrive={} comfortable={} survive={} desperate={}",
                self.thrive, self.comfortable, self.survive, self.desperate
            )));
        }
        if !(0.0..=1.0).contains(&self.reproduction_chance) {
            return Err(ConfigError::Invalid(format!(
                "reproduction chance must be within [0, 1], got {}",
                self.reproduction_chance
            )));
        }
        Ok(())
    }
}

/// System: kill the starving and spawn offspring of the well fed
///
/// Creatures are processed in handle order so offspring handles and RNG
/// draws are reproducible for a given seed.
pub fn apply_fate(
    mut commands: Commands,
    state: Res<SimulationState>,
    rules: Res<FateRules>,
    mut rng: ResMut<SimRng>,
    mut ids: ResMut<CreatureIds>,
    mut day_events: ResMut<DayEvents>,
    query: Query<(Entity, &Agent, &Forage)>,
) {
    let day = state.current_day;
    let mut creatures: Vec<_> = query.iter().collect();
    creatures.sort_by_key(|(_, agent, _)| agent.id());

    let mut births = 0usize;
    let mut deaths = 0usize;

    for (entity, agent, forage) in creatures {
        let fate = rules.decide(forage.food, &mut rng.0);

        if fate.reproduces {
            let child = agent.offspring(ids.allocate());
            let event_id = day_events.next_id();
            day_events.push(create_birth_event(
                event_id,
                day,
                child.to_ref(),
                agent.to_ref(),
                forage.food,
            ));
            commands.spawn((child, Forage::default()));
            births += 1;
        }

        if !fate.survives {
            let subtype = if forage.pair.is_none() {
                DeathSubtype::Unfed
            } else {
                DeathSubtype::Starved
            };
            let event_id = day_events.next_id();
            day_events.push(create_death_event(event_id, day, agent.to_ref(), subtype, forage.food));
            commands.entity(entity).despawn();
            deaths += 1;
        }
    }

    tracing::debug!("Day {}: {} births, {} deaths", day, births, deaths);
}
