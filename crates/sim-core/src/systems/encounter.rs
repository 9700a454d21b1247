//! Encounter System
//!
//! Resolves what happens at each food pair: effective plays, payoffs, and
//! grudges formed by exploited Grudges.

use bevy_ecs::prelude::*;
use sim_events::{create_encounter_event, create_grudge_event, create_uncontested_event, Species};

use crate::components::arena::FoodPairOccupancy;
use crate::components::creature::{Agent, Creature, Forage};
use crate::events::DayEvents;
use crate::payoff::{Outcome, PayoffMatrix, Side};
use crate::SimulationState;

/// Result of one two-creature encounter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncounterResult {
    pub first_play: Species,
    pub second_play: Species,
    pub outcome: Outcome,
    /// Side whose memory gained a new hawk
    pub grudge_formed: Option<Side>,
}

/// Play one encounter between two distinct creatures.
///
/// Each side is asked for its effective play against the other, the payoff
/// matrix settles the food, and an exploited side is told who exploited it.
pub fn play_encounter(first: &mut Agent, second: &mut Agent, payoffs: &PayoffMatrix) -> EncounterResult {
    let first_play = first.plays_against(&*second);
    let second_play = second.plays_against(&*first);
    let outcome = payoffs.resolve(first_play, second_play);

    let grudge_formed = match outcome.victim() {
        Some(Side::First) => first.remember_exploiter(&*second).then_some(Side::First),
        Some(Side::Second) => second.remember_exploiter(&*first).then_some(Side::Second),
        None => None,
    };

    EncounterResult {
        first_play,
        second_play,
        outcome,
        grudge_formed,
    }
}

/// System: resolve every occupied food pair
pub fn resolve_encounters(
    state: Res<SimulationState>,
    payoffs: Res<PayoffMatrix>,
    occupancy: Res<FoodPairOccupancy>,
    mut day_events: ResMut<DayEvents>,
    mut query: Query<(&mut Agent, &mut Forage)>,
) {
    let day = state.current_day;

    for occupants in occupancy.iter() {
        match *occupants {
            [] => {}
            [lone] => {
                let Ok((agent, mut forage)) = query.get_mut(lone) else {
                    continue;
                };
                forage.food = payoffs.uncontested();
                let event_id = day_events.next_id();
                day_events.push(create_uncontested_event(
                    event_id,
                    day,
                    agent.to_ref(),
                    agent.plays_alone(),
                    forage.food,
                ));
            }
            [first, second] => {
                let Ok([(mut first_agent, mut first_forage), (mut second_agent, mut second_forage)]) =
                    query.get_many_mut([first, second])
                else {
                    continue;
                };

                let result = play_encounter(&mut first_agent, &mut second_agent, &payoffs);
                first_forage.food = result.outcome.first_food;
                second_forage.food = result.outcome.second_food;

                tracing::debug!(
                    "Day {}: {} plays {} vs {} plays {} -> {} / {}",
                    day,
                    first_agent.id(),
                    result.first_play,
                    second_agent.id(),
                    result.second_play,
                    result.outcome.first_food,
                    result.outcome.second_food
                );

                let event_id = day_events.next_id();
                day_events.push(create_encounter_event(
                    event_id,
                    day,
                    first_agent.to_ref(),
                    result.first_play,
                    result.outcome.first_food,
                    second_agent.to_ref(),
                    result.second_play,
                    result.outcome.second_food,
                ));

                if let Some(side) = result.grudge_formed {
                    let (grudge, hawk) = match side {
                        Side::First => (&*first_agent, &*second_agent),
                        Side::Second => (&*second_agent, &*first_agent),
                    };
                    let memory_size = grudge.as_grudge().map_or(0, |g| g.hawks_memory().len());
                    tracing::debug!(
                        "Day {}: {} now holds a grudge against {} ({} remembered)",
                        day,
                        grudge.id(),
                        hawk.id(),
                        memory_size
                    );
                    let event_id = day_events.next_id();
                    day_events.push(create_grudge_event(
                        event_id,
                        day,
                        grudge.to_ref(),
                        hawk.to_ref(),
                        memory_size,
                    ));
                }
            }
            _ => {
                tracing::error!("Food pair holds {} creatures, skipping", occupants.len());
            }
        }
    }
}
