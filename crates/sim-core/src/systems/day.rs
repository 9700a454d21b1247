//! Day Start System

use bevy_ecs::prelude::*;

use crate::components::creature::Forage;
use crate::SimulationState;

/// System: advance the day counter and send everyone back to the perimeter
pub fn begin_day(mut state: ResMut<SimulationState>, mut query: Query<&mut Forage>) {
    state.current_day += 1;
    for mut forage in query.iter_mut() {
        *forage = Forage::default();
    }
}
