//! Events
//!
//! Per-day event collection and append-only JSONL logging.

pub mod logger;

pub use logger::EventLogger;

use bevy_ecs::prelude::*;
use sim_events::{generate_event_id, Event};

/// Resource: events recorded during the current day
///
/// Event IDs keep counting across days so they are unique for the run.
#[derive(Resource, Debug, Default)]
pub struct DayEvents {
    events: Vec<Event>,
    next_sequence: u64,
}

impl DayEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next event ID
    pub fn next_id(&mut self) -> String {
        self.next_sequence += 1;
        generate_event_id(self.next_sequence)
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_events::{create_death_event, CreatureId, CreatureRef, DeathSubtype, Position, Species};

    #[test]
    fn test_ids_continue_after_drain() {
        let mut day_events = DayEvents::new();
        assert_eq!(day_events.next_id(), "evt_00000001");

        let creature = CreatureRef::new(CreatureId(1), Species::Dove, Position::default());
        let id = day_events.next_id();
        day_events.push(create_death_event(id, 1, creature, DeathSubtype::Unfed, 0.0));
        assert_eq!(day_events.len(), 1);

        let drained = day_events.drain();
        assert_eq!(drained[0].event_id, "evt_00000002");
        assert!(day_events.is_empty());
        assert_eq!(day_events.next_id(), "evt_00000003");
    }
}
