//! Event Types
//!
//! What happened during a day: encounters, grudges, births and deaths.

use serde::{Deserialize, Serialize};

use crate::{CreatureId, CreatureRef, Species};

/// Kind of thing that happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Encounter,
    GrudgeFormed,
    Birth,
    Death,
}

impl EventType {
    /// Subtype names allowed under this kind.
    pub fn valid_subtypes(&self) -> &'static [&'static str] {
        match self {
            EventType::Encounter => &["uncontested", "shared", "fight", "exploitation"],
            EventType::GrudgeFormed => &["hawk_remembered"],
            EventType::Birth => &["offspring"],
            EventType::Death => &["starved", "unfed"],
        }
    }

    pub fn is_valid_subtype(&self, subtype: &str) -> bool {
        self.valid_subtypes().contains(&subtype)
    }

    pub fn all() -> &'static [EventType] {
        &[
            EventType::Encounter,
            EventType::GrudgeFormed,
            EventType::Birth,
            EventType::Death,
        ]
    }
}

/// Encounter event subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterSubtype {
    /// Creature had the food pair to itself
    Uncontested,
    /// Both played Dove and split the food
    Shared,
    /// Both played Hawk and fought
    Fight,
    /// A Hawk play took the larger share from a Dove play
    Exploitation,
}

/// Grudge event subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrudgeSubtype {
    HawkRemembered,
}

/// Birth event subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthSubtype {
    Offspring,
}

/// Death event subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathSubtype {
    /// Gathered too little food to survive the night
    Starved,
    /// Found no free food pair at all
    Unfed,
}

/// Subtype of any kind, serialized as its bare name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventSubtype {
    Encounter(EncounterSubtype),
    Grudge(GrudgeSubtype),
    Birth(BirthSubtype),
    Death(DeathSubtype),
}

/// Set of creatures involved in an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSet {
    /// The creature the event is about
    pub primary: CreatureRef,
    /// The other participant (opponent, remembered hawk, or parent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<CreatureRef>,
}

impl ActorSet {
    pub fn primary_only(actor: CreatureRef) -> Self {
        Self {
            primary: actor,
            secondary: None,
        }
    }

    pub fn with_secondary(primary: CreatureRef, secondary: CreatureRef) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Checks if a specific creature is involved.
    pub fn involves(&self, creature_id: CreatureId) -> bool {
        self.primary.creature_id == creature_id
            || self
                .secondary
                .as_ref()
                .map_or(false, |s| s.creature_id == creature_id)
    }
}

/// Encounter outcome: what each side played and the food it took home
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterOutcome {
    pub primary_play: Species,
    pub primary_food: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_play: Option<Species>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_food: Option<f32>,
    /// Creature that played Hawk against a Dove play, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exploiter: Option<CreatureId>,
}

/// Grudge outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrudgeOutcome {
    /// Number of hawks remembered after this event
    pub memory_size: usize,
}

/// Birth and death outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeOutcome {
    /// Food the (parent) creature gathered that day
    pub food: f32,
}

/// Outcome payload; the shape depends on the event kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventOutcome {
    Encounter(EncounterOutcome),
    Grudge(GrudgeOutcome),
    Life(LifeOutcome),
}

/// A single simulation event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier (e.g., "evt_00000042")
    pub event_id: String,
    /// Day the event happened on (first day is 1)
    pub day: u64,
    pub event_type: EventType,
    pub subtype: EventSubtype,
    /// Creatures involved in the event
    pub actors: ActorSet,
    /// Results of the event
    pub outcome: EventOutcome,
}

impl Event {
    pub fn new(
        event_id: impl Into<String>,
        day: u64,
        event_type: EventType,
        subtype: EventSubtype,
        actors: ActorSet,
        outcome: EventOutcome,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            day,
            event_type,
            subtype,
            actors,
            outcome,
        }
    }

    /// Checks if a specific creature is involved in this event.
    pub fn involves(&self, creature_id: CreatureId) -> bool {
        self.actors.involves(creature_id)
    }

    /// One line of the JSONL event log.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Event handle for the `sequence`-th event of a run
pub fn generate_event_id(sequence: u64) -> String {
    format!("evt_{:08}", sequence)
}

/// Encounter at a food pair with nobody else around
pub fn create_uncontested_event(
    event_id: impl Into<String>,
    day: u64,
    creature: CreatureRef,
    play: Species,
    food: f32,
) -> Event {
    Event::new(
        event_id,
        day,
        EventType::Encounter,
        EventSubtype::Encounter(EncounterSubtype::Uncontested),
        ActorSet::primary_only(creature),
        EventOutcome::Encounter(EncounterOutcome {
            primary_play: play,
            primary_food: food,
            secondary_play: None,
            secondary_food: None,
            exploiter: None,
        }),
    )
}

/// Encounter between two creatures; the subtype follows from the plays.
#[allow(clippy::too_many_arguments)]
pub fn create_encounter_event(
    event_id: impl Into<String>,
    day: u64,
    primary: CreatureRef,
    primary_play: Species,
    primary_food: f32,
    secondary: CreatureRef,
    secondary_play: Species,
    secondary_food: f32,
) -> Event {
    let exploiter = match (primary_play, secondary_play) {
        (Species::Hawk, Species::Hawk) => None,
        (Species::Hawk, _) => Some(primary.creature_id),
        (_, Species::Hawk) => Some(secondary.creature_id),
        _ => None,
    };
    let subtype = match (primary_play.is_hawk(), secondary_play.is_hawk()) {
        (true, true) => EncounterSubtype::Fight,
        (false, false) => EncounterSubtype::Shared,
        _ => EncounterSubtype::Exploitation,
    };

    Event::new(
        event_id,
        day,
        EventType::Encounter,
        EventSubtype::Encounter(subtype),
        ActorSet::with_secondary(primary, secondary),
        EventOutcome::Encounter(EncounterOutcome {
            primary_play,
            primary_food,
            secondary_play: Some(secondary_play),
            secondary_food: Some(secondary_food),
            exploiter,
        }),
    )
}

/// A Grudge added a hawk to its memory
pub fn create_grudge_event(
    event_id: impl Into<String>,
    day: u64,
    grudge: CreatureRef,
    hawk: CreatureRef,
    memory_size: usize,
) -> Event {
    Event::new(
        event_id,
        day,
        EventType::GrudgeFormed,
        EventSubtype::Grudge(GrudgeSubtype::HawkRemembered),
        ActorSet::with_secondary(grudge, hawk),
        EventOutcome::Grudge(GrudgeOutcome { memory_size }),
    )
}

/// A creature was born; the parent is the secondary actor
pub fn create_birth_event(
    event_id: impl Into<String>,
    day: u64,
    child: CreatureRef,
    parent: CreatureRef,
    parent_food: f32,
) -> Event {
    Event::new(
        event_id,
        day,
        EventType::Birth,
        EventSubtype::Birth(BirthSubtype::Offspring),
        ActorSet::with_secondary(child, parent),
        EventOutcome::Life(LifeOutcome { food: parent_food }),
    )
}

/// A creature died at the end of the day
pub fn create_death_event(
    event_id: impl Into<String>,
    day: u64,
    creature: CreatureRef,
    subtype: DeathSubtype,
    food: f32,
) -> Event {
    Event::new(
        event_id,
        day,
        EventType::Death,
        EventSubtype::Death(subtype),
        ActorSet::primary_only(creature),
        EventOutcome::Life(LifeOutcome { food }),
    )
}
