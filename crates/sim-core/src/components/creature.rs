//! Creature Components
//!
//! The creature contract, its three variants, and the ECS component that
//! carries them.
//!
//! A creature's declared species never changes. What it *plays* in an
//! encounter is asked separately through [`Creature::plays_against`]; only a
//! Grudge ever plays something other than its declared species.

use bevy_ecs::prelude::*;
use sim_events::{CreatureId, CreatureRef, Position, Species};
use std::collections::BTreeSet;

/// Contract shared by every creature variant.
pub trait Creature {
    /// Stable handle; two creatures are the same creature iff their ids match.
    fn id(&self) -> CreatureId;

    /// Declared species.
    fn species(&self) -> Species;

    fn position(&self) -> Position;

    /// Effective play against `opponent`: always `Hawk` or `Dove`.
    fn plays_against(&self, opponent: &dyn Creature) -> Species;

    /// Play with nobody else at the food pair: `Hawk` for a Hawk, `Dove`
    /// otherwise. A Grudge's default play is Dove.
    fn plays_alone(&self) -> Species {
        if self.species().is_hawk() {
            Species::Hawk
        } else {
            Species::Dove
        }
    }

    /// By-value view of this creature for events and logs.
    fn to_ref(&self) -> CreatureRef {
        CreatureRef::new(self.id(), self.species(), self.position())
    }
}

/// Always fights for the food
#[derive(Debug, Clone, PartialEq)]
pub struct Hawk {
    id: CreatureId,
    position: Position,
}

impl Hawk {
    pub fn new(id: CreatureId, position: Position) -> Self {
        Self { id, position }
    }
}

impl Creature for Hawk {
    fn id(&self) -> CreatureId {
        self.id
    }

    fn species(&self) -> Species {
        Species::Hawk
    }

    fn position(&self) -> Position {
        self.position
    }

    fn plays_against(&self, _opponent: &dyn Creature) -> Species {
        Species::Hawk
    }
}

/// Always shares, always backs down
#[derive(Debug, Clone, PartialEq)]
pub struct Dove {
    id: CreatureId,
    position: Position,
}

impl Dove {
    pub fn new(id: CreatureId, position: Position) -> Self {
        Self { id, position }
    }
}

impl Creature for Dove {
    fn id(&self) -> CreatureId {
        self.id
    }

    fn species(&self) -> Species {
        Species::Dove
    }

    fn position(&self) -> Position {
        self.position
    }

    fn plays_against(&self, _opponent: &dyn Creature) -> Species {
        Species::Dove
    }
}

/// Plays Dove until a Hawk exploits it, then plays Hawk against that Hawk.
///
/// The memory holds the handles of Hawk-species creatures that exploited
/// this Grudge. It only grows, and every handle in it belonged to a Hawk at
/// the moment it was inserted. Handles of hawks that have since died stay in
/// the set.
#[derive(Debug, Clone, PartialEq)]
pub struct Grudge {
    id: CreatureId,
    position: Position,
    hawks_memory: BTreeSet<CreatureId>,
}

impl Grudge {
    pub fn new(id: CreatureId, position: Position) -> Self {
        Self {
            id,
            position,
            hawks_memory: BTreeSet::new(),
        }
    }

    /// Remember `opponent` if it is a Hawk right now.
    ///
    /// Returns true when the opponent was not remembered before. Non-Hawk
    /// opponents are ignored.
    pub fn remember_hawk(&mut self, opponent: &dyn Creature) -> bool {
        if opponent.species() != Species::Hawk {
            return false;
        }
        self.hawks_memory.insert(opponent.id())
    }

    /// True iff `opponent` is remembered AND is still a Hawk.
    ///
    /// The species is re-checked at query time even though only Hawks are
    /// ever inserted.
    pub fn is_hawk_against(&self, opponent: &dyn Creature) -> bool {
        self.hawks_memory.contains(&opponent.id()) && opponent.species() == Species::Hawk
    }

    /// Name consulted by payoff resolution; same answer as [`Self::is_hawk_against`].
    pub fn behaves_as_hawk_against(&self, opponent: &dyn Creature) -> bool {
        self.is_hawk_against(opponent)
    }

    /// Read-only view of the remembered hawks.
    pub fn hawks_memory(&self) -> &BTreeSet<CreatureId> {
        &self.hawks_memory
    }
}

impl Creature for Grudge {
    fn id(&self) -> CreatureId {
        self.id
    }

    /// Always `Grudge`, whatever the memory holds.
    fn species(&self) -> Species {
        Species::Grudge
    }

    fn position(&self) -> Position {
        self.position
    }

    fn plays_against(&self, opponent: &dyn Creature) -> Species {
        if self.behaves_as_hawk_against(opponent) {
            Species::Hawk
        } else {
            Species::Dove
        }
    }
}

/// ECS component: the creature living on this entity
#[derive(Component, Debug, Clone, PartialEq)]
pub enum Agent {
    Hawk(Hawk),
    Dove(Dove),
    Grudge(Grudge),
}

impl Agent {
    /// Create a fresh creature of the given declared species.
    pub fn new(species: Species, id: CreatureId, position: Position) -> Self {
        match species {
            Species::Hawk => Agent::Hawk(Hawk::new(id, position)),
            Species::Dove => Agent::Dove(Dove::new(id, position)),
            Species::Grudge => Agent::Grudge(Grudge::new(id, position)),
        }
    }

    /// Child of the same species at the parent's position.
    ///
    /// A Grudge's memory is its own experience and is not inherited.
    pub fn offspring(&self, id: CreatureId) -> Self {
        Agent::new(self.species(), id, self.position())
    }

    /// Tell this creature it was exploited by `exploiter`.
    ///
    /// Only a Grudge reacts; returns true when a new grudge was formed.
    pub fn remember_exploiter(&mut self, exploiter: &dyn Creature) -> bool {
        match self {
            Agent::Grudge(grudge) => grudge.remember_hawk(exploiter),
            Agent::Hawk(_) | Agent::Dove(_) => false,
        }
    }

    pub fn as_grudge(&self) -> Option<&Grudge> {
        match self {
            Agent::Grudge(grudge) => Some(grudge),
            _ => None,
        }
    }

    /// Remembered hawks, sorted; empty for non-Grudge creatures.
    pub fn hawks_memory(&self) -> Vec<CreatureId> {
        self.as_grudge()
            .map(|g| g.hawks_memory().iter().copied().collect())
            .unwrap_or_default()
    }

    fn inner(&self) -> &dyn Creature {
        match self {
            Agent::Hawk(hawk) => hawk,
            Agent::Dove(dove) => dove,
            Agent::Grudge(grudge) => grudge,
        }
    }
}

impl Creature for Agent {
    fn id(&self) -> CreatureId {
        self.inner().id()
    }

    fn species(&self) -> Species {
        self.inner().species()
    }

    fn position(&self) -> Position {
        self.inner().position()
    }

    fn plays_against(&self, opponent: &dyn Creature) -> Species {
        self.inner().plays_against(opponent)
    }
}

/// What a creature found at the food pairs today
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct Forage {
    /// Index of the food pair the creature went to, if any was free
    pub pair: Option<usize>,
    /// Food gathered so far today
    pub food: f32,
}

/// Resource: allocates creature handles, never reusing one
#[derive(Resource, Debug, Default)]
pub struct CreatureIds {
    next: u64,
}

impl CreatureIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> CreatureId {
        let id = CreatureId(self.next);
        self.next += 1;
        id
    }

    /// Number of handles handed out so far
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32) -> Position {
        Position::new(x, 0.0)
    }

    #[test]
    fn test_simple_creatures_play_their_species() {
        let hawk = Hawk::new(CreatureId(1), at(0.0));
        let dove = Dove::new(CreatureId(2), at(1.0));

        assert_eq!(hawk.plays_against(&dove), Species::Hawk);
        assert_eq!(dove.plays_against(&hawk), Species::Dove);
        assert_eq!(hawk.species(), Species::Hawk);
        assert_eq!(dove.species(), Species::Dove);
    }

    #[test]
    fn test_lone_play_is_hawk_or_dove() {
        let hawk = Hawk::new(CreatureId(1), at(0.0));
        let dove = Dove::new(CreatureId(2), at(1.0));
        let mut grudge = Grudge::new(CreatureId(3), at(2.0));

        assert_eq!(hawk.plays_alone(), Species::Hawk);
        assert_eq!(dove.plays_alone(), Species::Dove);
        assert_eq!(grudge.plays_alone(), Species::Dove);

        grudge.remember_hawk(&hawk);
        assert_eq!(grudge.plays_alone(), Species::Dove);
        assert_eq!(Agent::Grudge(grudge).plays_alone(), Species::Dove);
    }

    #[test]
    fn test_fresh_grudge_plays_dove() {
        let grudge = Grudge::new(CreatureId(1), at(0.0));
        let hawk = Hawk::new(CreatureId(2), at(1.0));

        assert!(grudge.hawks_memory().is_empty());
        assert!(!grudge.is_hawk_against(&hawk));
        assert_eq!(grudge.plays_against(&hawk), Species::Dove);
    }

    #[test]
    fn test_grudge_remembers_exploiting_hawk() {
        let mut grudge = Grudge::new(CreatureId(1), at(0.0));
        let hawk = Hawk::new(CreatureId(2), at(1.0));
        let other_hawk = Hawk::new(CreatureId(3), at(2.0));

        assert!(grudge.remember_hawk(&hawk));

        assert!(grudge.is_hawk_against(&hawk));
        assert!(!grudge.is_hawk_against(&other_hawk));
        assert_eq!(grudge.plays_against(&hawk), Species::Hawk);
        assert_eq!(grudge.plays_against(&other_hawk), Species::Dove);
        assert_eq!(grudge.species(), Species::Grudge);
    }

    #[test]
    fn test_grudge_ignores_non_hawks() {
        let mut grudge = Grudge::new(CreatureId(1), at(0.0));
        let dove = Dove::new(CreatureId(2), at(1.0));
        let rival = Grudge::new(CreatureId(3), at(2.0));

        assert!(!grudge.remember_hawk(&dove));
        assert!(!grudge.remember_hawk(&rival));

        assert!(grudge.hawks_memory().is_empty());
        assert!(!grudge.is_hawk_against(&dove));
        assert!(!grudge.is_hawk_against(&rival));
    }

    #[test]
    fn test_remember_is_idempotent() {
        let mut grudge = Grudge::new(CreatureId(1), at(0.0));
        let hawk = Hawk::new(CreatureId(2), at(1.0));

        assert!(grudge.remember_hawk(&hawk));
        assert!(!grudge.remember_hawk(&hawk));
        assert_eq!(grudge.hawks_memory().len(), 1);
    }

    #[test]
    fn test_memory_is_keyed_by_identity() {
        let mut grudge = Grudge::new(CreatureId(1), at(0.0));
        let h1 = Hawk::new(CreatureId(2), at(5.0));
        let h2 = Hawk::new(CreatureId(3), at(5.0));

        grudge.remember_hawk(&h1);

        assert!(grudge.is_hawk_against(&h1));
        assert!(!grudge.is_hawk_against(&h2));
    }

    #[test]
    fn test_query_rechecks_current_species() {
        let mut grudge = Grudge::new(CreatureId(1), at(0.0));
        let hawk = Hawk::new(CreatureId(2), at(1.0));
        grudge.remember_hawk(&hawk);

        // A non-hawk reusing the remembered handle does not trigger the grudge
        let impostor = Dove::new(CreatureId(2), at(1.0));
        assert!(!grudge.is_hawk_against(&impostor));
        assert!(!grudge.behaves_as_hawk_against(&impostor));
    }

    #[test]
    fn test_grudge_remembering_itself_is_harmless() {
        let mut grudge = Grudge::new(CreatureId(1), at(0.0));
        let snapshot = grudge.clone();
        assert!(!grudge.remember_hawk(&snapshot));
        assert!(!grudge.is_hawk_against(&snapshot));
    }

    #[test]
    fn test_agent_delegates_to_variant() {
        let mut agent = Agent::new(Species::Grudge, CreatureId(7), at(3.0));
        let hawk = Agent::new(Species::Hawk, CreatureId(8), at(4.0));

        assert_eq!(agent.species(), Species::Grudge);
        assert_eq!(agent.id(), CreatureId(7));
        assert_eq!(agent.position(), at(3.0));
        assert_eq!(agent.plays_against(&hawk), Species::Dove);

        assert!(agent.remember_exploiter(&hawk));
        assert_eq!(agent.plays_against(&hawk), Species::Hawk);
        assert_eq!(agent.hawks_memory(), vec![CreatureId(8)]);
        assert_eq!(agent.species(), Species::Grudge);
    }

    #[test]
    fn test_only_grudges_remember_exploiters() {
        let hawk = Agent::new(Species::Hawk, CreatureId(1), at(0.0));
        let mut dove = Agent::new(Species::Dove, CreatureId(2), at(1.0));
        let mut other_hawk = Agent::new(Species::Hawk, CreatureId(3), at(2.0));

        assert!(!dove.remember_exploiter(&hawk));
        assert!(!other_hawk.remember_exploiter(&hawk));
        assert!(dove.hawks_memory().is_empty());
        assert!(dove.as_grudge().is_none());
    }

    #[test]
    fn test_offspring_starts_with_clean_memory() {
        let hawk = Agent::new(Species::Hawk, CreatureId(1), at(0.0));
        let mut parent = Agent::new(Species::Grudge, CreatureId(2), at(9.0));
        parent.remember_exploiter(&hawk);

        let child = parent.offspring(CreatureId(3));

        assert_eq!(child.species(), Species::Grudge);
        assert_eq!(child.position(), parent.position());
        assert_eq!(child.id(), CreatureId(3));
        assert!(child.hawks_memory().is_empty());
    }

    #[test]
    fn test_creature_ids_are_never_reused() {
        let mut ids = CreatureIds::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert_ne!(a, b);
        assert_eq!(ids.allocated(), 2);
    }
}
