//! ECS Components
//!
//! Creature components and the arena resources they forage in.

pub mod arena;
pub mod creature;

pub use arena::*;
pub use creature::*;
