//! World Setup
//!
//! Arena construction and initial population spawning.

pub mod arena;
pub mod population;

pub use arena::*;
pub use population::*;
