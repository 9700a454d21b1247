//! Output
//!
//! World snapshots for diagnostics.

pub mod snapshot;

pub use snapshot::*;
