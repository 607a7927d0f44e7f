//! Domain module for the Participant Registry
//!
//! Contains entities, the registry aggregate, candidate pools, errors and invariants.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod pool;
pub mod registry;

pub use entities::*;
pub use errors::*;
pub use pool::*;
pub use registry::*;
