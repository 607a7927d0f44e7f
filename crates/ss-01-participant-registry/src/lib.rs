//! # SS-01: Participant Registry
//!
//! Authoritative roster of participants and their exclusion constraints.
//!
//! ## Architecture
//!
//! - **Domain**: `Participant`, `ParticipantRegistry`, `CandidatePool`, `Attempt`
//! - **Invariants**: bijection, no-self and exclusion checks over a finished draw
//! - **Ports**: Inbound (`ParticipantRegistryApi`) consumed by the assignment engine
//!
//! The registry itself is immutable once loaded. Every draw attempt works on a
//! fresh [`Attempt`] (cloned participants plus a full candidate pool), so a
//! failed attempt can never leak receivers into the next one.

pub mod domain;
pub mod ports;

pub use domain::entities::Participant;
pub use domain::errors::{MalformedReason, RegistryError};
pub use domain::invariants::{
    invariant_bijection, invariant_exclusions_respected, invariant_no_self, invariant_unassigned,
    validate_assignment, InvariantViolation,
};
pub use domain::pool::{Attempt, CandidatePool};
pub use domain::registry::ParticipantRegistry;
pub use ports::inbound::ParticipantRegistryApi;
