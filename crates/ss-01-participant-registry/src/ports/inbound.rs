//! Inbound Ports (Driving Ports / API)
//!
//! The surface the assignment engine drives. Implemented by
//! [`crate::ParticipantRegistry`]; tests may supply their own roster types.

use crate::domain::entities::Participant;
use crate::domain::pool::Attempt;
use shared_types::ParticipantId;

/// Read-only roster access plus per-attempt working copies.
pub trait ParticipantRegistryApi {
    /// All participants in input order, none of them assigned.
    fn participants(&self) -> &[Participant];

    /// True iff `candidate` is a participant other than `giver` and is not in
    /// `giver`'s exclusion set. Pure.
    fn is_allowed(&self, giver: &ParticipantId, candidate: &ParticipantId) -> bool;

    /// Fresh participants with receivers cleared and a pool holding every
    /// participant once. Shares no mutable state with earlier attempts.
    fn fresh_attempt(&self) -> Attempt;
}
