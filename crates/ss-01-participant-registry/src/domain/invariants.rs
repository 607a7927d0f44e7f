//! Domain invariants for a finished draw
//!
//! Each `invariant_*` function checks one property over a finalized participant
//! list. [`validate_assignment`] runs all of them and reports the first
//! violation found.

use super::entities::Participant;
use crate::ports::inbound::ParticipantRegistryApi;
use shared_types::ParticipantId;
use std::collections::HashSet;
use std::fmt;

/// First property a finalized participant list was found to break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Participant list differs from the roster (size or membership).
    RosterMismatch,
    /// A participant has no receiver.
    Unassigned(ParticipantId),
    /// Two givers share a receiver.
    DuplicateReceiver(ParticipantId),
    /// A participant gives to itself.
    SelfAssigned(ParticipantId),
    /// A participant gives to someone it excludes.
    ExcludedReceiver {
        giver: ParticipantId,
        receiver: ParticipantId,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::RosterMismatch => write!(f, "participants differ from roster"),
            InvariantViolation::Unassigned(id) => write!(f, "{} has no receiver", id),
            InvariantViolation::DuplicateReceiver(id) => {
                write!(f, "{} receives more than one gift", id)
            }
            InvariantViolation::SelfAssigned(id) => write!(f, "{} gives to themself", id),
            InvariantViolation::ExcludedReceiver { giver, receiver } => {
                write!(f, "{} gives to excluded participant {}", giver, receiver)
            }
        }
    }
}

/// INVARIANT-1: Bijection
/// Every participant has a receiver and every participant is received exactly once.
pub fn invariant_bijection(participants: &[Participant]) -> bool {
    let ids: HashSet<&ParticipantId> = participants.iter().map(Participant::id).collect();
    let mut seen = HashSet::with_capacity(participants.len());

    for participant in participants {
        let Some(receiver) = participant.receiver() else {
            return false;
        };
        if !ids.contains(receiver) || !seen.insert(receiver) {
            return false;
        }
    }

    seen.len() == ids.len()
}

/// INVARIANT-2: No Self-Assignment
pub fn invariant_no_self(participants: &[Participant]) -> bool {
    participants
        .iter()
        .all(|p| p.receiver().map_or(true, |r| r != p.id()))
}

/// INVARIANT-3: Exclusions Respected
pub fn invariant_exclusions_respected(participants: &[Participant]) -> bool {
    participants
        .iter()
        .all(|p| p.receiver().map_or(true, |r| !p.exclusions().contains(r)))
}

/// INVARIANT-4: Clean Slate
/// Nobody carries a receiver (registry state and abandoned attempts).
pub fn invariant_unassigned(participants: &[Participant]) -> bool {
    participants.iter().all(|p| !p.is_assigned())
}

/// Re-validate a finished draw against the registry it came from.
///
/// Re-asks the registry's `is_allowed` for every finalized pair, so a draw
/// that passes here is valid by the registry's own definition.
pub fn validate_assignment<R>(
    registry: &R,
    participants: &[Participant],
) -> Result<(), InvariantViolation>
where
    R: ParticipantRegistryApi + ?Sized,
{
    let roster = registry.participants();
    if roster.len() != participants.len()
        || roster.iter().zip(participants).any(|(a, b)| a.id() != b.id())
    {
        return Err(InvariantViolation::RosterMismatch);
    }

    let mut received = HashSet::with_capacity(participants.len());
    for participant in participants {
        let giver = participant.id();
        let Some(receiver) = participant.receiver() else {
            return Err(InvariantViolation::Unassigned(giver.clone()));
        };
        if receiver == giver {
            return Err(InvariantViolation::SelfAssigned(giver.clone()));
        }
        if !registry.is_allowed(giver, receiver) {
            return Err(InvariantViolation::ExcludedReceiver {
                giver: giver.clone(),
                receiver: receiver.clone(),
            });
        }
        if !received.insert(receiver) {
            return Err(InvariantViolation::DuplicateReceiver(receiver.clone()));
        }
    }

    Ok(())
}
