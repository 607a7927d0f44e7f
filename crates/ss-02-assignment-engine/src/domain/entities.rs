//! The finished draw

use shared_types::ParticipantId;
use ss_01_participant_registry::Participant;

/// One giver/receiver pair of a finished draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pairing<'a> {
    pub giver: &'a Participant,
    pub receiver: &'a ParticipantId,
}

/// A valid assignment plus the search statistics that produced it.
///
/// Every participant carries its receiver. Participants are in roster order.
#[derive(Clone, Debug)]
pub struct Assignment {
    participants: Vec<Participant>,
    attempts: u32,
    rejected_draws: u64,
}

impl Assignment {
    pub(crate) fn new(participants: Vec<Participant>, attempts: u32, rejected_draws: u64) -> Self {
        Self {
            participants,
            attempts,
            rejected_draws,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Attempts made, including the successful one.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Rejected candidate draws summed over all attempts.
    pub fn rejected_draws(&self) -> u64 {
        self.rejected_draws
    }

    /// Giver/receiver pairs in roster order.
    pub fn pairs(&self) -> impl Iterator<Item = Pairing<'_>> {
        self.participants.iter().filter_map(|giver| {
            giver
                .receiver()
                .map(|receiver| Pairing { giver, receiver })
        })
    }

    pub fn receiver_of(&self, giver: &ParticipantId) -> Option<&ParticipantId> {
        self.participants
            .iter()
            .find(|p| p.id() == giver)
            .and_then(Participant::receiver)
    }

    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }
}
