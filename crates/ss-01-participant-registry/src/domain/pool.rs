//! Per-attempt working state: the candidate pool and the attempt that owns it.

use super::entities::Participant;
use shared_types::ParticipantId;

/// Participants not yet consumed as a receiver in the current attempt.
///
/// Kept in roster order so that a seeded random source reproduces the same
/// draws. Every participant starts in the pool exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidatePool {
    remaining: Vec<ParticipantId>,
}

impl CandidatePool {
    pub fn new(remaining: Vec<ParticipantId>) -> Self {
        Self { remaining }
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Candidate at `slot`, in current pool order.
    pub fn get(&self, slot: usize) -> Option<&ParticipantId> {
        self.remaining.get(slot)
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.remaining.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticipantId> {
        self.remaining.iter()
    }

    /// Remove and return the candidate at `slot`. Order of the rest is kept.
    pub(crate) fn take(&mut self, slot: usize) -> Option<ParticipantId> {
        (slot < self.remaining.len()).then(|| self.remaining.remove(slot))
    }
}

/// One draw attempt: cloned participants with no receivers plus a full pool.
///
/// Nothing here is shared with the registry or with any other attempt, so an
/// abandoned attempt is simply dropped.
#[derive(Clone, Debug)]
pub struct Attempt {
    participants: Vec<Participant>,
    pool: CandidatePool,
}

impl Attempt {
    pub(crate) fn new(mut participants: Vec<Participant>) -> Self {
        for participant in &mut participants {
            participant.clear_receiver();
        }
        let pool = CandidatePool::new(participants.iter().map(|p| p.id().clone()).collect());
        Self { participants, pool }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    /// Record that participant `giver` gives to the candidate at pool `slot`.
    /// The candidate leaves the pool. Returns the receiver's identity.
    ///
    /// Returns `None` and changes nothing when `giver` or `slot` is out of
    /// range or `giver` already has a receiver in this attempt.
    pub fn assign(&mut self, giver: usize, slot: usize) -> Option<ParticipantId> {
        let participant = self.participants.get_mut(giver)?;
        if participant.is_assigned() {
            return None;
        }
        let receiver = self.pool.take(slot)?;
        participant.set_receiver(receiver.clone());
        Some(receiver)
    }

    /// Every participant has a receiver and the pool is drained.
    pub fn is_complete(&self) -> bool {
        self.pool.is_empty() && self.participants.iter().all(Participant::is_assigned)
    }

    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }
}
