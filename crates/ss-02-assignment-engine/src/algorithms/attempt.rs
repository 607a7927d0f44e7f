//! A single full pass over every giver

use super::draw::{draw_for_giver, GiverOutcome};
use crate::config::DrawMode;
use crate::ports::RandomSource;
use shared_types::ParticipantId;
use ss_01_participant_registry::{Participant, ParticipantRegistryApi};
use tracing::debug;

/// Result of one attempt.
#[derive(Clone, Debug)]
pub enum AttemptOutcome {
    /// Every giver matched. Participants carry their receivers.
    Complete {
        participants: Vec<Participant>,
        rejected: u64,
    },
    /// A giver could not be matched. The partial attempt has been dropped.
    DeadEnd {
        giver: ParticipantId,
        matched: usize,
        rejected: u64,
    },
}

impl AttemptOutcome {
    pub fn rejected(&self) -> u64 {
        match self {
            AttemptOutcome::Complete { rejected, .. } | AttemptOutcome::DeadEnd { rejected, .. } => {
                *rejected
            }
        }
    }
}

/// Run one attempt on a fresh copy of the roster, givers in input order.
pub fn run_attempt(
    registry: &dyn ParticipantRegistryApi,
    mode: DrawMode,
    rng: &mut dyn RandomSource,
    attempt_no: u32,
) -> AttemptOutcome {
    let mut attempt = registry.fresh_attempt();
    let givers: Vec<ParticipantId> = attempt.participants().iter().map(|p| p.id().clone()).collect();
    let mut rejected: u64 = 0;

    for (index, giver) in givers.into_iter().enumerate() {
        match draw_for_giver(&mut attempt, index, registry, mode, rng) {
            GiverOutcome::Matched { rejected: r, .. } => rejected += r as u64,
            GiverOutcome::Stuck { rejected: r } => {
                rejected += r as u64;
                debug!(
                    attempt = attempt_no,
                    giver = %giver,
                    matched = index,
                    pool_size = attempt.pool().len(),
                    "Dead end, abandoning attempt"
                );
                return AttemptOutcome::DeadEnd {
                    giver,
                    matched: index,
                    rejected,
                };
            }
        }
    }

    AttemptOutcome::Complete {
        participants: attempt.into_participants(),
        rejected,
    }
}
