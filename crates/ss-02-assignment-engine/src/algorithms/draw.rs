//! Per-giver draw loop
//!
//! A giver draws candidates from the pool until one is allowed or the
//! rejection budget runs out.
//!
//! ## Budget
//!
//! `pool_size + REJECTION_SLACK` rejected draws, with `pool_size` measured when
//! the giver's search starts. In `WithoutReplacement` mode the loop also stops
//! once every pool slot has been tried, which always comes first.

use crate::config::DrawMode;
use crate::ports::RandomSource;
use shared_types::ParticipantId;
use ss_01_participant_registry::{Attempt, ParticipantRegistryApi};
use tracing::debug;

/// Extra rejected draws allowed on top of the pool size.
pub const REJECTION_SLACK: usize = 2;

/// Rejected draws a giver may make against a pool of `pool_size`.
pub fn rejection_budget(pool_size: usize) -> usize {
    pool_size + REJECTION_SLACK
}

/// Result of one giver's search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GiverOutcome {
    /// Receiver chosen and removed from the pool.
    Matched {
        receiver: ParticipantId,
        rejected: usize,
    },
    /// No allowed candidate found; the attempt must be abandoned.
    Stuck { rejected: usize },
}

impl GiverOutcome {
    pub fn rejected(&self) -> usize {
        match self {
            GiverOutcome::Matched { rejected, .. } | GiverOutcome::Stuck { rejected } => *rejected,
        }
    }
}

/// Search a receiver for the participant at index `giver` of `attempt`.
///
/// On a match the receiver is recorded on the giver and leaves the pool.
/// On a dead end the attempt is left as it was before the call.
pub fn draw_for_giver(
    attempt: &mut Attempt,
    giver: usize,
    registry: &dyn ParticipantRegistryApi,
    mode: DrawMode,
    rng: &mut dyn RandomSource,
) -> GiverOutcome {
    let Some(giver_id) = attempt.participant(giver).map(|p| p.id().clone()) else {
        return GiverOutcome::Stuck { rejected: 0 };
    };

    let pool_size = attempt.pool().len();
    let budget = rejection_budget(pool_size);
    let mut untried: Vec<usize> = (0..pool_size).collect();
    let mut rejected = 0;

    loop {
        if rejected >= budget {
            debug!(giver = %giver_id, rejected, "Rejection budget exhausted");
            return GiverOutcome::Stuck { rejected };
        }

        let slot = match mode {
            DrawMode::WithoutReplacement => {
                if untried.is_empty() {
                    debug!(giver = %giver_id, rejected, "No untried candidates left");
                    return GiverOutcome::Stuck { rejected };
                }
                untried.remove(rng.next_index(untried.len()))
            }
            DrawMode::WithReplacement => {
                if pool_size == 0 {
                    return GiverOutcome::Stuck { rejected };
                }
                rng.next_index(pool_size)
            }
        };

        let Some(candidate) = attempt.pool().get(slot) else {
            return GiverOutcome::Stuck { rejected };
        };

        if registry.is_allowed(&giver_id, candidate) {
            let Some(receiver) = attempt.assign(giver, slot) else {
                return GiverOutcome::Stuck { rejected };
            };
            debug!(giver = %giver_id, receiver = %receiver, rejected, "Receiver drawn");
            return GiverOutcome::Matched { receiver, rejected };
        }

        debug!(giver = %giver_id, candidate = %candidate, "Giver cannot give to candidate");
        rejected += 1;
    }
}
