//! Assignment Service
//!
//! Main service implementing AssignmentApi.

use crate::algorithms::{run_attempt, AttemptOutcome};
use crate::config::EngineConfig;
use crate::domain::entities::Assignment;
use crate::domain::errors::AssignmentError;
use crate::ports::inbound::AssignmentApi;
use crate::ports::outbound::RandomSource;
use ss_01_participant_registry::{validate_assignment, ParticipantRegistryApi};

use tracing::{debug, info, warn};

/// Assignment Service
///
/// Runs the bounded restart loop:
/// 1. Validate config
/// 2. Run attempts until one completes or the bound is reached
/// 3. Re-validate the completed attempt against the registry
/// 4. Return the assignment with its statistics
#[derive(Clone, Debug, Default)]
pub struct AssignmentService {
    config: EngineConfig,
}

impl AssignmentService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new service with custom config
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl AssignmentApi for AssignmentService {
    fn draw(
        &self,
        registry: &dyn ParticipantRegistryApi,
        rng: &mut dyn RandomSource,
    ) -> Result<Assignment, AssignmentError> {
        self.config
            .validate()
            .map_err(AssignmentError::InvalidConfig)?;

        let max_attempts = self.config.max_attempts;
        let mode = self.config.draw_mode;
        let mut rejected_draws: u64 = 0;

        info!(
            participants = registry.participants().len(),
            max_attempts,
            draw_mode = ?mode,
            "Drawing assignment"
        );

        for attempt in 1..=max_attempts {
            match run_attempt(registry, mode, rng, attempt) {
                AttemptOutcome::Complete {
                    participants,
                    rejected,
                } => {
                    rejected_draws += rejected;
                    validate_assignment(registry, &participants)
                        .map_err(AssignmentError::Inconsistent)?;

                    info!(
                        attempts = attempt,
                        rejected_draws, "Assignment found"
                    );
                    return Ok(Assignment::new(participants, attempt, rejected_draws));
                }
                AttemptOutcome::DeadEnd { rejected, .. } => {
                    rejected_draws += rejected;
                    debug!(attempt, "Restarting");
                }
            }
        }

        warn!(
            attempts = max_attempts,
            rejected_draws, "No valid assignment found within the attempt bound"
        );
        Err(AssignmentError::Infeasible {
            attempts: max_attempts,
            max_attempts,
        })
    }
}
