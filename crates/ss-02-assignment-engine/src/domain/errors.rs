//! Error types for the Assignment Engine

use ss_01_participant_registry::{InvariantViolation, RegistryError};
use thiserror::Error;

/// Errors that can occur while producing an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The roster could not be loaded. No attempt was made.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Every attempt dead-ended. The constraints may be unsatisfiable, or the
    /// search was unlucky; the engine does not distinguish the two.
    #[error("no valid assignment found after {attempts} attempts (limit {max_attempts})")]
    Infeasible { attempts: u32, max_attempts: u32 },

    /// Engine configuration is unusable.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// A completed attempt failed re-validation against the registry.
    #[error("completed draw is inconsistent: {0}")]
    Inconsistent(InvariantViolation),
}
