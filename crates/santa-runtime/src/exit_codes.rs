//! Process Exit Code Registry
//!
//! Single source of truth for the exit codes of `secret-santa`.
//! Scripts rely on them.
//!
//! | Code | Meaning                                              |
//! |------|------------------------------------------------------|
//! | 0    | Success                                              |
//! | 1    | General error (unspecified)                          |
//! | 2    | Usage error (bad arguments, missing input file, transport not configured) |
//! | 3    | Invalid input (malformed record, duplicate, missing contact) |
//! | 4    | No valid assignment found within the attempt bound   |
//! | 5    | Writing artifacts or delivering messages failed      |

use crate::pipeline::RunError;
use crate::ports::{DeliveryError, RecordSourceError};
use crate::ports::TemplateError;
use ss_02_assignment_engine::AssignmentError;

/// Success - every card written, every message handed over.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing or unreadable input file, or a
/// delivery transport without the settings it needs.
pub const EXIT_USAGE: u8 = 2;

/// Participant list is malformed, has duplicates, is empty, or lacks contacts
/// needed for delivery.
pub const EXIT_INVALID_INPUT: u8 = 3;

/// Attempt bound exhausted.
pub const EXIT_INFEASIBLE: u8 = 4;

/// Artifact or delivery failure.
pub const EXIT_OUTPUT: u8 = 5;

/// Map a failed run to its exit code.
pub fn for_run_error(err: &RunError) -> u8 {
    match err {
        RunError::Template(TemplateError::Read { .. }) => EXIT_USAGE,
        RunError::Records(RecordSourceError::Read { .. }) => EXIT_USAGE,
        RunError::Records(RecordSourceError::Parse { .. }) => EXIT_INVALID_INPUT,
        RunError::Registry(_) | RunError::MissingContact { .. } => EXIT_INVALID_INPUT,
        RunError::Assignment(AssignmentError::Registry(_)) => EXIT_INVALID_INPUT,
        RunError::Assignment(AssignmentError::Infeasible { .. }) => EXIT_INFEASIBLE,
        RunError::Assignment(AssignmentError::InvalidConfig(_)) => EXIT_USAGE,
        RunError::Assignment(AssignmentError::Inconsistent(_)) => EXIT_ERROR,
        RunError::Delivery(DeliveryError::Setup(_)) => EXIT_USAGE,
        RunError::Artifacts(_) | RunError::Delivery(_) => EXIT_OUTPUT,
    }
}
