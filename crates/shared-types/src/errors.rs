//! # Error Types
//!
//! Errors raised while constructing shared value types.

use thiserror::Error;

/// Errors raised when building a [`crate::ParticipantId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The name is empty or only whitespace.
    #[error("participant name must not be blank")]
    Blank,
}
