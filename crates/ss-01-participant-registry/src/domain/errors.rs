//! Error types for the Participant Registry

use shared_types::ParticipantId;
use std::fmt;
use thiserror::Error;

/// All errors that can occur while loading a roster.
///
/// None of these are retried: a roster that fails to load never reaches the
/// assignment engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A record is missing a required field or references an unknown identity.
    /// `position` is 1-based, in input order.
    #[error("malformed participant record #{position}: {reason}")]
    MalformedInput {
        position: usize,
        reason: MalformedReason,
    },

    /// Two records share the same identity.
    #[error("duplicate participant identity '{identity}' (records #{first} and #{second})")]
    DuplicateIdentity {
        identity: ParticipantId,
        first: usize,
        second: usize,
    },

    /// The record source produced no participants at all.
    #[error("participant list is empty")]
    EmptyRoster,
}

/// Why a record was rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// No identity field at all.
    MissingIdentity,
    /// Identity present but blank.
    BlankIdentity,
    /// An exclusion entry is blank.
    BlankExclusion { participant: ParticipantId },
    /// An exclusion names nobody in the roster.
    UnknownExclusion {
        participant: ParticipantId,
        excluded: String,
    },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingIdentity => write!(f, "missing participant name"),
            MalformedReason::BlankIdentity => write!(f, "participant name is blank"),
            MalformedReason::BlankExclusion { participant } => {
                write!(f, "'{}' has a blank entry in its exclusion list", participant)
            }
            MalformedReason::UnknownExclusion {
                participant,
                excluded,
            } => write!(
                f,
                "'{}' excludes '{}', who is not a participant",
                participant, excluded
            ),
        }
    }
}
