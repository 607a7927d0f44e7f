//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `ParticipantId`
//! - **Delivery**: `Contact`
//! - **Input**: `ParticipantRecord`

use crate::errors::IdentityError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Unique participant name.
///
/// Equality, ordering and hashing are all by value, so clones taken for a new
/// draw attempt compare equal to the roster entries they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create an identity from a name. Surrounding whitespace is trimmed.
    pub fn new(name: impl AsRef<str>) -> Result<Self, IdentityError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IdentityError::Blank);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ParticipantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// CLUSTER B: DELIVERY
// =============================================================================

/// Transport-specific delivery address (an email address for the maildrop
/// transport). Never interpreted by the draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Contact(String);

impl Contact {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the token carries no address at all.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// CLUSTER C: INPUT
// =============================================================================

/// A participant as supplied by a record source, before validation.
///
/// `identity` is optional because sources may omit it; the registry rejects
/// such records as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParticipantRecord {
    /// Participant name.
    pub identity: Option<String>,
    /// Names this participant must not give to (directional).
    #[serde(default)]
    pub exclusions: Vec<String>,
    /// Opaque delivery address.
    #[serde(default)]
    pub contact: Option<Contact>,
}

impl ParticipantRecord {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
            exclusions: Vec::new(),
            contact: None,
        }
    }

    pub fn with_exclusions<I, S>(mut self, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusions = exclusions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(Contact::new(contact));
        self
    }
}
