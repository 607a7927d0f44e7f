//! JSON participant list
//!
//! Format: `[{"name": "X", "not_allowed": ["Y"], "email": "x@y.com"}]`.
//! `not_allowed` and `email` may be omitted or null. A missing or null `name`
//! is passed on as a record without identity for the registry to reject.

use crate::ports::{RecordSource, RecordSourceError};
use serde::Deserialize;
use shared_types::{Contact, ParticipantRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RawParticipant {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    not_allowed: Option<Vec<String>>,
    #[serde(default)]
    email: Option<String>,
}

impl From<RawParticipant> for ParticipantRecord {
    fn from(raw: RawParticipant) -> Self {
        ParticipantRecord {
            identity: raw.name,
            exclusions: raw.not_allowed.unwrap_or_default(),
            contact: raw
                .email
                .filter(|e| !e.trim().is_empty())
                .map(Contact::new),
        }
    }
}

/// Reads the participant list from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRecordSource {
    path: PathBuf,
}

impl JsonFileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a participant list from a string.
    pub fn parse(&self, text: &str) -> Result<Vec<ParticipantRecord>, RecordSourceError> {
        let raw: Vec<RawParticipant> =
            serde_json::from_str(text).map_err(|source| RecordSourceError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(raw.into_iter().map(ParticipantRecord::from).collect())
    }
}

impl RecordSource for JsonFileRecordSource {
    fn load_records(&self) -> Result<Vec<ParticipantRecord>, RecordSourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| RecordSourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        let records = self.parse(&text)?;
        debug!(path = %self.path.display(), records = records.len(), "Participant list read");
        Ok(records)
    }
}
