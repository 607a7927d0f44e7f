//! Outbound Ports (Driven Ports / SPI)

use super::errors::{ArtifactError, DeliveryError, RecordSourceError};
use crate::domain::{AssignmentCard, OutgoingMessage};
use shared_types::ParticipantRecord;
use std::path::PathBuf;

/// Supplies raw participant records.
pub trait RecordSource {
    fn load_records(&self) -> Result<Vec<ParticipantRecord>, RecordSourceError>;
}

/// Persists the cards of a successful draw.
///
/// Implementations must write all cards or none.
pub trait ArtifactWriter {
    /// Returns the paths written, in card order.
    fn write_all(&self, cards: &[AssignmentCard]) -> Result<Vec<PathBuf>, ArtifactError>;
}

/// Hands one message to a transport.
pub trait Deliverer {
    /// Transport name for logging.
    fn name(&self) -> &'static str;

    fn deliver(&mut self, message: &OutgoingMessage) -> Result<(), DeliveryError>;
}
