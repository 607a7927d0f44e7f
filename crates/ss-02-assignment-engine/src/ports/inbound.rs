//! Inbound ports (API) for the Assignment Engine

use crate::domain::entities::Assignment;
use crate::domain::errors::AssignmentError;
use crate::ports::outbound::RandomSource;
use shared_types::ParticipantRecord;
use ss_01_participant_registry::{ParticipantRegistry, ParticipantRegistryApi};

/// Primary API for producing an assignment.
pub trait AssignmentApi {
    /// Search for a valid assignment over an already loaded registry.
    fn draw(
        &self,
        registry: &dyn ParticipantRegistryApi,
        rng: &mut dyn RandomSource,
    ) -> Result<Assignment, AssignmentError>;

    /// Load a registry from raw records, then draw.
    ///
    /// Registry errors abort before any attempt is made.
    fn draw_records(
        &self,
        records: Vec<ParticipantRecord>,
        rng: &mut dyn RandomSource,
    ) -> Result<Assignment, AssignmentError> {
        let registry = ParticipantRegistry::load(records)?;
        self.draw(&registry, rng)
    }
}
