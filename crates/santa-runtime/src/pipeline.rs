//! # Santa Runtime Pipeline
//!
//! ## Run Sequence
//!
//! 1. Load the message template
//! 2. Load the participant records
//! 3. Build the registry (validation)
//! 4. Check contacts and set up the transport when delivery is enabled
//! 5. Warn about givers with no allowed receiver
//! 6. Draw
//! 7. Write assignment cards
//! 8. Deliver messages (if enabled)
//!
//! Steps 1 to 6 touch nothing on disk, so any failure up to and including the
//! draw leaves no output behind.

use crate::adapters::{
    FsArtifactWriter, JsonFileRecordSource, LogDeliverer, MaildropDeliverer, SmtpDeliverer,
};
use crate::config::{DeliveryConfig, RuntimeConfig, Transport};
use crate::domain::{AssignmentCard, MessageTemplate, OutgoingMessage};
use crate::ports::{
    ArtifactError, ArtifactWriter, Deliverer, DeliveryError, RecordSource, RecordSourceError,
    TemplateError,
};
use shared_types::ParticipantId;
use ss_01_participant_registry::{ParticipantRegistry, RegistryError};
use ss_02_assignment_engine::{
    AssignmentApi, AssignmentError, AssignmentService, EntropyRandomSource, RandomSource,
    SeededRandomSource,
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Records(#[from] RecordSourceError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("participant '{participant}' has no email address, which delivery requires")]
    MissingContact { participant: ParticipantId },

    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    #[error(transparent)]
    Artifacts(#[from] ArtifactError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// The two input files of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInputs {
    /// Participant list (JSON).
    pub list: PathBuf,
    /// Message template (HTML).
    pub message: PathBuf,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub participants: usize,
    pub attempts: u32,
    pub rejected_draws: u64,
    pub artifacts: Vec<PathBuf>,
    pub delivered: usize,
}

/// End-to-end run over pluggable collaborators.
pub struct SantaRuntime {
    config: RuntimeConfig,
    inputs: RunInputs,
    records: Box<dyn RecordSource>,
    artifacts: Box<dyn ArtifactWriter>,
    deliverer: Option<Box<dyn Deliverer>>,
    rng: Box<dyn RandomSource>,
}

impl SantaRuntime {
    /// Create a runtime with the adapters selected by `config`.
    ///
    /// The delivery transport is built at the start of [`run`](Self::run),
    /// so a misconfigured transport fails the run before the draw.
    pub fn new(config: RuntimeConfig, inputs: RunInputs) -> Self {
        let records = Box::new(JsonFileRecordSource::new(inputs.list.clone()));
        let artifacts = Box::new(FsArtifactWriter::new(
            config.output.dir.clone(),
            config.output.prefix.clone(),
        ));
        let rng: Box<dyn RandomSource> = match config.draw.seed {
            Some(seed) => Box::new(SeededRandomSource::new(seed)),
            None => Box::new(EntropyRandomSource::new()),
        };

        Self {
            config,
            inputs,
            records,
            artifacts,
            deliverer: None,
            rng,
        }
    }

    pub fn with_record_source(mut self, records: Box<dyn RecordSource>) -> Self {
        self.records = records;
        self
    }

    pub fn with_artifact_writer(mut self, artifacts: Box<dyn ArtifactWriter>) -> Self {
        self.artifacts = artifacts;
        self
    }

    /// Replace the deliverer. Only used when delivery is enabled.
    pub fn with_deliverer(mut self, deliverer: Box<dyn Deliverer>) -> Self {
        self.deliverer = Some(deliverer);
        self
    }

    pub fn with_random_source(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn run(&mut self) -> Result<RunSummary, RunError> {
        info!(
            list = %self.inputs.list.display(),
            message = %self.inputs.message.display(),
            seed = ?self.config.draw.seed,
            "Starting secret santa run"
        );

        // 1-3. Inputs
        let template = MessageTemplate::from_file(&self.inputs.message)?;
        let records = self.records.load_records()?;
        let registry = ParticipantRegistry::load(records)?;

        // 4. Contacts
        if self.config.delivery.enabled {
            if let Some(missing) = registry
                .participants()
                .iter()
                .find(|p| p.contact().map_or(true, |c| c.is_empty()))
            {
                return Err(RunError::MissingContact {
                    participant: missing.id().clone(),
                });
            }
            if self.deliverer.is_none() {
                self.deliverer = Some(build_deliverer(&self.config.delivery)?);
            }
        }

        // 5. Pre-flight
        for participant in registry.participants() {
            if registry.allowed_receivers(participant.id()).is_empty() {
                warn!(
                    giver = %participant.id(),
                    "Participant excludes everyone; no assignment is possible"
                );
            }
        }

        // 6. Draw
        let service = AssignmentService::with_config(self.config.draw.engine_config());
        let assignment = service.draw(&registry, self.rng.as_mut())?;

        // 7. Cards
        let cards = AssignmentCard::from_assignment(&assignment);
        let artifacts = self.artifacts.write_all(&cards)?;

        // 8. Delivery
        let delivered = match (self.config.delivery.enabled, self.deliverer.as_mut()) {
            (true, Some(deliverer)) => {
                deliver_all(deliverer.as_mut(), &cards, &template, &self.config)?
            }
            _ => 0,
        };

        let summary = RunSummary {
            participants: assignment.len(),
            attempts: assignment.attempts(),
            rejected_draws: assignment.rejected_draws(),
            artifacts,
            delivered,
        };
        info!(
            participants = summary.participants,
            attempts = summary.attempts,
            rejected_draws = summary.rejected_draws,
            artifacts = summary.artifacts.len(),
            delivered = summary.delivered,
            "Run complete"
        );
        Ok(summary)
    }
}

/// Deliverer for the configured transport.
pub fn build_deliverer(config: &DeliveryConfig) -> Result<Box<dyn Deliverer>, DeliveryError> {
    Ok(match config.transport {
        Transport::Maildrop => Box::new(MaildropDeliverer::new(
            config.maildrop_dir.clone(),
            config.sender.clone(),
        )),
        Transport::Smtp => Box::new(SmtpDeliverer::from_config(config)?),
        Transport::Log => Box::new(LogDeliverer::new()),
    })
}

fn deliver_all(
    deliverer: &mut dyn Deliverer,
    cards: &[AssignmentCard],
    template: &MessageTemplate,
    config: &RuntimeConfig,
) -> Result<usize, RunError> {
    let total = cards.len();
    let mut delivered = 0;

    for card in cards {
        let Some(message) = OutgoingMessage::for_card(card, template, &config.delivery) else {
            return Err(RunError::MissingContact {
                participant: card.giver.clone(),
            });
        };
        if let Err(source) = deliverer.deliver(&message) {
            return Err(DeliveryError::Partial {
                recipient: card.giver.to_string(),
                delivered,
                total,
                source: Box::new(source),
            }
            .into());
        }
        delivered += 1;
    }

    info!(transport = deliverer.name(), delivered, "Messages delivered");
    Ok(delivered)
}
