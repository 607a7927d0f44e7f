//! Ports module for the runtime
//!
//! Outbound (SPI) traits for the collaborators around the draw, plus their
//! error types.

pub mod errors;
pub mod outbound;

pub use errors::{ArtifactError, DeliveryError, RecordSourceError, TemplateError};
pub use outbound::{ArtifactWriter, Deliverer, RecordSource};
