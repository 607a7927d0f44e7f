//! Ports module for the Participant Registry
//!
//! Defines the inbound (API) port used by the assignment engine.

pub mod inbound;

pub use inbound::ParticipantRegistryApi;
