//! Error types for the runtime ports

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reading the participant list.
#[derive(Debug, Error)]
pub enum RecordSourceError {
    #[error("cannot read participant list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("participant list {path} is not valid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures loading the message template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("cannot read message template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures writing assignment cards.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("two participants map to the same card file '{file_name}'")]
    NameCollision { file_name: String },
}

/// Failures handing a message to a transport.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("delivery I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("header {header} contains a line break")]
    InvalidHeader { header: &'static str },

    #[error("'{address}' is not a valid mail address: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("transport is not configured: {0}")]
    Setup(String),

    #[error("transport rejected the message: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("{delivered} of {total} messages delivered before failure to {recipient}: {source}")]
    Partial {
        recipient: String,
        delivered: usize,
        total: usize,
        #[source]
        source: Box<DeliveryError>,
    },
}
