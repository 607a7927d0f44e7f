//! Adapters: concrete implementations of the runtime ports.

pub mod fs_artifacts;
pub mod json_source;
pub mod log_delivery;
pub mod maildrop;
pub mod smtp;

pub use fs_artifacts::FsArtifactWriter;
pub use json_source::JsonFileRecordSource;
pub use log_delivery::LogDeliverer;
pub use maildrop::MaildropDeliverer;
pub use smtp::SmtpDeliverer;
