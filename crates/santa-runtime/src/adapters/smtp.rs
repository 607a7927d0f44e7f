//! SMTP deliverer
//!
//! Sends each message through a relay with STARTTLS and optional login. The
//! transport is generic so tests can substitute lettre's stub transport.

use crate::config::DeliveryConfig;
use crate::domain::OutgoingMessage;
use crate::ports::{Deliverer, DeliveryError};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{debug, info};

pub struct SmtpDeliverer<T = SmtpTransport> {
    transport: T,
    sender: String,
}

impl SmtpDeliverer<SmtpTransport> {
    /// Build a STARTTLS relay from the delivery configuration.
    ///
    /// Nothing is sent and no connection is opened here.
    pub fn from_config(config: &DeliveryConfig) -> Result<Self, DeliveryError> {
        let smtp = &config.smtp;
        let host = smtp
            .host
            .as_deref()
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .ok_or_else(|| {
                DeliveryError::Setup(
                    "SMTP transport needs a relay host (SANTA_SMTP_HOST or --smtp-host)"
                        .to_string(),
                )
            })?;

        let mut builder = SmtpTransport::starttls_relay(host)
            .map_err(|e| DeliveryError::Setup(format!("SMTP relay {}: {}", host, e)))?
            .port(smtp.port);
        if let Some(username) = &smtp.username {
            builder = builder.credentials(Credentials::new(
                username.clone(),
                smtp.password.clone().unwrap_or_default(),
            ));
        }

        debug!(
            host,
            port = smtp.port,
            login = smtp.username.is_some(),
            "SMTP relay configured"
        );
        Ok(Self::with_transport(builder.build(), config.sender.clone()))
    }
}

impl<T> SmtpDeliverer<T> {
    pub fn with_transport(transport: T, sender: impl Into<String>) -> Self {
        Self {
            transport,
            sender: sender.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// HTML message from the configured sender to the message's contact.
    pub fn build_message(&self, message: &OutgoingMessage) -> Result<Message, DeliveryError> {
        Message::builder()
            .from(mailbox(&self.sender)?)
            .to(mailbox(message.to.as_str())?)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(message.html_body.clone())
            .map_err(|e| DeliveryError::Transport(Box::new(e)))
    }
}

fn mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .trim()
        .parse()
        .map_err(|source| DeliveryError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

impl<T> Deliverer for SmtpDeliverer<T>
where
    T: Transport,
    T::Error: std::error::Error + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        "smtp"
    }

    fn deliver(&mut self, message: &OutgoingMessage) -> Result<(), DeliveryError> {
        let email = self.build_message(message)?;
        self.transport
            .send(&email)
            .map_err(|e| DeliveryError::Transport(Box::new(e)))?;

        info!(
            recipient = %message.recipient,
            to = %message.to,
            "Message sent"
        );
        Ok(())
    }
}
