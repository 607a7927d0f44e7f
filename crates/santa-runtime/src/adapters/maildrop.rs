//! Maildrop deliverer
//!
//! Writes one RFC 5322 message per recipient into a pickup directory for a
//! local MTA. Each message is written under a dot-prefixed temporary name and
//! renamed once complete, so the MTA never sees a partial file.

use crate::domain::OutgoingMessage;
use crate::ports::{Deliverer, DeliveryError};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

pub struct MaildropDeliverer {
    dir: PathBuf,
    sender: String,
}

impl MaildropDeliverer {
    pub fn new(dir: impl Into<PathBuf>, sender: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            sender: sender.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn sender_domain(&self) -> &str {
        self.sender
            .rsplit_once('@')
            .map(|(_, domain)| domain.trim_end_matches('>'))
            .filter(|domain| !domain.is_empty())
            .unwrap_or("localhost")
    }

    /// Full message text: headers, blank line, HTML body.
    pub fn format_message(
        &self,
        message: &OutgoingMessage,
        id: &Uuid,
    ) -> Result<String, DeliveryError> {
        let headers = [
            ("From", self.sender.as_str()),
            ("To", message.to.as_str()),
            ("Subject", message.subject.as_str()),
        ];
        for (header, value) in headers {
            if value.contains(['\r', '\n']) {
                return Err(DeliveryError::InvalidHeader { header });
            }
        }

        Ok(format!(
            "From: {}\r\nTo: {}\r\nSubject: {}\r\nDate: {}\r\nMessage-ID: <{}@{}>\r\nMIME-Version: 1.0\r\nContent-Type: text/html; charset=utf-8\r\nContent-Transfer-Encoding: 8bit\r\n\r\n{}",
            self.sender,
            message.to,
            message.subject,
            Local::now().to_rfc2822(),
            id.simple(),
            self.sender_domain(),
            message.html_body,
        ))
    }
}

impl Deliverer for MaildropDeliverer {
    fn name(&self) -> &'static str {
        "maildrop"
    }

    fn deliver(&mut self, message: &OutgoingMessage) -> Result<(), DeliveryError> {
        let id = Uuid::new_v4();
        let text = self.format_message(message, &id)?;

        fs::create_dir_all(&self.dir)?;
        let file_name = format!("{}.eml", id.simple());
        let tmp = self.dir.join(format!(".{}", file_name));
        let path = self.dir.join(&file_name);
        fs::write(&tmp, text)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        info!(
            recipient = %message.recipient,
            to = %message.to,
            path = %path.display(),
            "Message dropped for delivery"
        );
        Ok(())
    }
}
