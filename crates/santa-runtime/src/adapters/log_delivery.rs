//! Dry-run deliverer: logs each message instead of sending it.

use crate::domain::OutgoingMessage;
use crate::ports::{Deliverer, DeliveryError};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct LogDeliverer {
    delivered: usize,
}

impl LogDeliverer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl Deliverer for LogDeliverer {
    fn name(&self) -> &'static str {
        "log"
    }

    fn deliver(&mut self, message: &OutgoingMessage) -> Result<(), DeliveryError> {
        self.delivered += 1;
        info!(
            recipient = %message.recipient,
            to = %message.to,
            subject = %message.subject,
            "Dry run: message not sent"
        );
        debug!(body = %message.html_body, "Dry run message body");
        Ok(())
    }
}
