//! Outgoing message handed to a deliverer

use super::card::AssignmentCard;
use super::template::MessageTemplate;
use crate::config::DeliveryConfig;
use shared_types::{Contact, ParticipantId};

/// One rendered message for one giver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub recipient: ParticipantId,
    pub to: Contact,
    pub subject: String,
    pub html_body: String,
}

impl OutgoingMessage {
    /// Render the message for a card. `None` when the giver has no contact.
    pub fn for_card(
        card: &AssignmentCard,
        template: &MessageTemplate,
        delivery: &DeliveryConfig,
    ) -> Option<Self> {
        let to = card.contact.clone().filter(|c| !c.is_empty())?;
        Some(Self {
            recipient: card.giver.clone(),
            to,
            subject: delivery.subject_for(card.giver.as_str()),
            html_body: template.render(card.giver.as_str(), card.receiver.as_str()),
        })
    }
}
