//! Per-participant assignment card

use shared_types::{Contact, ParticipantId};
use ss_02_assignment_engine::Assignment;

/// The text artifact telling one giver who their receiver is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentCard {
    pub giver: ParticipantId,
    pub receiver: ParticipantId,
    pub contact: Option<Contact>,
}

impl AssignmentCard {
    /// One card per giver, in roster order.
    pub fn from_assignment(assignment: &Assignment) -> Vec<Self> {
        assignment
            .pairs()
            .map(|pair| Self {
                giver: pair.giver.id().clone(),
                receiver: pair.receiver.clone(),
                contact: pair.giver.contact().cloned(),
            })
            .collect()
    }

    /// Card body: name, receiver and contact, one per line.
    pub fn render(&self) -> String {
        format!(
            "Name: {}\nReceiver: {}\nEmail: {}",
            self.giver,
            self.receiver,
            self.contact.as_ref().map(Contact::as_str).unwrap_or_default()
        )
    }

    /// `<prefix><giver>.txt`, with path separators in the name replaced.
    pub fn file_name(&self, prefix: &str) -> String {
        let safe: String = self
            .giver
            .as_str()
            .chars()
            .map(|c| match c {
                '/' | '\\' | '\0' => '_',
                other => other,
            })
            .collect();
        format!("{}{}.txt", prefix, safe)
    }
}
