//! Core entities for the Participant Registry

use shared_types::{Contact, ParticipantId};
use std::collections::BTreeSet;

/// A member of the gift exchange.
///
/// `receiver` is unset on every participant held by the registry. It is only
/// ever set on the per-attempt clones handed out through
/// [`crate::Attempt`], and only by [`crate::Attempt::assign`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    id: ParticipantId,
    exclusions: BTreeSet<ParticipantId>,
    contact: Option<Contact>,
    receiver: Option<ParticipantId>,
}

impl Participant {
    pub fn new(id: ParticipantId) -> Self {
        Self {
            id,
            exclusions: BTreeSet::new(),
            contact: None,
            receiver: None,
        }
    }

    pub fn with_exclusions<I>(mut self, exclusions: I) -> Self
    where
        I: IntoIterator<Item = ParticipantId>,
    {
        self.exclusions = exclusions.into_iter().collect();
        self
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    /// Explicit exclusions. Self is always forbidden in addition to these.
    pub fn exclusions(&self) -> &BTreeSet<ParticipantId> {
        &self.exclusions
    }

    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref()
    }

    pub fn receiver(&self) -> Option<&ParticipantId> {
        self.receiver.as_ref()
    }

    pub fn is_assigned(&self) -> bool {
        self.receiver.is_some()
    }

    /// True iff this participant may give to `candidate`.
    pub fn accepts(&self, candidate: &ParticipantId) -> bool {
        *candidate != self.id && !self.exclusions.contains(candidate)
    }

    pub(crate) fn set_receiver(&mut self, receiver: ParticipantId) {
        debug_assert!(
            self.receiver.is_none(),
            "receiver for {} already set within this attempt",
            self.id
        );
        self.receiver = Some(receiver);
    }

    pub(crate) fn clear_receiver(&mut self) {
        self.receiver = None;
    }
}
