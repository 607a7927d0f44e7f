//! The registry aggregate: validated roster plus constraint queries.

use super::entities::Participant;
use super::errors::{MalformedReason, RegistryError};
use super::pool::Attempt;
use crate::ports::inbound::ParticipantRegistryApi;
use shared_types::{ParticipantId, ParticipantRecord};
use std::collections::HashMap;
use tracing::{debug, info};

/// Validated, immutable roster of participants in input order.
#[derive(Clone, Debug)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
    index: HashMap<ParticipantId, usize>,
}

impl ParticipantRegistry {
    /// Build a registry from raw records.
    ///
    /// Validation order:
    /// 1. every record has a non-blank identity
    /// 2. identities are unique
    /// 3. every exclusion names a participant in the roster
    ///
    /// An exclusion naming the participant itself is accepted; self is always
    /// forbidden anyway.
    pub fn load<I>(records: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = ParticipantRecord>,
    {
        let records: Vec<ParticipantRecord> = records.into_iter().collect();
        if records.is_empty() {
            return Err(RegistryError::EmptyRoster);
        }

        // 1 + 2. Identities
        let mut ids = Vec::with_capacity(records.len());
        let mut index: HashMap<ParticipantId, usize> = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let position = i + 1;
            let Some(name) = record.identity.as_deref() else {
                return Err(RegistryError::MalformedInput {
                    position,
                    reason: MalformedReason::MissingIdentity,
                });
            };
            let id = ParticipantId::new(name).map_err(|_| RegistryError::MalformedInput {
                position,
                reason: MalformedReason::BlankIdentity,
            })?;
            if let Some(&first) = index.get(&id) {
                return Err(RegistryError::DuplicateIdentity {
                    identity: id,
                    first: first + 1,
                    second: position,
                });
            }
            index.insert(id.clone(), i);
            ids.push(id);
        }

        // 3. Exclusions
        let mut participants = Vec::with_capacity(records.len());
        for (i, (record, id)) in records.into_iter().zip(ids).enumerate() {
            let position = i + 1;
            let mut exclusions = Vec::with_capacity(record.exclusions.len());
            for name in &record.exclusions {
                let excluded =
                    ParticipantId::new(name).map_err(|_| RegistryError::MalformedInput {
                        position,
                        reason: MalformedReason::BlankExclusion {
                            participant: id.clone(),
                        },
                    })?;
                if !index.contains_key(&excluded) {
                    return Err(RegistryError::MalformedInput {
                        position,
                        reason: MalformedReason::UnknownExclusion {
                            participant: id.clone(),
                            excluded: name.clone(),
                        },
                    });
                }
                exclusions.push(excluded);
            }

            debug!(
                participant = %id,
                exclusions = ?exclusions.iter().map(ParticipantId::as_str).collect::<Vec<_>>(),
                "Loaded participant"
            );

            let mut participant = Participant::new(id).with_exclusions(exclusions);
            if let Some(contact) = record.contact {
                participant = participant.with_contact(contact);
            }
            participants.push(participant);
        }

        info!(participants = participants.len(), "Participant registry loaded");

        Ok(Self {
            participants,
            index,
        })
    }

    /// Participants in input order. None of them carries a receiver.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.index.get(id).map(|&i| &self.participants[i])
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.index.contains_key(id)
    }

    /// Every participant `giver` may give to, in roster order.
    ///
    /// Empty means the giver can never be matched, whatever the random source
    /// does. Callers use this for diagnostics only; the engine does not.
    pub fn allowed_receivers(&self, giver: &ParticipantId) -> Vec<&ParticipantId> {
        let Some(giver) = self.get(giver) else {
            return Vec::new();
        };
        self.participants
            .iter()
            .map(Participant::id)
            .filter(|candidate| giver.accepts(candidate))
            .collect()
    }
}

impl ParticipantRegistryApi for ParticipantRegistry {
    fn participants(&self) -> &[Participant] {
        &self.participants
    }

    fn is_allowed(&self, giver: &ParticipantId, candidate: &ParticipantId) -> bool {
        match (self.get(giver), self.contains(candidate)) {
            (Some(giver), true) => giver.accepts(candidate),
            _ => false,
        }
    }

    fn fresh_attempt(&self) -> Attempt {
        Attempt::new(self.participants.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> ParticipantId {
        ParticipantId::new(name).unwrap()
    }

    fn three() -> Vec<ParticipantRecord> {
        vec![
            ParticipantRecord::new("Alice").with_exclusions(["Bob"]),
            ParticipantRecord::new("Bob"),
            ParticipantRecord::new("Carol").with_contact("carol@example.com"),
        ]
    }

    #[test]
    fn test_load_preserves_input_order() {
        let registry = ParticipantRegistry::load(three()).unwrap();
        let names: Vec<_> = registry.participants().iter().map(|p| p.id().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_load_keeps_contact() {
        let registry = ParticipantRegistry::load(three()).unwrap();
        let carol = registry.get(&id("Carol")).unwrap();
        assert_eq!(carol.contact().unwrap().as_str(), "carol@example.com");
    }

    #[test]
    fn test_load_rejects_empty_roster() {
        let result = ParticipantRegistry::load(Vec::new());
        assert_eq!(result.unwrap_err(), RegistryError::EmptyRoster);
    }

    #[test]
    fn test_load_rejects_missing_identity() {
        let records = vec![ParticipantRecord::new("Alice"), ParticipantRecord::default()];
        let err = ParticipantRegistry::load(records).unwrap_err();
        assert_eq!(
            err,
            RegistryError::MalformedInput {
                position: 2,
                reason: MalformedReason::MissingIdentity,
            }
        );
    }

    #[test]
    fn test_load_rejects_blank_identity() {
        let records = vec![ParticipantRecord::new("  ")];
        let err = ParticipantRegistry::load(records).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::MalformedInput {
                position: 1,
                reason: MalformedReason::BlankIdentity
            }
        ));
    }

    #[test]
    fn test_load_rejects_unknown_exclusion() {
        let records = vec![
            ParticipantRecord::new("Alice").with_exclusions(["Zed"]),
            ParticipantRecord::new("Bob"),
        ];
        let err = ParticipantRegistry::load(records).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::MalformedInput {
                position: 1,
                reason: MalformedReason::UnknownExclusion { .. }
            }
        ));
    }

    #[test]
    fn test_load_rejects_duplicate_identity() {
        let records = vec![
            ParticipantRecord::new("Alice"),
            ParticipantRecord::new("Bob"),
            ParticipantRecord::new("Alice"),
        ];
        let err = ParticipantRegistry::load(records).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateIdentity {
                identity: id("Alice"),
                first: 1,
                second: 3,
            }
        );
    }

    #[test]
    fn test_duplicate_detected_after_trimming() {
        let records = vec![ParticipantRecord::new("Alice"), ParticipantRecord::new(" Alice ")];
        let err = ParticipantRegistry::load(records).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateIdentity { .. }));
    }

    #[test]
    fn test_self_exclusion_is_accepted() {
        let records = vec![
            ParticipantRecord::new("Alice").with_exclusions(["Alice"]),
            ParticipantRecord::new("Bob"),
        ];
        assert!(ParticipantRegistry::load(records).is_ok());
    }

    #[test]
    fn test_is_allowed() {
        let registry = ParticipantRegistry::load(three()).unwrap();

        assert!(!registry.is_allowed(&id("Alice"), &id("Alice")));
        assert!(!registry.is_allowed(&id("Alice"), &id("Bob")));
        assert!(registry.is_allowed(&id("Alice"), &id("Carol")));
        // Exclusions are directional
        assert!(registry.is_allowed(&id("Bob"), &id("Alice")));
        // Unknown identities are never allowed
        assert!(!registry.is_allowed(&id("Alice"), &id("Zed")));
        assert!(!registry.is_allowed(&id("Zed"), &id("Alice")));
    }

    #[test]
    fn test_fresh_attempts_are_independent() {
        let registry = ParticipantRegistry::load(three()).unwrap();

        let mut first = registry.fresh_attempt();
        first.assign(0, 2); // Alice -> Carol

        let second = registry.fresh_attempt();
        assert!(second.participants().iter().all(|p| !p.is_assigned()));
        assert_eq!(second.pool().len(), 3);
        assert!(registry.participants().iter().all(|p| !p.is_assigned()));
    }

    #[test]
    fn test_allowed_receivers() {
        let records = vec![
            ParticipantRecord::new("Alice").with_exclusions(["Bob", "Carol"]),
            ParticipantRecord::new("Bob"),
            ParticipantRecord::new("Carol"),
        ];
        let registry = ParticipantRegistry::load(records).unwrap();

        assert!(registry.allowed_receivers(&id("Alice")).is_empty());
        let bob: Vec<_> = registry
            .allowed_receivers(&id("Bob"))
            .into_iter()
            .map(ParticipantId::as_str)
            .collect();
        assert_eq!(bob, vec!["Alice", "Carol"]);
        assert!(registry.allowed_receivers(&id("Zed")).is_empty());
    }
}
