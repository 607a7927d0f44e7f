//! # Reference Scenarios
//!
//! Small rosters with known outcomes, run through the registry and the
//! engine together:
//!
//! 1. **Three, open**: one of the two 3-cycles
//! 2. **Two, open**: the swap
//! 3. **Two, mutually excluding**: infeasible within the attempt bound
//! 4. **Forced receiver**: the only allowed giver always gets the receiver
//! 5. **Unknown exclusion**: rejected before any draw

#[cfg(test)]
mod tests {
    use crate::fixtures::{couples_roster, open_roster};
    use shared_types::{ParticipantId, ParticipantRecord};
    use ss_01_participant_registry::{
        validate_assignment, MalformedReason, ParticipantRegistry, ParticipantRegistryApi,
        RegistryError,
    };
    use ss_02_assignment_engine::{
        Assignment, AssignmentApi, AssignmentError, AssignmentService, DrawMode, EngineConfig,
        ScriptedRandomSource, SeededRandomSource,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn id(name: &str) -> ParticipantId {
        ParticipantId::new(name).unwrap()
    }

    fn cycle(assignment: &Assignment) -> Vec<String> {
        assignment
            .pairs()
            .map(|p| format!("{}->{}", p.giver.id(), p.receiver))
            .collect()
    }

    fn modes() -> [DrawMode; 2] {
        [DrawMode::WithoutReplacement, DrawMode::WithReplacement]
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_three_open_participants_form_a_three_cycle() {
        let allowed = [
            vec!["A->B", "B->C", "C->A"],
            vec!["A->C", "B->A", "C->B"],
        ];
        let records = vec![
            ParticipantRecord::new("A"),
            ParticipantRecord::new("B"),
            ParticipantRecord::new("C"),
        ];

        for mode in modes() {
            let service = AssignmentService::with_config(EngineConfig::default().with_draw_mode(mode));
            let mut seen = std::collections::HashSet::new();
            for seed in 0..64 {
                let assignment = service
                    .draw_records(records.clone(), &mut SeededRandomSource::new(seed))
                    .unwrap();
                let found = cycle(&assignment);
                assert!(allowed.iter().any(|c| *c == found), "unexpected {:?}", found);
                seen.insert(found);
            }
            // Both cycles are reachable.
            assert_eq!(seen.len(), 2);
        }
    }

    #[test]
    fn test_two_open_participants_swap() {
        let service = AssignmentService::new();
        for seed in 0..16 {
            let assignment = service
                .draw_records(open_roster(2), &mut SeededRandomSource::new(seed))
                .unwrap();
            assert_eq!(cycle(&assignment), vec!["P0->P1", "P1->P0"]);
        }
    }

    #[test]
    fn test_mutual_exclusion_is_infeasible_and_clean() {
        let registry = ParticipantRegistry::load(couples_roster(2)).unwrap();

        for mode in modes() {
            let service = AssignmentService::with_config(
                EngineConfig::default()
                    .with_max_attempts(100)
                    .with_draw_mode(mode),
            );
            let err = service
                .draw(&registry, &mut SeededRandomSource::new(5))
                .unwrap_err();

            assert_eq!(
                err,
                AssignmentError::Infeasible {
                    attempts: 100,
                    max_attempts: 100
                }
            );
            assert!(err.to_string().contains("100 attempts"));
            assert!(registry.participants().iter().all(|p| !p.is_assigned()));
        }
    }

    #[test]
    fn test_forced_receiver_always_assigned() {
        let records = vec![
            ParticipantRecord::new("A").with_exclusions(["D"]),
            ParticipantRecord::new("B").with_exclusions(["D"]),
            ParticipantRecord::new("P"),
            ParticipantRecord::new("D"),
        ];
        let registry = ParticipantRegistry::load(records).unwrap();
        assert_eq!(registry.allowed_receivers(&id("A")).len(), 2);

        for mode in modes() {
            let service = AssignmentService::with_config(EngineConfig::default().with_draw_mode(mode));
            for seed in 0..32 {
                let assignment = service
                    .draw(&registry, &mut SeededRandomSource::new(seed))
                    .unwrap();
                assert_eq!(assignment.receiver_of(&id("P")), Some(&id("D")));
                assert_eq!(validate_assignment(&registry, assignment.participants()), Ok(()));
            }
        }
    }

    #[test]
    fn test_unknown_exclusion_rejected_before_drawing() {
        let records = vec![
            ParticipantRecord::new("A").with_exclusions(["Nobody"]),
            ParticipantRecord::new("B"),
        ];
        let mut rng = ScriptedRandomSource::new(vec![1, 2, 3]);

        let err = AssignmentService::new()
            .draw_records(records, &mut rng)
            .unwrap_err();

        match err {
            AssignmentError::Registry(RegistryError::MalformedInput {
                position,
                reason: MalformedReason::UnknownExclusion { excluded, .. },
            }) => {
                assert_eq!(position, 1);
                assert_eq!(excluded, "Nobody");
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
        assert_eq!(rng.consumed(), 0);
    }

    // =============================================================================
    // LARGER ROSTERS
    // =============================================================================

    #[test]
    fn test_couples_never_draw_each_other() {
        let registry = ParticipantRegistry::load(couples_roster(12)).unwrap();
        let service = AssignmentService::new();

        for seed in 0..16 {
            let assignment = service
                .draw(&registry, &mut SeededRandomSource::new(seed))
                .unwrap();
            for pair in assignment.pairs() {
                assert!(registry.is_allowed(pair.giver.id(), pair.receiver));
            }
        }
    }

    #[test]
    fn test_single_participant_is_infeasible() {
        let err = AssignmentService::with_config(EngineConfig::default().with_max_attempts(3))
            .draw_records(open_roster(1), &mut SeededRandomSource::new(0))
            .unwrap_err();
        assert!(matches!(err, AssignmentError::Infeasible { attempts: 3, .. }));
    }

    #[test]
    fn test_participant_excluding_everyone_is_infeasible() {
        let records = vec![
            ParticipantRecord::new("A").with_exclusions(["B", "C"]),
            ParticipantRecord::new("B"),
            ParticipantRecord::new("C"),
        ];
        let registry = ParticipantRegistry::load(records).unwrap();
        assert!(registry.allowed_receivers(&id("A")).is_empty());

        let err = AssignmentService::with_config(EngineConfig::default().with_max_attempts(10))
            .draw(&registry, &mut SeededRandomSource::new(0))
            .unwrap_err();
        assert!(matches!(err, AssignmentError::Infeasible { .. }));
    }
}
