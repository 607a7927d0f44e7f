//! # End-to-End Pipeline Flows
//!
//! Full runs through `SantaRuntime` with the real adapters: JSON list on disk,
//! filesystem cards, maildrop delivery.
//!
//! ## Flows Tested
//!
//! 1. **Happy path**: cards for everyone, one message per participant
//! 2. **Failure cleanliness**: no cards and no messages after any failure
//! 3. **Determinism**: same seed, same cards
//! 4. **Exit codes**: each failure class maps to its code

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use crate::fixtures::{entry, file_names, write_inputs};
    use santa_runtime::exit_codes::{
        for_run_error, EXIT_INFEASIBLE, EXIT_INVALID_INPUT, EXIT_OUTPUT, EXIT_USAGE,
    };
    use santa_runtime::{RunError, RunInputs, RuntimeConfig, SantaRuntime, Transport};
    use ss_02_assignment_engine::DrawMode;

    fn config(root: &Path, seed: u64) -> RuntimeConfig {
        let mut config = RuntimeConfig::default();
        config.output.dir = root.join("out");
        config.delivery.maildrop_dir = root.join("maildrop");
        config.draw.seed = Some(seed);
        config
    }

    fn run(config: RuntimeConfig, list: &Path, message: &Path) -> Result<santa_runtime::RunSummary, RunError> {
        SantaRuntime::new(
            config,
            RunInputs {
                list: list.to_path_buf(),
                message: message.to_path_buf(),
            },
        )
        .run()
    }

    fn family() -> Vec<serde_json::Value> {
        vec![
            entry("Alice", &["Bob"], Some("alice@example.com")),
            entry("Bob", &["Alice"], Some("bob@example.com")),
            entry("Carol", &[], Some("carol@example.com")),
            entry("Dave", &["Carol"], Some("dave@example.com")),
        ]
    }

    fn read_card(dir: &Path, name: &str) -> (String, String) {
        let text = fs::read_to_string(dir.join(format!("{}.txt", name))).unwrap();
        let mut lines = text.lines();
        let giver = lines.next().unwrap().trim_start_matches("Name: ").to_string();
        let receiver = lines.next().unwrap().trim_start_matches("Receiver: ").to_string();
        (giver, receiver)
    }

    // =============================================================================
    // HAPPY PATH
    // =============================================================================

    #[test]
    fn test_cards_and_maildrop_messages() {
        let dir = tempfile::tempdir().unwrap();
        let (list, message) = write_inputs(dir.path(), &family());
        let mut config = config(dir.path(), 17);
        config.delivery.enabled = true;
        config.delivery.sender = "santa@north.pole".to_string();

        let summary = run(config, &list, &message).unwrap();

        assert_eq!(summary.participants, 4);
        assert_eq!(summary.delivered, 4);
        let out = dir.path().join("out");
        assert_eq!(
            file_names(&out),
            vec!["Alice.txt", "Bob.txt", "Carol.txt", "Dave.txt"]
        );

        // Every card respects exclusions and receivers are distinct.
        let mut receivers = Vec::new();
        for name in ["Alice", "Bob", "Carol", "Dave"] {
            let (giver, receiver) = read_card(&out, name);
            assert_eq!(giver, name);
            assert_ne!(receiver, name);
            receivers.push(receiver);
        }
        assert_ne!(read_card(&out, "Alice").1, "Bob");
        assert_ne!(read_card(&out, "Bob").1, "Alice");
        assert_ne!(read_card(&out, "Dave").1, "Carol");
        receivers.sort();
        assert_eq!(receivers, vec!["Alice", "Bob", "Carol", "Dave"]);

        let mails = file_names(&dir.path().join("maildrop"));
        assert_eq!(mails.len(), 4);
        let alice_mail = mails
            .iter()
            .map(|m| fs::read_to_string(dir.path().join("maildrop").join(m)).unwrap())
            .find(|m| m.contains("To: alice@example.com"))
            .unwrap();
        assert!(alice_mail.contains("Subject: Invisible Santa for Alice"));
        assert!(alice_mail.contains("<p>Hi Alice! This year you are buying for "));
    }

    #[test]
    fn test_log_transport_writes_no_mail() {
        let dir = tempfile::tempdir().unwrap();
        let (list, message) = write_inputs(dir.path(), &family());
        let mut config = config(dir.path(), 3);
        config.delivery.enabled = true;
        config.delivery.transport = Transport::Log;

        let summary = run(config, &list, &message).unwrap();
        assert_eq!(summary.delivered, 4);
        assert!(!dir.path().join("maildrop").exists());
    }

    #[test]
    fn test_prefix_and_no_email_required_without_delivery() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![entry("Ann", &[], None), entry("Ben", &[], None)];
        let (list, message) = write_inputs(dir.path(), &entries);
        let mut config = config(dir.path(), 1);
        config.output.prefix = "xmas-".to_string();

        let summary = run(config, &list, &message).unwrap();
        assert_eq!(summary.delivered, 0);
        assert_eq!(
            file_names(&dir.path().join("out")),
            vec!["xmas-Ann.txt", "xmas-Ben.txt"]
        );
    }

    // =============================================================================
    // FAILURE CLEANLINESS
    // =============================================================================

    #[test]
    fn test_infeasible_run_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            entry("Alice", &["Bob"], Some("alice@example.com")),
            entry("Bob", &["Alice"], Some("bob@example.com")),
        ];
        let (list, message) = write_inputs(dir.path(), &entries);
        let mut config = config(dir.path(), 0);
        config.draw.max_attempts = 50;
        config.delivery.enabled = true;

        let err = run(config, &list, &message).unwrap_err();

        assert_eq!(for_run_error(&err), EXIT_INFEASIBLE);
        assert!(!dir.path().join("out").exists());
        assert!(!dir.path().join("maildrop").exists());
    }

    #[test]
    fn test_failed_card_write_leaves_no_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let long_name = "N".repeat(300);
        let entries = vec![
            entry("Alice", &[], None),
            entry(&long_name, &[], None),
            entry("Carol", &[], None),
        ];
        let (list, message) = write_inputs(dir.path(), &entries);

        let err = run(config(dir.path(), 5), &list, &message).unwrap_err();

        assert!(matches!(err, RunError::Artifacts(_)));
        assert_eq!(for_run_error(&err), EXIT_OUTPUT);
        assert!(!dir.path().join("out").exists());
        assert_eq!(
            file_names(dir.path()),
            vec!["message.html", "participants.json"]
        );
    }

    #[test]
    fn test_failed_rerun_keeps_previous_cards() {
        let dir = tempfile::tempdir().unwrap();
        let (list, message) = write_inputs(dir.path(), &family());
        run(config(dir.path(), 8), &list, &message).unwrap();
        let out = dir.path().join("out");
        let before = fs::read_to_string(out.join("Alice.txt")).unwrap();

        let mut entries = family();
        entries.push(entry(&"N".repeat(300), &[], Some("long@example.com")));
        let (list, message) = write_inputs(dir.path(), &entries);
        let err = run(config(dir.path(), 9), &list, &message).unwrap_err();

        assert_eq!(for_run_error(&err), EXIT_OUTPUT);
        assert_eq!(
            file_names(&out),
            vec!["Alice.txt", "Bob.txt", "Carol.txt", "Dave.txt"]
        );
        assert_eq!(fs::read_to_string(out.join("Alice.txt")).unwrap(), before);
    }

    #[test]
    fn test_unknown_exclusion_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![entry("Alice", &["Zed"], None), entry("Bob", &[], None)];
        let (list, message) = write_inputs(dir.path(), &entries);

        let err = run(config(dir.path(), 0), &list, &message).unwrap_err();

        assert_eq!(for_run_error(&err), EXIT_INVALID_INPUT);
        assert!(err.to_string().contains("'Alice' excludes 'Zed'"));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_missing_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            entry("Alice", &[], None),
            serde_json::json!({ "not_allowed": [] }),
        ];
        let (list, message) = write_inputs(dir.path(), &entries);

        let err = run(config(dir.path(), 0), &list, &message).unwrap_err();
        assert_eq!(for_run_error(&err), EXIT_INVALID_INPUT);
        assert!(err.to_string().contains("record #2"));
    }

    #[test]
    fn test_empty_list_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (list, message) = write_inputs(dir.path(), &[]);

        let err = run(config(dir.path(), 0), &list, &message).unwrap_err();
        assert_eq!(for_run_error(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn test_missing_email_with_delivery_rejected_before_draw() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            entry("Alice", &[], Some("alice@example.com")),
            entry("Bob", &[], None),
        ];
        let (list, message) = write_inputs(dir.path(), &entries);
        let mut config = config(dir.path(), 0);
        config.delivery.enabled = true;

        let err = run(config, &list, &message).unwrap_err();
        assert!(matches!(err, RunError::MissingContact { .. }));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_malformed_json_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (list, message) = write_inputs(dir.path(), &family());
        fs::write(&list, "[{\"name\": ").unwrap();

        let err = run(config(dir.path(), 0), &list, &message).unwrap_err();
        assert_eq!(for_run_error(&err), EXIT_INVALID_INPUT);

        let err = run(config(dir.path(), 0), &dir.path().join("nope.json"), &message).unwrap_err();
        assert_eq!(for_run_error(&err), EXIT_USAGE);
    }

    // =============================================================================
    // DETERMINISM
    // =============================================================================

    #[test]
    fn test_same_seed_same_cards() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();

        for mode in [DrawMode::WithoutReplacement, DrawMode::WithReplacement] {
            let mut contents = Vec::new();
            for dir in [&first, &second] {
                let (list, message) = write_inputs(dir.path(), &family());
                let mut config = config(dir.path(), 2024);
                config.draw.draw_mode = mode;
                run(config, &list, &message).unwrap();

                let out = dir.path().join("out");
                let cards: Vec<String> = file_names(&out)
                    .iter()
                    .map(|n| fs::read_to_string(out.join(n)).unwrap())
                    .collect();
                contents.push(cards);
            }
            assert_eq!(contents[0], contents[1]);
        }
    }
}
