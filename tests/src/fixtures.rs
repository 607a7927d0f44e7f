//! Test fixtures: rosters and input files.

use serde_json::{json, Value};
use shared_types::ParticipantRecord;
use std::fs;
use std::path::{Path, PathBuf};

pub const TEMPLATE: &str = "<html><body><p>Hi ^! This year you are buying for *.</p></body></html>";

/// One entry of a participant list in file form.
pub fn entry(name: &str, not_allowed: &[&str], email: Option<&str>) -> Value {
    json!({
        "name": name,
        "not_allowed": not_allowed,
        "email": email,
    })
}

/// Write a participant list and the default template into `dir`.
/// Returns `(list, message)` paths.
pub fn write_inputs(dir: &Path, entries: &[Value]) -> (PathBuf, PathBuf) {
    let list = dir.join("participants.json");
    let message = dir.join("message.html");
    fs::write(&list, Value::Array(entries.to_vec()).to_string()).expect("write list");
    fs::write(&message, TEMPLATE).expect("write template");
    (list, message)
}

/// `n` participants named `P0..Pn` with no exclusions.
pub fn open_roster(n: usize) -> Vec<ParticipantRecord> {
    (0..n)
        .map(|i| ParticipantRecord::new(format!("P{}", i)))
        .collect()
}

/// `n` participants in couples; partners exclude each other.
pub fn couples_roster(n: usize) -> Vec<ParticipantRecord> {
    (0..n)
        .map(|i| {
            let partner = if i % 2 == 0 { i + 1 } else { i - 1 };
            let record = ParticipantRecord::new(format!("P{}", i));
            if partner < n {
                record.with_exclusions([format!("P{}", partner)])
            } else {
                record
            }
        })
        .collect()
}

/// Sorted file names in `dir`, or empty when it does not exist.
pub fn file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
