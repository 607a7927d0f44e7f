//! Filesystem artifact writer
//!
//! Cards are written into a hidden staging directory next to the output
//! directory and moved into place only once every card has been written.
//!
//! ## Commit
//!
//! - Output directory missing: the staged directory is renamed to it.
//! - Output directory present: each card replaces its target; a previous card
//!   with the same name is moved aside first and restored if a later card
//!   cannot be moved into place.
//!
//! On failure, directories this call created are removed again.

use crate::domain::AssignmentCard;
use crate::ports::{ArtifactError, ArtifactWriter};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct FsArtifactWriter {
    out_dir: PathBuf,
    prefix: String,
}

/// A card moved into the output directory, with the card it replaced.
struct Committed {
    target: PathBuf,
    backup: Option<PathBuf>,
}

impl FsArtifactWriter {
    pub fn new(out_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Sibling of the output directory, so renames stay on one filesystem.
    fn staging_dir(&self) -> PathBuf {
        let parent = match self.out_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let base = self
            .out_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "out".to_string());
        parent.join(format!(".{}.staging-{}", base, Uuid::new_v4().simple()))
    }

    fn check_names(&self, cards: &[AssignmentCard]) -> Result<Vec<String>, ArtifactError> {
        let mut seen = HashSet::with_capacity(cards.len());
        let mut names = Vec::with_capacity(cards.len());
        for card in cards {
            let file_name = card.file_name(&self.prefix);
            if !seen.insert(file_name.clone()) {
                return Err(ArtifactError::NameCollision { file_name });
            }
            names.push(file_name);
        }
        Ok(names)
    }

    fn stage_and_commit(
        &self,
        cards: &[AssignmentCard],
        names: &[String],
        staging: &Path,
        out_dir_missing: bool,
    ) -> Result<Vec<PathBuf>, ArtifactError> {
        let fresh = staging.join("cards");
        fs::create_dir(&fresh)?;
        for (card, name) in cards.iter().zip(names) {
            let path = fresh.join(name);
            fs::write(&path, card.render()).map_err(|source| ArtifactError::Write { path, source })?;
        }

        if out_dir_missing {
            fs::rename(&fresh, &self.out_dir).map_err(|source| ArtifactError::Write {
                path: self.out_dir.clone(),
                source,
            })?;
            return Ok(names.iter().map(|name| self.out_dir.join(name)).collect());
        }

        let previous = staging.join("previous");
        fs::create_dir(&previous)?;
        let mut committed = Vec::with_capacity(names.len());
        for name in names {
            let target = self.out_dir.join(name);
            match replace(&fresh.join(name), &target, &previous.join(name)) {
                Ok(backup) => {
                    debug!(path = %target.display(), replaced = backup.is_some(), "Card written");
                    committed.push(Committed { target, backup });
                }
                Err(source) => {
                    rollback(&committed);
                    return Err(ArtifactError::Write {
                        path: target,
                        source,
                    });
                }
            }
        }
        Ok(committed.into_iter().map(|c| c.target).collect())
    }
}

/// Topmost ancestor of `path` (itself included) that does not exist yet.
fn first_missing_ancestor(path: &Path) -> Option<PathBuf> {
    let mut missing = None;
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() || ancestor.symlink_metadata().is_ok() {
            break;
        }
        missing = Some(ancestor.to_path_buf());
    }
    missing
}

/// Move `new` to `target`, first moving an existing `target` to `backup`.
/// Returns the backup path when something was replaced.
fn replace(new: &Path, target: &Path, backup: &Path) -> io::Result<Option<PathBuf>> {
    let saved = if target.symlink_metadata().is_ok() {
        fs::rename(target, backup)?;
        Some(backup.to_path_buf())
    } else {
        None
    };
    if let Err(e) = fs::rename(new, target) {
        if let Some(saved) = &saved {
            let _ = fs::rename(saved, target);
        }
        return Err(e);
    }
    Ok(saved)
}

/// Undo committed cards, newest first: restore what they replaced or remove them.
fn rollback(committed: &[Committed]) {
    for entry in committed.iter().rev() {
        let undone = match &entry.backup {
            Some(backup) => fs::rename(backup, &entry.target),
            None => fs::remove_file(&entry.target),
        };
        if let Err(e) = undone {
            warn!(path = %entry.target.display(), error = %e, "Could not roll back card");
        }
    }
}

fn discard(dir: &Path) {
    if dir.symlink_metadata().is_err() {
        return;
    }
    if let Err(e) = fs::remove_dir_all(dir) {
        warn!(path = %dir.display(), error = %e, "Could not remove directory");
    }
}

impl ArtifactWriter for FsArtifactWriter {
    fn write_all(&self, cards: &[AssignmentCard]) -> Result<Vec<PathBuf>, ArtifactError> {
        let names = self.check_names(cards)?;

        let created = first_missing_ancestor(&self.out_dir);
        let staging = self.staging_dir();
        let result = fs::create_dir_all(&staging)
            .map_err(ArtifactError::from)
            .and_then(|()| self.stage_and_commit(cards, &names, &staging, created.is_some()));
        discard(&staging);

        match result {
            Ok(written) => {
                info!(
                    cards = written.len(),
                    out_dir = %self.out_dir.display(),
                    "Assignment cards written"
                );
                Ok(written)
            }
            Err(e) => {
                if let Some(root) = &created {
                    discard(root);
                }
                Err(e)
            }
        }
    }
}
