// src/rename.rs

//! Sequential renaming pass.
//!
//! Renumbering is a pure function from the current directory listing to a
//! list of rename steps; applying the steps to the filesystem is a separate
//! concern. The counter advances on every file, including skipped
//! collisions, so a `track<N>` name taken by a different file leaves N
//! permanently unassigned for the run.

use crate::error::Result;
use crate::settings::Settings;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A single planned rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameStep {
    pub from: String,
    pub to: String,
    /// False when the target name is already taken by a distinct file.
    pub applied: bool,
}

/// Plan the sequential renaming of all target-extension files.
///
/// `names` must be the full top-level file listing of the directory, not
/// just the target-extension files: any existing name can block a rename.
/// `self_name` is the running program's own file name, excluded from
/// renaming (it sits in the same directory). Pure; the filesystem is not
/// touched.
///
/// Collision handling matches the observed behavior: a target name held by
/// a distinct file (case-insensitive comparison) skips the rename but still
/// consumes the sequence number.
pub fn plan_renames(
    names: &[String],
    self_name: Option<&str>,
    settings: &Settings,
) -> Vec<RenameStep> {
    let mut targets: Vec<&String> = names
        .iter()
        .filter(|n| Some(n.as_str()) != self_name)
        .filter(|n| settings.is_target(n))
        .collect();
    targets.sort();

    // Simulates the directory as renames land, so later collision checks see
    // earlier renames exactly like live existence checks would.
    let mut existing: HashSet<String> = names.iter().cloned().collect();
    let mut steps = Vec::with_capacity(targets.len());

    for (i, name) in targets.into_iter().enumerate() {
        let to = settings.numbered_name(i + 1);
        let taken_by_other = existing.contains(&to) && name.to_lowercase() != to.to_lowercase();

        if taken_by_other {
            steps.push(RenameStep {
                from: name.clone(),
                to,
                applied: false,
            });
        } else {
            existing.remove(name.as_str());
            existing.insert(to.clone());
            steps.push(RenameStep {
                from: name.clone(),
                to,
                applied: true,
            });
        }
    }

    steps
}

/// Apply the planned renames inside `dir`. Skipped steps are left untouched.
pub fn apply_renames(dir: &Path, steps: &[RenameStep]) -> Result<()> {
    for step in steps {
        if step.applied {
            fs::rename(dir.join(&step.from), dir.join(&step.to))?;
        }
    }
    Ok(())
}
