// src/workdir.rs

//! Working-directory and executable discovery glue.
//!
//! The tool operates on the folder the executable sits in by default,
//! mirroring the drop-next-to-the-music workflow. Only top-level regular
//! files are ever considered; subdirectories are never recursed into.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Directory containing the running executable.
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or(Error::ProgramDir)
}

/// File name of the running executable, used for self-exclusion during the
/// rename pass.
pub fn self_file_name() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    exe.file_name()?.to_str().map(str::to_string)
}

/// Top-level regular file names in `dir`, sorted by name for deterministic
/// iteration.
///
/// Symlinks are not followed and subdirectories are skipped. Names that are
/// not valid UTF-8 are excluded with a warning rather than lossily mangled
/// into rename targets.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => warn!(
                "Skipping file with non-UTF-8 name: {}",
                entry.path().display()
            ),
        }
    }

    Ok(names)
}
