// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a working directory seeded with the given (empty) files.
///
/// Returns the TempDir - keep it alive to prevent cleanup.
pub fn working_dir(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in files {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    dir
}

/// Names of all regular files in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().unwrap().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Write a fake encoder script into `dir` and return its path.
///
/// The script appends its argument vector to `log`, creates the output file
/// (its last argument) when `exit_code` is zero, and exits with `exit_code`.
#[cfg(unix)]
pub fn fake_encoder(dir: &Path, log: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-ffmpeg");
    let body = format!(
        "#!/bin/sh\n\
         printf '%s\\n' \"$*\" >> \"{log}\"\n\
         for out; do :; done\n\
         if [ {code} -eq 0 ]; then : > \"$out\"; fi\n\
         exit {code}\n",
        log = log.display(),
        code = exit_code,
    );
    fs::write(&script, body).unwrap();

    let mut perms = fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script, perms).unwrap();

    script
}

/// Number of lines the fake encoder has appended to `log`.
#[cfg(unix)]
pub fn invocation_count(log: &Path) -> usize {
    match fs::read_to_string(log) {
        Ok(content) => content.lines().count(),
        Err(_) => 0,
    }
}
