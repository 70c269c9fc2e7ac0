// src/convert.rs

//! Conversion pass: produce an `.ogg` next to every recognized source file.
//!
//! The directory listing is taken once up front; outputs created during the
//! pass do not feed back into it. A source file whose output already exists
//! is skipped, which makes re-running the pass idempotent.

use crate::encoder::{EncodeStatus, Encoder};
use crate::error::{Error, Result};
use crate::settings::Settings;
use crate::workdir;
use std::path::Path;
use tracing::debug;

/// Per-file result of the conversion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// Output produced by the encoder.
    Converted,
    /// Output already existed; the encoder was not invoked.
    SkippedExisting,
    /// Dry run: the file would have been converted.
    Planned,
    /// Encoder exited non-zero; the source file is left alone.
    Failed { code: Option<i32> },
}

/// One source file visited by the conversion pass.
#[derive(Debug, Clone)]
pub struct ConvertEntry {
    /// Source file name.
    pub source: String,
    /// Output file name (same base, target extension).
    pub output: String,
    pub outcome: ConvertOutcome,
}

/// Result of a whole conversion pass.
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Entries in visit order, one per eligible source file.
    pub entries: Vec<ConvertEntry>,
    /// Encoder program that could not be launched, when the pass was cut
    /// short. Files after the abort point are not visited.
    pub aborted: Option<String>,
}

impl ConvertReport {
    pub fn converted(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == ConvertOutcome::Converted)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, ConvertOutcome::Failed { .. }))
            .count()
    }
}

/// Convert every eligible source file in `dir`, reporting each entry through
/// `observe` as it completes.
///
/// Encoder launch failure stops the remaining loop and is recorded on the
/// report rather than returned as an `Err`: the caller is expected to report
/// it once and still proceed to the rename phase.
pub fn convert_directory<E, F>(
    dir: &Path,
    settings: &Settings,
    encoder: &E,
    dry_run: bool,
    mut observe: F,
) -> Result<ConvertReport>
where
    E: Encoder + ?Sized,
    F: FnMut(&ConvertEntry),
{
    let mut report = ConvertReport::default();

    for name in workdir::list_file_names(dir)? {
        if !settings.is_source(&name) {
            continue;
        }

        let output_name = settings.converted_name(&name);
        let output = dir.join(&output_name);

        let outcome = if output.exists() {
            ConvertOutcome::SkippedExisting
        } else if dry_run {
            ConvertOutcome::Planned
        } else {
            match encoder.encode(&dir.join(&name), &output) {
                Ok(EncodeStatus::Done) => ConvertOutcome::Converted,
                Ok(EncodeStatus::Failed { code }) => ConvertOutcome::Failed { code },
                Err(Error::EncoderLaunch { program, source }) => {
                    debug!("Encoder launch failed: {}", source);
                    report.aborted = Some(program);
                    break;
                }
                Err(err) => return Err(err),
            }
        };

        let entry = ConvertEntry {
            source: name,
            output: output_name,
            outcome,
        };
        observe(&entry);
        report.entries.push(entry);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;

    /// In-process stand-in for ffmpeg: records invocations and creates the
    /// output file on success.
    struct FakeEncoder {
        calls: RefCell<Vec<PathBuf>>,
        /// File names (without directory) that fail with exit code 1.
        fail_on: Vec<String>,
        /// When false, every invocation errors as if the binary were missing.
        launchable: bool,
    }

    impl FakeEncoder {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on: Vec::new(),
                launchable: true,
            }
        }

        fn failing_on(names: &[&str]) -> Self {
            let mut fake = Self::new();
            fake.fail_on = names.iter().map(|s| s.to_string()).collect();
            fake
        }

        fn unlaunchable() -> Self {
            let mut fake = Self::new();
            fake.launchable = false;
            fake
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Encoder for FakeEncoder {
        fn encode(&self, input: &Path, output: &Path) -> Result<EncodeStatus> {
            if !self.launchable {
                return Err(Error::EncoderLaunch {
                    program: "fake".to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }

            self.calls.borrow_mut().push(input.to_path_buf());

            let name = input.file_name().unwrap().to_str().unwrap();
            if self.fail_on.iter().any(|f| f == name) {
                return Ok(EncodeStatus::Failed { code: Some(1) });
            }

            fs::write(output, b"fake ogg").unwrap();
            Ok(EncodeStatus::Done)
        }
    }

    fn seed(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        dir
    }

    #[test]
    fn test_only_source_extensions_are_converted() {
        let dir = seed(&["a.mp3", "b.txt", "c.WAV", "d.ogg"]);
        let encoder = FakeEncoder::new();

        let report =
            convert_directory(dir.path(), &Settings::default(), &encoder, false, |_| {}).unwrap();

        assert_eq!(report.converted(), 2);
        assert_eq!(encoder.call_count(), 2);
        assert!(dir.path().join("a.ogg").exists());
        assert!(dir.path().join("c.ogg").exists());
        assert!(!dir.path().join("b.ogg").exists());
    }

    #[test]
    fn test_existing_output_is_skipped() {
        let dir = seed(&["a.mp3", "a.ogg"]);
        let encoder = FakeEncoder::new();

        let report =
            convert_directory(dir.path(), &Settings::default(), &encoder, false, |_| {}).unwrap();

        assert_eq!(encoder.call_count(), 0);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].outcome, ConvertOutcome::SkippedExisting);
    }

    #[test]
    fn test_second_run_invokes_nothing() {
        let dir = seed(&["a.mp3", "b.flac"]);
        let encoder = FakeEncoder::new();
        let settings = Settings::default();

        convert_directory(dir.path(), &settings, &encoder, false, |_| {}).unwrap();
        assert_eq!(encoder.call_count(), 2);

        let report = convert_directory(dir.path(), &settings, &encoder, false, |_| {}).unwrap();
        assert_eq!(encoder.call_count(), 2);
        assert!(report
            .entries
            .iter()
            .all(|e| e.outcome == ConvertOutcome::SkippedExisting));
    }

    #[test]
    fn test_encode_failure_continues_with_next_file() {
        let dir = seed(&["a.mp3", "b.mp3"]);
        let encoder = FakeEncoder::failing_on(&["a.mp3"]);

        let report =
            convert_directory(dir.path(), &Settings::default(), &encoder, false, |_| {}).unwrap();

        assert!(report.aborted.is_none());
        assert_eq!(report.failed(), 1);
        assert_eq!(report.converted(), 1);
        assert!(!dir.path().join("a.ogg").exists());
        assert!(dir.path().join("b.ogg").exists());
    }

    #[test]
    fn test_launch_failure_aborts_remaining_files() {
        let dir = seed(&["a.mp3", "b.mp3"]);
        let encoder = FakeEncoder::unlaunchable();

        let report =
            convert_directory(dir.path(), &Settings::default(), &encoder, false, |_| {}).unwrap();

        assert_eq!(report.aborted.as_deref(), Some("fake"));
        assert!(report.entries.is_empty());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let dir = seed(&["a.mp3"]);
        let encoder = FakeEncoder::new();

        let report =
            convert_directory(dir.path(), &Settings::default(), &encoder, true, |_| {}).unwrap();

        assert_eq!(encoder.call_count(), 0);
        assert_eq!(report.entries[0].outcome, ConvertOutcome::Planned);
        assert!(!dir.path().join("a.ogg").exists());
    }

    #[test]
    fn test_observer_sees_entries_in_order() {
        let dir = seed(&["b.mp3", "a.mp3"]);
        let encoder = FakeEncoder::new();
        let mut seen = Vec::new();

        convert_directory(dir.path(), &Settings::default(), &encoder, false, |e| {
            seen.push(e.source.clone())
        })
        .unwrap();

        assert_eq!(seen, vec!["a.mp3".to_string(), "b.mp3".to_string()]);
    }
}
