// src/encoder.rs

//! External encoder location and invocation.
//!
//! Conversion shells out to ffmpeg rather than linking a codec. Subprocess
//! handling follows one rule set:
//!
//! - stdin is nulled so a misbehaving encoder cannot hang the run
//! - stdout/stderr are kept off the terminal; stderr is captured and logged
//!   at debug level
//! - a non-zero exit is a recoverable per-file failure
//! - failure to start the process at all is fatal for the conversion pass

use crate::error::{Error, Result};
use crate::settings::DEFAULT_QUALITY;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Conventional encoder command name.
pub const FFMPEG: &str = "ffmpeg";

#[cfg(windows)]
const LOCAL_CANDIDATES: &[&str] = &["ffmpeg.exe", "ffmpeg"];
#[cfg(not(windows))]
const LOCAL_CANDIDATES: &[&str] = &["ffmpeg"];

/// Locate the ffmpeg executable.
///
/// A copy sitting in `program_dir` (the folder next to the running program)
/// wins over anything on `PATH`, so a bundled ffmpeg can ship alongside the
/// tool. Absence is not an error here: the bare command name is returned as
/// a last resort and only fails once an invocation is attempted.
pub fn locate_ffmpeg(program_dir: &Path) -> PathBuf {
    for candidate in LOCAL_CANDIDATES {
        let path = program_dir.join(candidate);
        if path.is_file() {
            return path;
        }
    }

    which::which(FFMPEG).unwrap_or_else(|_| PathBuf::from(FFMPEG))
}

/// Outcome of a single encode invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeStatus {
    /// Encoder exited successfully; the output file exists.
    Done,
    /// Encoder ran but exited non-zero; the input is left alone.
    Failed { code: Option<i32> },
}

/// Narrow seam over the external encoder so the conversion pass can be
/// exercised with a fake in tests.
pub trait Encoder {
    /// Encode `input` into `output`.
    ///
    /// Returns `Err(Error::EncoderLaunch)` only when the process could not
    /// be started at all; an unsuccessful exit is `Ok(EncodeStatus::Failed)`.
    fn encode(&self, input: &Path, output: &Path) -> Result<EncodeStatus>;
}

/// The real encoder: `ffmpeg -y -i <input> -c:a libvorbis -qscale:a <q> <output>`.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    program: PathBuf,
    quality: u32,
}

impl FfmpegEncoder {
    /// Create an encoder around the given ffmpeg executable or command name.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            quality: DEFAULT_QUALITY,
        }
    }

    /// Set the Vorbis quality (`-qscale:a`).
    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = quality;
        self
    }

    /// The executable this encoder invokes.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Argument vector for one invocation.
    ///
    /// `-y` overwrites without prompting; the existence check upstream is
    /// what actually guards already-converted files.
    fn args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            OsString::from("-y"),
            OsString::from("-i"),
            input.as_os_str().to_owned(),
            OsString::from("-c:a"),
            OsString::from("libvorbis"),
            OsString::from("-qscale:a"),
            OsString::from(self.quality.to_string()),
            output.as_os_str().to_owned(),
        ]
    }
}

impl Encoder for FfmpegEncoder {
    fn encode(&self, input: &Path, output: &Path) -> Result<EncodeStatus> {
        let args = self.args(input, output);
        debug!("Running {} {:?}", self.program.display(), args);

        let out = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| Error::EncoderLaunch {
                program: self.program.display().to_string(),
                source,
            })?;

        if !out.stderr.is_empty() {
            for line in String::from_utf8_lossy(&out.stderr).lines() {
                debug!("[{}] {}", FFMPEG, line);
            }
        }

        if out.status.success() {
            Ok(EncodeStatus::Done)
        } else {
            Ok(EncodeStatus::Failed {
                code: out.status.code(),
            })
        }
    }
}
