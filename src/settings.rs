// src/settings.rs

//! Per-run configuration for the convert and rename phases.
//!
//! The behavior is driven by a handful of values: the recognized source
//! formats, the `.ogg` target extension, the `track<N>` naming scheme and
//! the encoder quality. They live in an immutable [`Settings`] value rather
//! than process-wide globals, so tests can point a pass at a temp directory
//! with an alternate extension set.

use std::path::Path;

/// File extensions recognized as conversion input, lowercase, without dots.
pub const SOURCE_EXTENSIONS: &[&str] = &["mp3", "wav", "flac"];

/// Extension of converted files, lowercase, without dot.
pub const TARGET_EXTENSION: &str = "ogg";

/// Base-name prefix of the sequential naming scheme (`track1`, `track2`, ...).
pub const TRACK_PREFIX: &str = "track";

/// Default Vorbis quality passed to the encoder (`-qscale:a`).
pub const DEFAULT_QUALITY: u32 = 5;

/// Immutable per-run configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Extensions converted to the target format, lowercase, without dots.
    pub source_extensions: Vec<String>,
    /// Target extension, lowercase, without dot.
    pub target_extension: String,
    /// Prefix of the sequential names imposed by the rename pass.
    pub track_prefix: String,
    /// Vorbis quality handed to the encoder.
    pub quality: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_extensions: SOURCE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            target_extension: TARGET_EXTENSION.to_string(),
            track_prefix: TRACK_PREFIX.to_string(),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl Settings {
    /// Set the encoder quality.
    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = quality;
        self
    }

    /// True if `name` carries one of the recognized source extensions.
    pub fn is_source(&self, name: &str) -> bool {
        match extension_of(name) {
            Some(ext) => self.source_extensions.iter().any(|s| *s == ext),
            None => false,
        }
    }

    /// True if `name` carries the target extension.
    pub fn is_target(&self, name: &str) -> bool {
        extension_of(name).as_deref() == Some(self.target_extension.as_str())
    }

    /// Output name for a source file: same base name, target extension.
    pub fn converted_name(&self, name: &str) -> String {
        let base = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name);
        format!("{}.{}", base, self.target_extension)
    }

    /// Sequential name for position `n`: `track<n>.<ext>`, no zero padding.
    pub fn numbered_name(&self, n: usize) -> String {
        format!("{}{}.{}", self.track_prefix, n, self.target_extension)
    }
}

/// Lowercased extension of a file name, `None` for extension-less names.
///
/// Leading-dot names like `.ogg` have no extension, matching the split the
/// rename pass was observed to use.
fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
