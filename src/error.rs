// src/error.rs

//! Error types for tracktidy

use thiserror::Error;

/// Errors that can occur while converting and renaming tracks.
///
/// Per-file conversion failures and rename collisions are not errors; they
/// are outcome values reported by the respective pass and the loop continues.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The encoder executable could not be started at all
    #[error("Failed to launch encoder '{program}': {source}")]
    EncoderLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The directory containing the running executable could not be determined
    #[error("Cannot determine the directory of the running executable")]
    ProgramDir,
}

pub type Result<T> = std::result::Result<T, Error>;
