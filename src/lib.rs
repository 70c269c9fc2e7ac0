// src/lib.rs

//! Tracktidy
//!
//! Batch audio converter and track renamer. Two sequential phases run over a
//! single flat directory:
//!
//! - Convert: every `.mp3`/`.wav`/`.flac` file without an existing `.ogg`
//!   counterpart is fed through an external ffmpeg encoder.
//! - Rename: all `.ogg` files are renumbered into `track1.ogg`,
//!   `track2.ogg`, ... in lexicographic order, skipping names already taken
//!   by a different file.
//!
//! The encoder sits behind the narrow [`encoder::Encoder`] trait and the
//! renumbering is planned as a pure function, so the orchestration is
//! testable without ffmpeg installed.

pub mod cli;
pub mod commands;
pub mod convert;
pub mod encoder;
mod error;
pub mod rename;
pub mod settings;
pub mod workdir;

pub use convert::{convert_directory, ConvertEntry, ConvertOutcome, ConvertReport};
pub use encoder::{locate_ffmpeg, EncodeStatus, Encoder, FfmpegEncoder};
pub use error::{Error, Result};
pub use rename::{apply_renames, plan_renames, RenameStep};
pub use settings::Settings;
