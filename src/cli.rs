// src/cli.rs
//! CLI definitions for tracktidy
//!
//! Running with no subcommand performs the full pass (convert, then rename)
//! against the directory the executable sits in, then waits for an Enter
//! keypress so the terminal window does not vanish when the tool is launched
//! from a file manager. The `convert` and `rename` subcommands run a single
//! phase and never pause.

use crate::settings::DEFAULT_QUALITY;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tracktidy")]
#[command(author, version)]
#[command(
    about = "Batch-convert audio files to .ogg and renumber them as track1, track2, ...",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to process (default: the executable's own directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Vorbis quality passed to the encoder (-qscale:a)
    #[arg(long, default_value_t = DEFAULT_QUALITY)]
    pub quality: u32,

    /// Show what would be done without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Do not wait for Enter before exiting
    #[arg(long)]
    pub no_pause: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert recognized audio files (.mp3/.wav/.flac) to .ogg
    Convert {
        /// Directory to process (default: the executable's own directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Vorbis quality passed to the encoder (-qscale:a)
        #[arg(long, default_value_t = DEFAULT_QUALITY)]
        quality: u32,

        /// Show what would be converted without invoking the encoder
        #[arg(long)]
        dry_run: bool,
    },
    /// Renumber all .ogg files as track1.ogg, track2.ogg, ...
    Rename {
        /// Directory to process (default: the executable's own directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Show the rename plan without touching any file
        #[arg(long)]
        dry_run: bool,
    },
}
