// src/commands.rs
//! Command handlers for the tracktidy CLI

use crate::convert::{self, ConvertOutcome, ConvertReport};
use crate::encoder::{self, FfmpegEncoder};
use crate::rename::{apply_renames, plan_renames, RenameStep};
use crate::settings::Settings;
use crate::workdir;
use anyhow::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Full pass: convert, then rename, then wait for Enter.
pub fn cmd_run(dir: Option<PathBuf>, quality: u32, dry_run: bool, no_pause: bool) -> Result<()> {
    let dir = resolve_dir(dir)?;
    println!("Folder: {}", dir.display());

    let settings = Settings::default().with_quality(quality);
    let encoder = resolve_encoder(&dir, &settings);
    println!("Using encoder: {}", encoder.program().display());

    run_convert_phase(&dir, &settings, &encoder, dry_run)?;
    run_rename_phase(&dir, &settings, dry_run)?;

    if !no_pause {
        pause();
    }
    Ok(())
}

/// Conversion phase only.
pub fn cmd_convert(dir: Option<PathBuf>, quality: u32, dry_run: bool) -> Result<()> {
    let dir = resolve_dir(dir)?;
    let settings = Settings::default().with_quality(quality);
    let encoder = resolve_encoder(&dir, &settings);

    run_convert_phase(&dir, &settings, &encoder, dry_run)?;
    Ok(())
}

/// Rename phase only.
pub fn cmd_rename(dir: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let dir = resolve_dir(dir)?;
    let settings = Settings::default();

    run_rename_phase(&dir, &settings, dry_run)?;
    Ok(())
}

/// Explicit directory, or the one the executable sits in.
fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(workdir::program_dir()?),
    }
}

/// Build the real encoder, preferring an ffmpeg bundled next to the program.
///
/// When the executable's own directory cannot be determined, the sibling
/// check is skipped and the bare command name is used; absence surfaces at
/// invocation time, per the error design.
fn resolve_encoder(dir: &Path, settings: &Settings) -> FfmpegEncoder {
    let program = match workdir::program_dir() {
        Ok(exe_dir) => encoder::locate_ffmpeg(&exe_dir),
        Err(_) => encoder::locate_ffmpeg(dir),
    };
    FfmpegEncoder::new(program).with_quality(settings.quality)
}

fn run_convert_phase(
    dir: &Path,
    settings: &Settings,
    encoder: &FfmpegEncoder,
    dry_run: bool,
) -> Result<ConvertReport> {
    println!("=== Converting to .{} ===", settings.target_extension);

    let report = convert::convert_directory(dir, settings, encoder, dry_run, |entry| {
        match &entry.outcome {
            ConvertOutcome::Converted => {
                println!("Converted: {} -> {}", entry.source, entry.output)
            }
            ConvertOutcome::Planned => {
                println!("Would convert: {} -> {}", entry.source, entry.output)
            }
            ConvertOutcome::SkippedExisting => {
                println!("Skipping (already converted): {}", entry.source)
            }
            ConvertOutcome::Failed { code: Some(code) } => {
                println!("Conversion failed (exit code {}): {}", code, entry.source)
            }
            ConvertOutcome::Failed { code: None } => {
                println!("Conversion failed: {}", entry.source)
            }
        }
    })?;

    if let Some(program) = &report.aborted {
        println!(
            "Error: encoder '{}' could not be started. Install ffmpeg or place it next to this program.",
            program
        );
    }

    info!(
        "Conversion pass finished: {} converted, {} failed",
        report.converted(),
        report.failed()
    );
    Ok(report)
}

fn run_rename_phase(dir: &Path, settings: &Settings, dry_run: bool) -> Result<Vec<RenameStep>> {
    println!();
    println!("=== Renaming .{} files ===", settings.target_extension);

    let names = workdir::list_file_names(dir)?;
    let self_name = workdir::self_file_name();
    let steps = plan_renames(&names, self_name.as_deref(), settings);

    if steps.is_empty() {
        println!("No .{} files to rename.", settings.target_extension);
        return Ok(steps);
    }

    println!("Found {} .{} file(s)", steps.len(), settings.target_extension);

    for step in &steps {
        if !step.applied {
            println!("Skipping: {} -> {} (name already taken)", step.from, step.to);
        } else if dry_run {
            println!("Would rename: {} -> {}", step.from, step.to);
        } else {
            println!("{} -> {}", step.from, step.to);
        }
    }

    if !dry_run {
        apply_renames(dir, &steps)?;
    }

    Ok(steps)
}

/// Block for an Enter keypress so a double-clicked terminal window stays
/// readable.
fn pause() {
    println!();
    print!("Done. Press Enter to close...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
}
