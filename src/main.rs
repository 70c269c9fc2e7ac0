// src/main.rs

use anyhow::Result;
use clap::Parser;
use tracktidy::cli::{Cli, Commands};
use tracktidy::commands;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            dir,
            quality,
            dry_run,
        }) => commands::cmd_convert(dir, quality, dry_run),
        Some(Commands::Rename { dir, dry_run }) => commands::cmd_rename(dir, dry_run),
        None => commands::cmd_run(cli.dir, cli.quality, cli.dry_run, cli.no_pause),
    }
}
