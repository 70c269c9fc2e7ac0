// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: directory to process
fn dir_arg() -> Arg {
    Arg::new("dir")
        .short('d')
        .long("dir")
        .value_name("PATH")
        .help("Directory to process (default: the executable's own directory)")
}

/// Common argument: dry-run switch
fn dry_run_arg() -> Arg {
    Arg::new("dry_run")
        .long("dry-run")
        .action(clap::ArgAction::SetTrue)
        .help("Show what would be done without touching any file")
}

/// Common argument: Vorbis quality
fn quality_arg() -> Arg {
    Arg::new("quality")
        .long("quality")
        .value_name("N")
        .default_value("5")
        .help("Vorbis quality passed to the encoder (-qscale:a)")
}

fn build_cli() -> Command {
    Command::new("tracktidy")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Tracktidy Contributors")
        .about("Batch-convert audio files to .ogg and renumber them as track1, track2, ...")
        .subcommand_required(false)
        .arg(dir_arg())
        .arg(quality_arg())
        .arg(dry_run_arg())
        .arg(
            Arg::new("no_pause")
                .long("no-pause")
                .action(clap::ArgAction::SetTrue)
                .help("Do not wait for Enter before exiting"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert recognized audio files (.mp3/.wav/.flac) to .ogg")
                .arg(dir_arg())
                .arg(quality_arg())
                .arg(dry_run_arg()),
        )
        .subcommand(
            Command::new("rename")
                .about("Renumber all .ogg files as track1.ogg, track2.ogg, ...")
                .arg(dir_arg())
                .arg(dry_run_arg()),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("tracktidy.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
