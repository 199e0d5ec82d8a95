//! # inoprep CLI Entry Point
//!
//! Zero-argument invocation from a library root mirrors every eligible
//! sketch under `examples/` into a `.cpp` sibling. The flags exist to point
//! the pass at a different tree or extension pair; the defaults reproduce
//! the canonical Arduino layout.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use inoprep::config::MirrorConfig;
use inoprep::fsio::OsFilesystem;
use inoprep::mirror;

#[derive(Parser)]
#[command(name = "inoprep")]
#[command(about = "Mirror Arduino example sketches into .cpp files", version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Examples root to scan (immediate subdirectories only)
    #[arg(long, default_value = "examples")]
    root: PathBuf,

    /// Sketch extension, including the leading dot
    #[arg(long, default_value = ".ino")]
    sketch_ext: String,

    /// Target extension, including the leading dot
    #[arg(long, default_value = ".cpp")]
    target_ext: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = MirrorConfig {
        root_dir: cli.root,
        sketch_extension: cli.sketch_ext,
        target_extension: cli.target_ext,
    };

    mirror::run(&config, &OsFilesystem)?;
    Ok(())
}
