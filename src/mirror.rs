//! The sketch mirroring pass.
//!
//! Scans the immediate subdirectories of the examples root; each directory
//! `X` containing a regular file `X.ino` gets a sibling `X.cpp` holding an
//! exact byte copy of the sketch. Only direct children of the root are
//! inspected, and only for a sketch named exactly after its directory.
//!
//! CAUTION: an existing target file is overwritten without confirmation or
//! backup. Hand edits to mirrored `.cpp` files do not survive a pass.

use anyhow::Result;
use colored::*;

use crate::config::MirrorConfig;
use crate::fsio::Filesystem;

/// Run one mirroring pass and return the number of files copied.
///
/// Directories without a matching sketch and non-directory entries at the
/// root are silently skipped. Any filesystem failure (missing root,
/// unreadable entry, failed copy) aborts the pass.
pub fn run(config: &MirrorConfig, fs: &dyn Filesystem) -> Result<usize> {
    println!(
        "{} {}",
        "🔧".cyan(),
        format!(
            "Mirroring {} sketches to {} files...",
            config.sketch_extension, config.target_extension
        )
        .bold()
    );

    let mut copied = 0;
    for name in fs.list_children(&config.root_dir)? {
        let candidate_dir = config.root_dir.join(&name);
        if !fs.is_dir(&candidate_dir) {
            continue;
        }

        let mut sketch_name = name.clone();
        sketch_name.push(&config.sketch_extension);
        let sketch_path = candidate_dir.join(&sketch_name);
        if !fs.is_file(&sketch_path) {
            continue;
        }

        let mut target_name = name;
        target_name.push(&config.target_extension);
        let target_path = candidate_dir.join(&target_name);

        fs.copy(&sketch_path, &target_path)?;
        println!(
            "   {} {} -> {}",
            "→".dimmed(),
            sketch_path.display(),
            target_path.display()
        );
        copied += 1;
    }

    println!("{} Done. {} file(s) mirrored.", "✓".green(), copied);
    Ok(copied)
}
