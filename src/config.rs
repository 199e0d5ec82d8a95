use std::path::PathBuf;

/// Configuration for one mirroring pass.
///
/// The defaults reproduce the canonical Arduino layout: an `examples` folder
/// whose subdirectories each hold an `.ino` sketch named after the directory,
/// mirrored into `.cpp` siblings.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Directory whose immediate subdirectories are scanned. Must exist.
    pub root_dir: PathBuf,
    /// Sketch extension, including the leading dot (e.g. ".ino").
    pub sketch_extension: String,
    /// Target extension, including the leading dot (e.g. ".cpp").
    pub target_extension: String,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("examples"),
            sketch_extension: ".ino".to_string(),
            target_extension: ".cpp".to_string(),
        }
    }
}
