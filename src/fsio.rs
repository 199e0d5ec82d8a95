use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Narrow filesystem port used by the mirroring pass.
///
/// Directory listing, probing and byte copying sit behind this trait so the
/// pass can be driven against a temporary tree (or an in-memory fake) in
/// tests without touching the real working directory.
pub trait Filesystem {
    /// Names of the immediate children of `dir`, in listing order.
    fn list_children(&self, dir: &Path) -> Result<Vec<OsString>>;

    fn is_dir(&self, path: &Path) -> bool;

    /// True iff `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Copy the full byte contents of `src` to `dst`, creating `dst` if
    /// absent and overwriting it if present.
    fn copy(&self, src: &Path, dst: &Path) -> Result<()>;
}

/// The real filesystem, via `std::fs`.
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn list_children(&self, dir: &Path) -> Result<Vec<OsString>> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory '{}'", dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read an entry under '{}'", dir.display()))?;
            names.push(entry.file_name());
        }
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn copy(&self, src: &Path, dst: &Path) -> Result<()> {
        fs::copy(src, dst).with_context(|| {
            format!("Failed to copy '{}' to '{}'", src.display(), dst.display())
        })?;
        Ok(())
    }
}
