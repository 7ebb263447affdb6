//! Writing rendered artifacts to the project tree.

use crate::error::{ApicrudError, Result};
use std::fs;
use std::path::Path;

/// Writes content to the destination path, creating missing parent
/// directories first.
///
/// Existing files are overwritten; callers guard artifacts that must not be
/// regenerated with the checks in [`crate::exists`] before calling this.
/// There is no rollback: if a later artifact in a run fails, files written
/// earlier remain in place.
pub fn write_file<P: AsRef<Path>>(dest_path: P, content: &str) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(ApicrudError::IoError)?;
    }
    fs::write(dest_path, content).map_err(ApicrudError::IoError)
}
