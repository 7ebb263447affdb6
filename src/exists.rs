//! Existence checks that keep generation idempotent.
//!
//! Artifacts the tool renders itself are keyed by path; migrations are keyed
//! by a filename substring because the framework prefixes them with a
//! timestamp; the routes file is keyed by a content substring because it is a
//! shared file not under the tool's exclusive control.

use crate::error::{ApicrudError, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Returns whether a regular file exists at `path`.
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Returns whether any file in the migrations directory matches the
/// migration name as a filename substring.
///
/// A missing migrations directory yields `false`, not an error.
pub fn migration_exists(migrations_dir: &Path, migration_name: &str) -> bool {
    if !migrations_dir.is_dir() {
        return false;
    }

    WalkDir::new(migrations_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .any(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.contains(migration_name))
        })
}

/// Returns whether the routes file already declares a resource for the given
/// plural-kebab path segment.
///
/// # Errors
/// * `ApicrudError::RoutesError` if the routes file cannot be read; unlike
///   the other checks, an absent shared routes file is a hard error for the
///   caller to handle
pub fn route_declared(routes_file: &Path, plural_kebab: &str) -> Result<bool> {
    let contents = fs::read_to_string(routes_file).map_err(|e| {
        ApicrudError::RoutesError(format!(
            "could not read '{}': {}",
            routes_file.display(),
            e
        ))
    })?;

    Ok(contents.contains(&format!("Route::apiResource('{}',", plural_kebab)))
}
