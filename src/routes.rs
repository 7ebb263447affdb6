//! Merging resource registrations into the shared API routes file.
//!
//! The routes file is shared with code the tool does not own, so merging is
//! append-only and keyed by a substring check on the plural-kebab path
//! segment. Appending the same resource twice yields exactly one
//! registration.

use crate::error::{ApicrudError, Result};
use crate::exists;
use crate::generator::ArtifactGenerator;
use crate::model_name::ModelName;
use log::warn;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Builds the fixed-shape registration block appended for one model.
pub fn build_route_block(name: &ModelName) -> String {
    format!(
        "\nuse App\\Http\\Controllers\\Api\\{controller};\n\nRoute::apiResource('{segment}', {controller}::class)->names('{route_names}');\n",
        controller = name.controller_name(),
        segment = name.plural_kebab(),
        route_names = name.plural_snake(),
    )
}

/// Merges the resource registration for `name` into the routes file.
///
/// When the routes file is absent the `install:api` bootstrap generator is
/// invoked once and the presence check retried. An already-registered
/// resource is skipped with a warning.
///
/// # Errors
/// * `ApicrudError::RoutesError` if the routes file is still absent after
///   bootstrapping, or cannot be read
pub fn merge_api_route(
    routes_file: &Path,
    name: &ModelName,
    generator: &dyn ArtifactGenerator,
) -> Result<()> {
    if !routes_file.exists() {
        println!("Routes file {} is missing; bootstrapping.", routes_file.display());
        generator.bootstrap_api_routes()?;

        if !routes_file.exists() {
            return Err(ApicrudError::RoutesError(format!(
                "could not locate '{}'; ensure your routes directory exists",
                routes_file.display()
            )));
        }
        println!("{} route file created.", routes_file.display());
    }

    let segment = name.plural_kebab();
    if exists::route_declared(routes_file, &segment)? {
        warn!("Route for '{}' already exists in {}.", segment, routes_file.display());
        return Ok(());
    }

    let block = build_route_block(name);
    let mut file = OpenOptions::new()
        .append(true)
        .open(routes_file)
        .map_err(ApicrudError::IoError)?;
    file.write_all(block.as_bytes()).map_err(ApicrudError::IoError)?;

    println!(
        "Added route: Route::apiResource('{}', {}::class)->names('{}');",
        segment,
        name.controller_name(),
        name.plural_snake()
    );
    Ok(())
}
