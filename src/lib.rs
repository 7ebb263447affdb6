//! apicrud is a scaffolding generator for Laravel-style API CRUD: given a
//! model name it emits a controller, request validation classes, a resource,
//! a factory, a migration, a route registration and a feature test by
//! substituting name variants into stub templates, idempotently.

/// Command-line interface module for the apicrud application
pub mod cli;

/// Project layout configuration
/// Supports JSON and YAML formats (apicrud.json, apicrud.yml, apicrud.yaml)
pub mod config;

/// Writing rendered artifacts to the project tree
pub mod emitter;

/// Error types and handling for the apicrud application
pub mod error;

/// Existence checks that keep generation idempotent
pub mod exists;

/// Delegated framework generator invocations (make:model, install:api, ...)
pub mod generator;

/// Logger configuration
pub mod logger;

/// Model name normalization and case derivation
pub mod model_name;

/// Core generation orchestration
/// Combines all components to scaffold one model
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Merging resource registrations into the shared API routes file
pub mod routes;

/// Stub template loading and rendering
pub mod stub;
