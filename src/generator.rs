//! Delegated framework generators.
//!
//! Model classes, migrations, resources, factories and the API routes
//! bootstrap are produced by the framework's own generator command; this tool
//! only decides when to invoke them and with which name arguments. The
//! [`ArtifactGenerator`] trait keeps that boundary injectable so orchestration
//! logic can be unit-tested against fakes.

use crate::error::{ApicrudError, Result};
use crate::model_name::ModelName;
use log::debug;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// One method per artifact kind the tool delegates rather than renders.
pub trait ArtifactGenerator {
    /// Creates the model class, e.g. `make:model App\Models\Post`.
    fn make_model(&self, name: &ModelName) -> Result<()>;

    /// Creates a migration with the given name, e.g. `create_posts_table`.
    fn make_migration(&self, migration_name: &str) -> Result<()>;

    /// Creates the API resource class, e.g. `PostResource`.
    fn make_resource(&self, name: &ModelName) -> Result<()>;

    /// Creates the model factory, e.g. `PostFactory`.
    fn make_factory(&self, name: &ModelName) -> Result<()>;

    /// Creates the shared API routes file (`install:api`).
    fn bootstrap_api_routes(&self) -> Result<()>;
}

/// Production generator that shells out to the framework command configured
/// in the layout (by default `php artisan`).
pub struct ShellGenerator {
    project_root: PathBuf,
    command: Vec<String>,
}

impl ShellGenerator {
    pub fn new(project_root: PathBuf, command: Vec<String>) -> Self {
        Self { project_root, command }
    }

    fn call(&self, args: &[String]) -> Result<()> {
        let program = self.command.first().ok_or_else(|| {
            ApicrudError::GeneratorError("generator command is empty".to_string())
        })?;

        debug!("Running generator: {} {}", self.command.join(" "), args.join(" "));

        let status = Command::new(program)
            .args(&self.command[1..])
            .args(args)
            .current_dir(&self.project_root)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(ApicrudError::IoError)?;

        if !status.success() {
            return Err(ApicrudError::GeneratorError(format!(
                "'{}' failed with status: {}",
                args.join(" "),
                status
            )));
        }

        Ok(())
    }
}

impl ArtifactGenerator for ShellGenerator {
    fn make_model(&self, name: &ModelName) -> Result<()> {
        self.call(&[
            "make:model".to_string(),
            format!("App\\Models\\{}", name.studly()),
        ])
    }

    fn make_migration(&self, migration_name: &str) -> Result<()> {
        self.call(&["make:migration".to_string(), migration_name.to_string()])
    }

    fn make_resource(&self, name: &ModelName) -> Result<()> {
        self.call(&["make:resource".to_string(), name.resource_name()])
    }

    fn make_factory(&self, name: &ModelName) -> Result<()> {
        self.call(&[
            "make:factory".to_string(),
            name.factory_name(),
            "--model".to_string(),
            name.studly().to_string(),
        ])
    }

    fn bootstrap_api_routes(&self) -> Result<()> {
        self.call(&["install:api".to_string()])
    }
}
