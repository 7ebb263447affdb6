//! Core generation orchestration.
//!
//! Combines the name normalizer, stub renderer, existence checks, file
//! emitter, route merger and delegated generators into the sequential flow
//! that scaffolds one model. Steps are never retried and never branch back;
//! a failed optional step is reported and the run continues.

use crate::config::Layout;
use crate::emitter;
use crate::error::Result;
use crate::exists;
use crate::generator::ArtifactGenerator;
use crate::model_name::ModelName;
use crate::prompt::Prompter;
use crate::routes;
use crate::stub::{self, StubKind};
use indexmap::IndexMap;
use log::warn;
use std::path::{Path, PathBuf};

/// The three request classes generated per model.
const REQUEST_TYPES: [&str; 3] = ["Index", "Create", "Update"];

/// Orchestrates scaffolding for one model.
pub struct Processor<'a> {
    project_root: PathBuf,
    layout: Layout,
    prompt: &'a dyn Prompter,
    generator: &'a dyn ArtifactGenerator,
}

impl<'a> Processor<'a> {
    pub fn new(
        project_root: PathBuf,
        layout: Layout,
        prompt: &'a dyn Prompter,
        generator: &'a dyn ArtifactGenerator,
    ) -> Self {
        Self { project_root, layout, prompt, generator }
    }

    /// Runs the full generation flow.
    ///
    /// # Flow
    /// 1. Resolve the model name (prompting when absent)
    /// 2. Offer to create a missing model class (and optionally its migration)
    /// 3. Controller + resource + request classes, behind one confirmation
    /// 4. Factory, unless present
    /// 5. Migration, unless one matches by filename
    /// 6. API route merge
    /// 7. Feature test, unless present
    ///
    /// Steps 2-7 convert their own failures into warnings so that one broken
    /// sub-step does not abort the rest of the run.
    pub fn run(&self, model_arg: Option<String>) -> Result<()> {
        let name = self.resolve_model_name(model_arg)?;
        if let Err(err) = self.ensure_model_class(&name) {
            warn!("{}", err);
        }

        println!("Generating API CRUD functionality");

        if let Err(err) = self.generate_controller_and_requests(&name) {
            warn!("{}", err);
        }
        if let Err(err) = self.generate_factory(&name) {
            warn!("{}", err);
        }
        if let Err(err) = self.generate_migration(&name) {
            warn!("{}", err);
        }
        if let Err(err) = self.merge_route(&name) {
            warn!("{}", err);
        }
        if let Err(err) = self.generate_test(&name) {
            warn!("{}", err);
        }

        println!("API CRUD for '{}' generated successfully!", name);
        Ok(())
    }

    fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(relative)
    }

    fn resolve_model_name(&self, model_arg: Option<String>) -> Result<ModelName> {
        let raw = match model_arg {
            Some(raw) => raw,
            None => {
                println!("No model name provided.");
                self.prompt.input("Please enter the model name")?
            }
        };
        ModelName::parse(&raw)
    }

    /// Offers to create the model class (and optionally a migration for it)
    /// when it does not exist yet. Declining is not a failure.
    fn ensure_model_class(&self, name: &ModelName) -> Result<()> {
        let model_path = self.path(self.layout.model_path(name));
        if exists::file_exists(&model_path) {
            return Ok(());
        }

        warn!("Model {} does not exist.", name);
        let create = self
            .prompt
            .confirm(&format!("Do you want to create the model '{}'?", name))?;
        if !create {
            return Ok(());
        }

        self.generator.make_model(name)?;
        println!("Model {} created successfully.", name);

        let with_migration = self.prompt.confirm(&format!(
            "Do you want to create a migration file for '{}'?",
            name
        ))?;
        if with_migration {
            self.generator.make_migration(&name.migration_name())?;
            println!("Migration for {} created successfully.", name);
        }

        Ok(())
    }

    /// One combined confirmation gates the controller, the resource and the
    /// three request classes. Controller and resource are always written;
    /// request files already present are skipped.
    fn generate_controller_and_requests(&self, name: &ModelName) -> Result<()> {
        let create = self
            .prompt
            .confirm(&format!("Do you want to create a controller for '{}'?", name))?;
        if !create {
            return Ok(());
        }

        let stubs_dir = self.path(&self.layout.stubs_dir);
        let template = stub::load_stub(&stubs_dir, StubKind::Controller)?;
        let mut replacements = IndexMap::new();
        replacements.insert("ModelName".to_string(), name.studly().to_string());
        replacements.insert("ModelNameVariable".to_string(), name.camel());

        let controller_path = self.path(self.layout.controller_path(name));
        emitter::write_file(&controller_path, &stub::render(&template, &replacements))?;
        println!("Generated API Controller: {}", controller_path.display());

        self.generator.make_resource(name)?;
        println!("Generated API Resource: {}", name.resource_name());

        self.generate_requests(name)
    }

    fn generate_requests(&self, name: &ModelName) -> Result<()> {
        let stubs_dir = self.path(&self.layout.stubs_dir);
        let template = stub::load_stub(&stubs_dir, StubKind::Request)?;
        let request_dir = self.path(self.layout.request_dir(name));

        for request_type in REQUEST_TYPES {
            let request_path = request_dir.join(format!("{}Request.php", request_type));
            if exists::file_exists(&request_path) {
                warn!("{}Request for {} already exists.", request_type, name);
                continue;
            }

            let mut replacements = IndexMap::new();
            replacements.insert("ModelName".to_string(), name.studly().to_string());
            replacements.insert("Type".to_string(), request_type.to_string());

            emitter::write_file(&request_path, &stub::render(&template, &replacements))?;
            println!("Generated {}Request: {}", request_type, request_path.display());
        }

        Ok(())
    }

    fn generate_factory(&self, name: &ModelName) -> Result<()> {
        let factory_path = self.path(self.layout.factory_path(name));
        if exists::file_exists(&factory_path) {
            warn!("Factory for {} already exists.", name);
            return Ok(());
        }

        self.generator.make_factory(name)?;
        println!("Generated Factory: {}", name.factory_name());
        Ok(())
    }

    fn generate_migration(&self, name: &ModelName) -> Result<()> {
        let migration_name = name.migration_name();
        let migrations_dir = self.path(&self.layout.migrations_dir);
        if exists::migration_exists(&migrations_dir, &migration_name) {
            warn!("Migration already exists for '{}'.", name);
            return Ok(());
        }

        self.generator.make_migration(&migration_name)?;
        println!("Generated migration: {}", migration_name);
        Ok(())
    }

    fn merge_route(&self, name: &ModelName) -> Result<()> {
        let routes_file = self.path(&self.layout.routes_file);
        routes::merge_api_route(&routes_file, name, self.generator)
    }

    fn generate_test(&self, name: &ModelName) -> Result<()> {
        let test_path = self.path(self.layout.feature_test_path(name));
        if exists::file_exists(&test_path) {
            warn!("Test file for {} already exists.", name);
            return Ok(());
        }

        let stubs_dir = self.path(&self.layout.stubs_dir);
        let template = stub::load_stub(&stubs_dir, StubKind::Test)?;

        let mut replacements = IndexMap::new();
        replacements.insert("ModelName".to_string(), name.studly().to_string());
        replacements.insert("ModelNameVariable".to_string(), name.camel());
        replacements.insert("ModelNamePlural".to_string(), name.plural_camel());
        replacements.insert("ModelFactory".to_string(), name.factory_name());
        replacements.insert("model_plural_snake_case".to_string(), name.plural_snake());

        emitter::write_file(&test_path, &stub::render(&template, &replacements))?;
        println!("Generated Test File: {}", test_path.display());
        Ok(())
    }
}
