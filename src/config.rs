//! Project layout configuration.
//!
//! The directory layout and the delegated generator command default to the
//! standard Laravel conventions and can be overridden with a project-local
//! configuration file. Supports JSON and YAML formats (apicrud.json,
//! apicrud.yml, apicrud.yaml); the first file found wins.

use crate::error::{ApicrudError, Result};
use crate::model_name::ModelName;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["apicrud.json", "apicrud.yml", "apicrud.yaml"];

/// Paths (relative to the project root) where artifacts are read and written,
/// plus the command used for delegated framework generators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub models_dir: PathBuf,
    pub controllers_dir: PathBuf,
    pub requests_dir: PathBuf,
    pub factories_dir: PathBuf,
    pub migrations_dir: PathBuf,
    pub routes_file: PathBuf,
    pub feature_tests_dir: PathBuf,
    pub stubs_dir: PathBuf,
    /// Command prefix for delegated generators, e.g. `["php", "artisan"]`
    pub generator_command: Vec<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("app/Models"),
            controllers_dir: PathBuf::from("app/Http/Controllers/Api"),
            requests_dir: PathBuf::from("app/Http/Requests"),
            factories_dir: PathBuf::from("database/factories"),
            migrations_dir: PathBuf::from("database/migrations"),
            routes_file: PathBuf::from("routes/api.php"),
            feature_tests_dir: PathBuf::from("tests/Feature"),
            stubs_dir: PathBuf::from("stubs"),
            generator_command: vec!["php".to_string(), "artisan".to_string()],
        }
    }
}

impl Layout {
    /// Model class file, e.g. `app/Models/Post.php`.
    pub fn model_path(&self, name: &ModelName) -> PathBuf {
        self.models_dir.join(format!("{}.php", name.studly()))
    }

    /// Controller file, e.g. `app/Http/Controllers/Api/PostController.php`.
    pub fn controller_path(&self, name: &ModelName) -> PathBuf {
        self.controllers_dir.join(format!("{}.php", name.controller_name()))
    }

    /// Per-model request directory, e.g. `app/Http/Requests/Post`.
    pub fn request_dir(&self, name: &ModelName) -> PathBuf {
        self.requests_dir.join(name.studly())
    }

    /// Factory file, e.g. `database/factories/PostFactory.php`.
    pub fn factory_path(&self, name: &ModelName) -> PathBuf {
        self.factories_dir.join(format!("{}.php", name.factory_name()))
    }

    /// Feature test file, e.g. `tests/Feature/PostControllerTest.php`.
    pub fn feature_test_path(&self, name: &ModelName) -> PathBuf {
        self.feature_tests_dir.join(format!("{}.php", name.test_name()))
    }
}

/// Loads the layout for a project, trying each supported configuration file.
///
/// A missing configuration file is not an error; the default Laravel layout
/// is returned. Fields omitted from a present file keep their defaults.
///
/// # Errors
/// * `ApicrudError::ConfigError` if a present file cannot be parsed
pub fn get_layout(project_root: &Path) -> Result<Layout> {
    for file in CONFIG_FILES {
        let config_path = project_root.join(file);
        if !config_path.exists() {
            continue;
        }
        debug!("Loading configuration from {}", config_path.display());
        let content =
            std::fs::read_to_string(&config_path).map_err(ApicrudError::IoError)?;

        // Try parsing as JSON first, falling back to YAML
        let layout: Layout = match serde_json::from_str(&content) {
            Ok(v) => v,
            Err(_) => serde_yaml::from_str(&content).map_err(|e| {
                ApicrudError::ConfigError(format!("invalid configuration format: {}", e))
            })?,
        };
        return Ok(layout);
    }

    Ok(Layout::default())
}
