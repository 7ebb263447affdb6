//! Stub template loading and rendering.
//!
//! Stubs are plain text files with literal `{{Token}}` placeholders. A
//! project may override any stub by placing a file with the same name in its
//! stubs directory; otherwise the compiled-in default is used. Rendering is a
//! literal token substitution: placeholders without a mapping entry are left
//! untouched, so generated PHP that legitimately contains `{{...}}` survives.

use crate::error::{ApicrudError, Result};
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::Path;

/// Identifies one of the stub templates the tool renders itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubKind {
    Controller,
    Request,
    Test,
}

impl StubKind {
    /// File name looked up in the project stubs directory.
    pub fn file_name(self) -> &'static str {
        match self {
            StubKind::Controller => "api-crud-controller.stub",
            StubKind::Request => "api-crud-request.stub",
            StubKind::Test => "api-crud-test.stub",
        }
    }

    fn default_content(self) -> &'static str {
        match self {
            StubKind::Controller => include_str!("../stubs/api-crud-controller.stub"),
            StubKind::Request => include_str!("../stubs/api-crud-request.stub"),
            StubKind::Test => include_str!("../stubs/api-crud-test.stub"),
        }
    }
}

/// Loads a stub template, preferring a project-local override.
///
/// # Arguments
/// * `stubs_dir` - Project stubs directory (need not exist)
/// * `kind` - Which stub to load
///
/// # Errors
/// * `ApicrudError::StubError` if a project override exists but cannot be read
pub fn load_stub(stubs_dir: &Path, kind: StubKind) -> Result<String> {
    let path = stubs_dir.join(kind.file_name());
    if path.is_file() {
        debug!("Loading stub override from {}", path.display());
        return fs::read_to_string(&path).map_err(|e| {
            ApicrudError::StubError(format!("could not read '{}': {}", path.display(), e))
        });
    }
    Ok(kind.default_content().to_string())
}

/// Renders a stub by substituting `{{Token}}` placeholders.
///
/// Every occurrence of each mapped token is replaced. Tokens that have no
/// entry in `replacements` render verbatim; this is not an error.
pub fn render(template: &str, replacements: &IndexMap<String, String>) -> String {
    let mut rendered = template.to_string();
    for (token, value) in replacements {
        rendered = rendered.replace(&format!("{{{{{}}}}}", token), value);
    }
    rendered
}
