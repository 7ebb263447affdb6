//! Model name normalization and case derivation.
//!
//! A [`ModelName`] holds the canonical singular StudlyCase form of a
//! user-supplied name. Every other rendering (camel, snake, kebab, plural
//! variants, class names) is derived from that canonical form on demand.

use crate::error::{ApicrudError, Result};
use cruet::Inflector;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Accepted raw input: a letter followed by letters, digits, '_' or '-'.
fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap())
}

/// Canonical model name, stored as singular StudlyCase (e.g. `Post`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName {
    studly: String,
}

impl ModelName {
    /// Normalizes raw user input into the canonical form.
    ///
    /// The input is trimmed, validated against the accepted character set,
    /// reduced to its singular form and converted to StudlyCase:
    /// `"posts"` becomes `Post`, `"blog-posts"` becomes `BlogPost`.
    ///
    /// # Errors
    /// * `ApicrudError::ValidationError` if the input is empty or contains
    ///   characters outside the accepted set
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ApicrudError::ValidationError(
                "model name must not be empty".to_string(),
            ));
        }
        if !name_pattern().is_match(raw) {
            return Err(ApicrudError::ValidationError(format!(
                "'{}' is not a valid model name: expected a letter followed by letters, digits, '_' or '-'",
                raw
            )));
        }

        // Fold to snake_case first so singularization sees the compound as
        // one word chain; to_singular on kebab input drops leading segments.
        Ok(Self { studly: raw.to_snake_case().to_singular().to_pascal_case() })
    }

    /// Canonical StudlyCase form, e.g. `Post`.
    pub fn studly(&self) -> &str {
        &self.studly
    }

    /// camelCase form, e.g. `post`.
    pub fn camel(&self) -> String {
        self.studly.to_camel_case()
    }

    /// snake_case form, e.g. `post`.
    pub fn snake(&self) -> String {
        self.studly.to_snake_case()
    }

    /// kebab-case form, e.g. `post`.
    pub fn kebab(&self) -> String {
        self.studly.to_kebab_case()
    }

    /// Plural snake_case form, e.g. `posts`; used for route names and tables.
    pub fn plural_snake(&self) -> String {
        self.snake().to_plural()
    }

    /// Plural kebab-case form, e.g. `posts`; used as the route path segment.
    pub fn plural_kebab(&self) -> String {
        self.plural_snake().to_kebab_case()
    }

    /// Plural camelCase form, e.g. `posts`; used as a collection variable.
    pub fn plural_camel(&self) -> String {
        self.plural_snake().to_camel_case()
    }

    /// Controller class name, e.g. `PostController`.
    pub fn controller_name(&self) -> String {
        format!("{}Controller", self.studly)
    }

    /// Resource class name, e.g. `PostResource`.
    pub fn resource_name(&self) -> String {
        format!("{}Resource", self.studly)
    }

    /// Factory class name, e.g. `PostFactory`.
    pub fn factory_name(&self) -> String {
        format!("{}Factory", self.studly)
    }

    /// Feature test class name, e.g. `PostControllerTest`.
    pub fn test_name(&self) -> String {
        format!("{}ControllerTest", self.studly)
    }

    /// Migration name, e.g. `create_posts_table`.
    pub fn migration_name(&self) -> String {
        format!("create_{}_table", self.plural_snake())
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.studly)
    }
}
