//! Error handling for the apicrud application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for apicrud operations.
///
/// This enum represents all possible errors that can occur within the application.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum ApicrudError {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while loading or rendering stub templates
    #[error("Stub error: {0}.")]
    StubError(String),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents failures of the delegated framework generator command
    #[error("Generator error: {0}.")]
    GeneratorError(String),

    /// Represents errors while reading or merging the shared routes file
    #[error("Routes error: {0}.")]
    RoutesError(String),

    /// Represents failures of interactive prompts
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with ApicrudError as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, ApicrudError>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The ApicrudError to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: ApicrudError) {
    eprintln!("{}", err);
    std::process::exit(1);
}
