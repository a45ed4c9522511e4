//! Error handling for the Stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Stencil operations.
///
/// Descriptor and action failures carry the identifier, token name or action
/// index they refer to, so callers always learn which part of a manifest
/// failed. None of these are retried automatically: they stem from static
/// misconfiguration, not transient conditions.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// A manifest or view descriptor has a bad shape; raised at load time,
    /// never at use time
    #[error("Malformed descriptor: {reason}")]
    MalformedDescriptor { reason: String },

    /// A `{{token}}` had no matching parameter value; hard error, never a
    /// silent pass-through
    #[error("Unresolved parameter: '{name}'")]
    UnresolvedParameter { name: String },

    /// An action's source location does not resolve to an existing file
    /// under the template root
    #[error("Source not found for action {index}: '{location}'")]
    SourceNotFound { index: usize, location: String },

    /// An action's rename target escapes the output root
    #[error("Destination path for action {index} escapes the output root: '{rename}'")]
    DestinationPathInvalid { index: usize, rename: String },

    /// A destination file already exists and the overwrite policy forbids
    /// replacing it
    #[error("Destination already exists: '{path}'")]
    DestinationExists { path: String },

    #[error("Output directory already exists: '{output_dir}'. Use --force to overwrite it")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Template does not exist: '{template_dir}'")]
    TemplateDoesNotExistsError { template_dir: String },

    /// No factory is registered for the requested descriptor id
    #[error("Unknown descriptor: '{id}'")]
    UnknownDescriptor { id: String },

    /// A `--param` argument was not of the form KEY=VALUE
    #[error("Invalid parameter argument: '{arg}' (expected KEY=VALUE)")]
    InvalidParameter { arg: String },

    /// Represents errors during user interaction
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// Represents errors in processing .stencilignore patterns
    #[error("Ignore pattern error: {0}")]
    GlobSetError(#[from] globset::Error),

    #[error(transparent)]
    Git2Error(#[from] git2::Error),

    /// Represents errors that occur while loading a template source
    #[error("Template error: {0}")]
    TemplateError(String),
}

/// Convenience type alias for Results with Stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
