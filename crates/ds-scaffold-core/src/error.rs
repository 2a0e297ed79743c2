//! Unified error types for ds-scaffold.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding a project.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Input ---

    /// The project name cannot be used as a directory name.
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    /// An output file name rendered to something that is not a single path segment.
    #[error("invalid output file name '{name}': {reason}")]
    InvalidOutputName { name: String, reason: &'static str },

    // --- Templates ---

    /// A template file could not be read (missing, unreadable, or not a builtin).
    #[error("template not found: {path}")]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Configuration ---

    /// The scaffold config file could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scaffold config file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The scaffold config parsed but describes an unusable file table.
    #[error("invalid scaffold config: {0}")]
    InvalidConfig(String),

    // --- Output ---

    /// A generated file could not be written.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
