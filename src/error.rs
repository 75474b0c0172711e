//! Error types and handling for ebstage
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ebstage operations
#[derive(Error, Diagnostic, Debug)]
pub enum EbstageError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(ebstage::config::not_found),
        help("Create an ebstage.yaml next to your app or pass --config")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(ebstage::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(ebstage::config::invalid))]
    ConfigInvalid { message: String },

    // Template errors
    #[error("Failed to render template '{name}'")]
    #[diagnostic(
        code(ebstage::template::render_failed),
        help("Check that the override file does not contain stray template syntax")
    )]
    TemplateRenderFailed { name: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(ebstage::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(ebstage::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Archive errors
    #[error("Failed to archive bundle: {message}")]
    #[diagnostic(
        code(ebstage::archive::failed),
        help("Check free disk space and permissions on the build directory")
    )]
    ArchiveFailed { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ebstage::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for EbstageError {
    fn from(err: std::io::Error) -> Self {
        EbstageError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for EbstageError {
    fn from(err: serde_yaml::Error) -> Self {
        EbstageError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, EbstageError>;
