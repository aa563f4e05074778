use miette::Diagnostic;
use thiserror::Error;

/// Main error type for uxkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum KitError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(uxkit::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(uxkit::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(uxkit::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Navigation error: {message}")]
    #[diagnostic(code(uxkit::navigate))]
    Navigation { message: String },
}

pub type Result<T> = std::result::Result<T, KitError>;
