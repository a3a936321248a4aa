use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gradx operations
#[derive(Error, Diagnostic, Debug)]
pub enum GradxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(gradx::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(gradx::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(gradx::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Theme error: {message}")]
    #[diagnostic(code(gradx::theme))]
    Theme {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(gradx::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GradxError>;
