use miette::Diagnostic;
use thiserror::Error;

/// Main error type for snip operations
#[derive(Error, Diagnostic, Debug)]
pub enum SnipError {
    #[error("IO error: {0}")]
    #[diagnostic(code(snip::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(snip::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Decode error with {path}: {message}")]
    #[diagnostic(code(snip::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Manifest error: {message}")]
    #[diagnostic(code(snip::manifest))]
    Manifest {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SnipError>;
