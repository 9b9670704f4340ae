//! Error type for file-backed matrix operations

use spmat_core::{ErrorCategory, SpmatError};
use thiserror::Error;

/// Result type alias using spmat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the `spmat` crate
#[derive(Error, Debug)]
pub enum Error {
    /// Source or sink could not be opened, read or written
    #[error("Cannot open file: {0}")]
    Io(#[from] std::io::Error),

    /// Format, bounds, shape, argument or overflow error from the core
    #[error(transparent)]
    Matrix(#[from] SpmatError),

    /// JSON export or import failed
    #[error("JSON conversion failed: {0}")]
    Json(String),
}

/// Caller-visible error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    Index,
    DimensionMismatch,
    InvalidArgument,
    Overflow,
    Export,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::Matrix(err) => match err.category() {
                ErrorCategory::Format => ErrorKind::Format,
                ErrorCategory::Bounds => ErrorKind::Index,
                ErrorCategory::Shape => ErrorKind::DimensionMismatch,
                ErrorCategory::Argument => ErrorKind::InvalidArgument,
                ErrorCategory::Arithmetic => ErrorKind::Overflow,
            },
            Error::Json(_) => ErrorKind::Export,
        }
    }
}
