//! Error types for sparse matrix operations

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Source text does not follow the matrix file grammar
    InvalidFormat,
    /// Row or column outside of the matrix dimensions
    IndexOutOfBounds,
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch,
    /// Inconsistent or missing construction parameters
    InvalidArgument,
    /// Integer overflow while combining entries
    ArithmeticOverflow,
}

/// Coarse grouping of [`SpmatError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Bounds,
    Shape,
    Argument,
    Arithmetic,
}

impl SpmatError {
    /// Category this error belongs to
    pub const fn category(self) -> ErrorCategory {
        match self {
            SpmatError::InvalidFormat => ErrorCategory::Format,
            SpmatError::IndexOutOfBounds => ErrorCategory::Bounds,
            SpmatError::DimensionMismatch => ErrorCategory::Shape,
            SpmatError::InvalidArgument => ErrorCategory::Argument,
            SpmatError::ArithmeticOverflow => ErrorCategory::Arithmetic,
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SpmatError::InvalidFormat => "Input file has wrong format",
            SpmatError::IndexOutOfBounds => "Invalid row or column",
            SpmatError::DimensionMismatch => "Matrix dimensions do not match",
            SpmatError::InvalidArgument => "Must provide either file path or dimensions",
            SpmatError::ArithmeticOverflow => "Integer overflow in matrix arithmetic",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
