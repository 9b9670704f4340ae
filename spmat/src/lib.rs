//! spmat - sparse integer matrices with text file I/O
//!
//! This library reads and writes sparse integer matrices in a small
//! line-oriented text format and combines them with addition,
//! subtraction and multiplication.
//!
//! ## Architecture
//!
//! spmat keeps pure definitions apart from I/O:
//!
//! - **spmat-core**: storage, arithmetic and the text codec as pure functions (no I/O)
//! - **spmat**: file access, construction from parameters, JSON export, logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{IntMatrix, SpmatFile};
//!
//! fn example() -> spmat::Result<()> {
//!     let a: IntMatrix = SpmatFile::read_matrix("a.txt")?;
//!     let b: IntMatrix = SpmatFile::read_matrix("b.txt")?;
//!
//!     let product = spmat::multiply(&a, &b)?;
//!     println!("product[0, 0] = {}", product.get(0, 0)?);
//!
//!     SpmatFile::write_matrix(&product, "product.txt")?;
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 5)
//! (2, 1, -4)
//! ```
//!
//! Blank lines are ignored anywhere. Duplicate coordinates keep the last
//! value and zero values are not stored; see [`DecodeConfig`] to reject
//! either case instead.

// Re-export core abstractions and format definitions
pub use spmat_core::{
    // Storage and arithmetic
    add, multiply, subtract, IntMatrix, SparseMatrix,
    // Core traits
    DataType, MatrixElement, MatrixOperations, MatrixView,
    // Format definitions
    CooTriplets, DecodeConfig, DuplicatePolicy, TextDecoder, TextEncoder, ZeroPolicy,
    // Error handling
    ErrorCategory, SpmatError,
};

// Implementation modules
pub mod builder;
pub mod error;
#[cfg(feature = "serde")]
pub mod export;
pub mod file_io;
pub mod metadata;

// Public exports
pub use builder::MatrixBuilder;
pub use error::{Error, ErrorKind, Result};
pub use file_io::SpmatFile;
pub use metadata::MatrixInfo;
