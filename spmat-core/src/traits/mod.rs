//! Abstract interfaces for sparse matrices
//!
//! Element constraints and read-only access traits. The concrete storage
//! lives in [`crate::matrix`].

pub mod element;
pub mod matrix;

pub use element::{DataType, MatrixElement};
pub use matrix::{MatrixOperations, MatrixView};
