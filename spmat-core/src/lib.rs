#![no_std]

//! spmat core - sparse integer matrix definitions
//!
//! This crate provides the sparse matrix storage, the arithmetic engine
//! and the text format definitions. It performs no I/O; file access lives
//! in the `spmat` crate.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{
    CooTriplets, DecodeConfig, DuplicatePolicy, TextDecoder, TextEncoder, ZeroPolicy,
};
pub use matrix::{IntMatrix, SparseMatrix};
pub use ops::{add, multiply, subtract};
pub use traits::{DataType, MatrixElement, MatrixOperations, MatrixView};
