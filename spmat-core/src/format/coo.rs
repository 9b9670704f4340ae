//! Coordinate triplet form of a matrix
//!
//! Used as the serde representation of [`SparseMatrix`] so that a matrix
//! is always exchanged as `{rows, cols, entries: [[row, col, value], ...]}`
//! and re-validated on the way back in.

use alloc::vec::Vec;

use crate::{MatrixElement, SparseMatrix, SpmatError};

/// Dimensions plus `(row, col, value)` triplets in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooTriplets<T> {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<(usize, usize, T)>,
}

impl<T: MatrixElement> From<SparseMatrix<T>> for CooTriplets<T> {
    fn from(matrix: SparseMatrix<T>) -> Self {
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            entries: matrix.iter().collect(),
        }
    }
}

impl<T: MatrixElement> TryFrom<CooTriplets<T>> for SparseMatrix<T> {
    type Error = SpmatError;

    fn try_from(triplets: CooTriplets<T>) -> Result<Self, Self::Error> {
        SparseMatrix::from_triplets(triplets.rows, triplets.cols, triplets.entries)
    }
}
