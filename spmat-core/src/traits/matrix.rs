//! Core matrix abstraction traits
//!
//! This module defines the read-only access traits shared by every
//! matrix representation in the workspace.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// Format-agnostic read access to a sparse matrix
pub trait MatrixView {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Row and column extraction on top of [`MatrixView`]
pub trait MatrixOperations: MatrixView {
    /// Get all non-zero elements in a row as `(col, value)` pairs
    ///
    /// Elements are returned in column order. An out of range row has no
    /// non-zero elements.
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all non-zero elements in a column as `(row, value)` pairs
    ///
    /// Elements are returned in row order.
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
