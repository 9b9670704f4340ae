//! Summary information about a matrix

use spmat_core::{DataType, MatrixElement, SparseMatrix};

/// Shape, fill and element type of a matrix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixInfo {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    pub data_type: DataType,
    /// Fraction of cells holding a non-zero, 0.0 for an empty shape
    pub density: f64,
}

impl MatrixInfo {
    pub fn of<T: MatrixElement>(matrix: &SparseMatrix<T>) -> Self {
        let cells = matrix.rows() as f64 * matrix.cols() as f64;
        let density = if cells > 0.0 {
            matrix.nnz() as f64 / cells
        } else {
            0.0
        };
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            nnz: matrix.nnz(),
            data_type: T::data_type(),
            density,
        }
    }
}

impl std::fmt::Display for MatrixInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} {} matrix, {} non-zeros ({:.4}% dense)",
            self.rows,
            self.cols,
            self.data_type,
            self.nnz,
            self.density * 100.0
        )
    }
}
