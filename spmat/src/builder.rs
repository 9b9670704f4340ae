//! Matrix construction from either a file or explicit dimensions

use spmat_core::{DecodeConfig, MatrixElement, SparseMatrix, SpmatError};
use std::path::{Path, PathBuf};

use crate::{Result, SpmatFile};

/// Builds a matrix from a source file or from `rows`/`cols`
///
/// A non-empty path takes precedence over dimensions. Without one both
/// dimensions are required; anything else is
/// [`SpmatError::InvalidArgument`].
#[derive(Debug, Clone, Default)]
pub struct MatrixBuilder {
    path: Option<PathBuf>,
    rows: Option<usize>,
    cols: Option<usize>,
    config: DecodeConfig,
}

impl MatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read entries from this file
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = Some(cols);
        self
    }

    /// Decode configuration used when reading from a path
    pub fn with_config(mut self, config: DecodeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build<T: MatrixElement>(&self) -> Result<SparseMatrix<T>> {
        match (&self.path, self.rows, self.cols) {
            (Some(path), _, _) if !path.as_os_str().is_empty() => {
                SpmatFile::read_matrix_with_config(path, self.config)
            }
            (None, Some(rows), Some(cols)) => Ok(SparseMatrix::new(rows, cols)),
            _ => Err(SpmatError::InvalidArgument.into()),
        }
    }
}
