//! File I/O for the matrix text format
//!
//! Reads stream the source line by line through the core
//! [`TextDecoder`]; writes go through a buffered writer. File handles are
//! owned by the calling function and closed on every return path.

use log::{debug, info};
use spmat_core::{DecodeConfig, MatrixElement, SparseMatrix, SpmatError, TextDecoder};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::Result;

/// Entry points for reading and writing matrix text files
pub struct SpmatFile;

impl SpmatFile {
    /// Read a matrix file with the default decode configuration
    pub fn read_matrix<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
        Self::read_matrix_with_config(path, DecodeConfig::default())
    }

    /// Read a matrix file with an explicit decode configuration
    pub fn read_matrix_with_config<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        config: DecodeConfig,
    ) -> Result<SparseMatrix<T>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            debug!("failed to open {}: {err}", path.display());
            err
        })?;

        let matrix = Self::read_from(BufReader::new(file), config)?;
        info!(
            "read {}x{} matrix with {} non-zeros from {}",
            matrix.rows(),
            matrix.cols(),
            matrix.nnz(),
            path.display()
        );
        Ok(matrix)
    }

    /// Decode a matrix from any buffered reader
    pub fn read_from<T: MatrixElement, R: BufRead>(
        reader: R,
        config: DecodeConfig,
    ) -> Result<SparseMatrix<T>> {
        let mut decoder = TextDecoder::with_config(config);

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Err(issue) = decoder.feed_line(&line) {
                debug!("line {}: {issue}: {:?}", index + 1, line.trim());
                return Err(SpmatError::from(issue).into());
            }
        }

        decoder.finish().map_err(|issue| {
            debug!("incomplete source: {issue}");
            SpmatError::from(issue).into()
        })
    }

    /// Write a matrix to a file, replacing any existing content
    pub fn write_matrix<T: MatrixElement, P: AsRef<Path>>(
        matrix: &SparseMatrix<T>,
        path: P,
    ) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::write_to(matrix, BufWriter::new(file))?;
        info!(
            "wrote {}x{} matrix with {} non-zeros to {}",
            matrix.rows(),
            matrix.cols(),
            matrix.nnz(),
            path.display()
        );
        Ok(())
    }

    /// Encode a matrix into any writer and flush it
    pub fn write_to<T: MatrixElement, W: Write>(
        matrix: &SparseMatrix<T>,
        mut writer: W,
    ) -> Result<()> {
        write!(writer, "{}", matrix.to_text())?;
        writer.flush()?;
        Ok(())
    }
}
