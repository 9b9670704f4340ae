//! Text codec for the line-oriented matrix format
//!
//! ```text
//! rows=<rows>
//! cols=<cols>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Blank lines are ignored anywhere. The decoder is line driven so that an
//! I/O layer can stream a file through it without buffering the whole
//! source; [`decode_str`] covers the in-memory case.

use hashbrown::HashSet;

use super::config::{DecodeConfig, DuplicatePolicy, ZeroPolicy};
use crate::validation::parsing::{parse_entry, parse_header, resolve_coordinate};
use crate::validation::{FormatIssue, HeaderKey};
use crate::{MatrixElement, SparseMatrix, SpmatError};

enum DecodeState<T: MatrixElement> {
    Rows,
    Cols { rows: usize },
    Entries(SparseMatrix<T>),
}

/// Incremental decoder fed one line at a time
pub struct TextDecoder<T: MatrixElement> {
    config: DecodeConfig,
    state: DecodeState<T>,
    seen: HashSet<(usize, usize)>,
}

impl<T: MatrixElement> TextDecoder<T> {
    pub fn new() -> Self {
        Self::with_config(DecodeConfig::default())
    }

    pub fn with_config(config: DecodeConfig) -> Self {
        Self {
            config,
            state: DecodeState::Rows,
            seen: HashSet::new(),
        }
    }

    /// Consume one source line
    pub fn feed_line(&mut self, line: &str) -> Result<(), FormatIssue> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        match &mut self.state {
            DecodeState::Rows => {
                let rows = parse_header(line, HeaderKey::Rows)?;
                self.state = DecodeState::Cols { rows };
            }
            DecodeState::Cols { rows } => {
                let rows = *rows;
                let cols = parse_header(line, HeaderKey::Cols)?;
                self.state = DecodeState::Entries(SparseMatrix::new(rows, cols));
            }
            DecodeState::Entries(matrix) => {
                let (row, col, value) = parse_entry::<T>(line)?;
                let (row, col) = resolve_coordinate(row, col, matrix.dimensions())?;

                if value.is_zero() && self.config.zero_policy == ZeroPolicy::Reject {
                    return Err(FormatIssue::ZeroEntry);
                }
                if self.config.duplicate_policy == DuplicatePolicy::Reject
                    && !self.seen.insert((row, col))
                {
                    return Err(FormatIssue::DuplicateEntry);
                }
                matrix.put(row, col, value);
            }
        }
        Ok(())
    }

    /// Finish decoding and take the matrix
    pub fn finish(self) -> Result<SparseMatrix<T>, FormatIssue> {
        match self.state {
            DecodeState::Entries(matrix) => Ok(matrix),
            _ => Err(FormatIssue::MissingHeader),
        }
    }
}

impl<T: MatrixElement> Default for TextDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a complete source held in memory
pub fn decode_str<T: MatrixElement>(source: &str) -> Result<SparseMatrix<T>, SpmatError> {
    decode_str_with_config(source, DecodeConfig::default())
}

/// Decode a complete source held in memory with an explicit configuration
pub fn decode_str_with_config<T: MatrixElement>(
    source: &str,
    config: DecodeConfig,
) -> Result<SparseMatrix<T>, SpmatError> {
    let mut decoder = TextDecoder::with_config(config);
    for line in source.lines() {
        decoder.feed_line(line)?;
    }
    Ok(decoder.finish()?)
}

/// Writes a matrix in the text format through [`core::fmt::Display`]
///
/// Entries are emitted in row-major order.
pub struct TextEncoder<'a, T: MatrixElement> {
    matrix: &'a SparseMatrix<T>,
}

impl<'a, T: MatrixElement> TextEncoder<'a, T> {
    pub fn new(matrix: &'a SparseMatrix<T>) -> Self {
        Self { matrix }
    }
}

impl<T: MatrixElement> core::fmt::Display for TextEncoder<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (rows, cols) = self.matrix.dimensions();
        writeln!(f, "{}{rows}", super::constants::ROWS_KEY)?;
        writeln!(f, "{}{cols}", super::constants::COLS_KEY)?;
        for (row, col, value) in self.matrix.iter() {
            writeln!(f, "({row}, {col}, {value})")?;
        }
        Ok(())
    }
}
