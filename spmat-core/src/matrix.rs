//! Hash-indexed sparse matrix storage
//!
//! Non-zero entries live in a hash map keyed by `(row, col)`. Two ordered
//! indexes record which columns are occupied in each row and which rows
//! in each column; they drive row-major iteration, row/column extraction
//! and the join in [`crate::ops::multiply`].

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::format::TextEncoder;
use crate::validation::checked_position;
use crate::{MatrixElement, MatrixOperations, MatrixView, Result};

type OccupancyIndex = BTreeMap<usize, BTreeSet<usize>>;

/// Sparse matrix holding only non-zero integer entries
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        into = "crate::format::CooTriplets<T>",
        try_from = "crate::format::CooTriplets<T>",
        bound(
            serialize = "T: MatrixElement + serde::Serialize",
            deserialize = "T: MatrixElement + serde::Deserialize<'de>"
        )
    )
)]
pub struct SparseMatrix<T: MatrixElement> {
    rows: usize,
    cols: usize,
    /// `entries[(r, c)]` = non-zero value at (`r`, `c`)
    entries: HashMap<(usize, usize), T>,
    /// `row_index[r]` = columns holding a non-zero in row `r`
    row_index: OccupancyIndex,
    /// `col_index[c]` = rows holding a non-zero in column `c`
    col_index: OccupancyIndex,
}

/// The integer matrix used by the file format tooling
pub type IntMatrix = SparseMatrix<i64>;

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
            row_index: BTreeMap::new(),
            col_index: BTreeMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triplets
    ///
    /// Triplets go through [`SparseMatrix::set`]: later duplicates overwrite
    /// earlier ones, zeros are not stored, and an out of range coordinate
    /// fails the whole construction.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read the value at a position, zero when nothing is stored there
    ///
    /// Fails with [`crate::SpmatError::IndexOutOfBounds`] for negative or
    /// out of range indices.
    pub fn get<R, C>(&self, row: R, col: C) -> Result<T>
    where
        R: TryInto<usize>,
        C: TryInto<usize>,
    {
        let (row, col) = checked_position(row, col, self.dimensions())?;
        Ok(self.value_at(row, col))
    }

    /// Write the value at a position
    ///
    /// Writing zero removes the entry, so no zero is ever stored.
    pub fn set<R, C>(&mut self, row: R, col: C, value: T) -> Result<()>
    where
        R: TryInto<usize>,
        C: TryInto<usize>,
    {
        let (row, col) = checked_position(row, col, self.dimensions())?;
        self.put(row, col, value);
        Ok(())
    }

    /// Non-zero entries as `(row, col, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.row_index.iter().flat_map(move |(&row, cols)| {
            cols.iter()
                .filter_map(move |&col| self.entries.get(&(row, col)).map(|&v| (row, col, v)))
        })
    }

    /// Text format view of this matrix
    pub fn to_text(&self) -> TextEncoder<'_, T> {
        TextEncoder::new(self)
    }

    /// Element-wise sum, see [`crate::ops::add`]
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        crate::ops::add(self, other)
    }

    /// Element-wise difference, see [`crate::ops::subtract`]
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        crate::ops::subtract(self, other)
    }

    /// Matrix product, see [`crate::ops::multiply`]
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        crate::ops::multiply(self, other)
    }

    /// Stored value without bounds checking
    pub(crate) fn value_at(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Store a value at an already validated position
    pub(crate) fn put(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.remove(row, col);
            return;
        }
        if self.entries.insert((row, col), value).is_none() {
            self.row_index.entry(row).or_default().insert(col);
            self.col_index.entry(col).or_default().insert(row);
        }
    }

    /// Occupied columns of one row
    pub(crate) fn row_columns(&self, row: usize) -> Option<&BTreeSet<usize>> {
        self.row_index.get(&row)
    }

    /// Rows that hold at least one non-zero, with their occupied columns
    pub(crate) fn occupied_rows(&self) -> impl Iterator<Item = (usize, &BTreeSet<usize>)> + '_ {
        self.row_index.iter().map(|(&row, cols)| (row, cols))
    }

    fn remove(&mut self, row: usize, col: usize) {
        if self.entries.remove(&(row, col)).is_none() {
            return;
        }
        detach(&mut self.row_index, row, col);
        detach(&mut self.col_index, col, row);
    }
}

fn detach(index: &mut OccupancyIndex, key: usize, member: usize) {
    if let Some(members) = index.get_mut(&key) {
        members.remove(&member);
        if members.is_empty() {
            index.remove(&key);
        }
    }
}

impl<T: MatrixElement> MatrixView for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.entries.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        self.row_index
            .get(&row_index)
            .map(|cols| {
                cols.iter()
                    .map(|&col| (col, self.value_at(row_index, col)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        self.col_index
            .get(&col_index)
            .map(|rows| {
                rows.iter()
                    .map(|&row| (row, self.value_at(row, col_index)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpmatError;
    use alloc::vec;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_new_is_empty() {
        let m = IntMatrix::new(3, 4);
        assert_eq!(m.dimensions(), (3, 4));
        assert_eq!(m.nnz(), 0);
        assert!(m.is_empty());
        assert_eq!(m.get(2, 3), Ok(0));
    }

    #[test]
    fn test_set_then_get() {
        let mut m = IntMatrix::new(2, 2);
        m.set(0, 1, 5).unwrap();
        assert_eq!(m.get(0, 1), Ok(5));

        m.set(0, 1, -3).unwrap();
        assert_eq!(m.get(0, 1), Ok(-3));
        assert_eq!(m.nnz(), 1);

        m.set(0, 1, 0).unwrap();
        assert_eq!(m.get(0, 1), Ok(0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_set_zero_on_absent_is_noop() {
        let mut m = IntMatrix::new(2, 2);
        m.set(1, 1, 0).unwrap();
        assert!(m.is_empty());
        assert!(m.get_row(1).is_empty());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut m = IntMatrix::new(2, 3);
        assert_eq!(m.get(-1, 0), Err(SpmatError::IndexOutOfBounds));
        assert_eq!(m.get(0, -1), Err(SpmatError::IndexOutOfBounds));
        assert_eq!(m.get(2, 0), Err(SpmatError::IndexOutOfBounds));
        assert_eq!(m.get(0, 3), Err(SpmatError::IndexOutOfBounds));
        assert_eq!(m.set(2, 0, 1), Err(SpmatError::IndexOutOfBounds));
        assert_eq!(m.set(-5i64, 0i64, 1), Err(SpmatError::IndexOutOfBounds));
        assert!(m.is_empty());
    }

    #[test]
    fn test_rows_and_cols() {
        let m = IntMatrix::from_triplets(3, 3, vec![(0, 2, 1), (2, 2, 3), (0, 0, 4), (1, 2, 0)])
            .unwrap();

        assert_eq!(m.get_row(0), vec![(0, 4), (2, 1)]);
        assert_eq!(m.get_col(2), vec![(0, 1), (2, 3)]);
        assert!(m.get_col(1).is_empty());
        assert!(m.get_row(7).is_empty());

        assert_eq!(m.get_element(2, 2), Some(3));
        assert_eq!(m.get_element(1, 2), None);
        assert_eq!(m.get_element(9, 9), None);
    }

    #[test]
    fn test_iter_row_major() {
        let m = IntMatrix::from_triplets(3, 3, vec![(2, 0, 1), (0, 2, 2), (0, 1, 3), (1, 1, 4)])
            .unwrap();
        let entries: Vec<_> = m.iter().collect();
        assert_eq!(entries, vec![(0, 1, 3), (0, 2, 2), (1, 1, 4), (2, 0, 1)]);
    }

    #[test]
    fn test_from_triplets_rejects_out_of_range() {
        assert_eq!(
            IntMatrix::from_triplets(2, 2, vec![(0, 0, 1), (0, 2, 1)]),
            Err(SpmatError::IndexOutOfBounds)
        );
    }

    #[test]
    fn test_equality_ignores_history() {
        let mut a = IntMatrix::new(2, 2);
        a.set(0, 0, 1).unwrap();
        a.set(1, 1, 2).unwrap();
        a.set(1, 1, 0).unwrap();

        let b = IntMatrix::from_triplets(2, 2, vec![(0, 0, 1)]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, IntMatrix::new(2, 3));
    }

    #[test]
    fn test_random_set_get_agrees_with_dense() {
        let mut rng = StdRng::seed_from_u64(7);
        let (rows, cols) = (12, 9);
        let mut dense = vec![vec![0i64; cols]; rows];
        let mut m = IntMatrix::new(rows, cols);

        for _ in 0..500 {
            let row = rng.gen_range(0..rows);
            let col = rng.gen_range(0..cols);
            let value = rng.gen_range(-3..=3);
            m.set(row, col, value).unwrap();
            dense[row][col] = value;
        }

        let mut expected_nnz = 0;
        for (row, line) in dense.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                assert_eq!(m.get(row, col), Ok(value));
                if value != 0 {
                    expected_nnz += 1;
                }
            }
        }
        assert_eq!(m.nnz(), expected_nnz);
        assert_eq!(m.iter().count(), expected_nnz);
        assert!(m.iter().all(|(_, _, v)| v != 0));
    }
}
