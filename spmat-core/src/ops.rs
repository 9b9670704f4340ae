//! Sparse matrix arithmetic
//!
//! All operations borrow their operands and build a fresh result. Shape
//! checks run before any work, so a failed call never yields a partial
//! matrix.

use hashbrown::HashMap;

use crate::validation::{validate_inner_dimension, validate_same_shape};
use crate::{MatrixElement, Result, SparseMatrix, SpmatError};

/// Element-wise `lhs + rhs`
pub fn add<T: MatrixElement>(
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    validate_same_shape(lhs.dimensions(), rhs.dimensions())?;
    merge(lhs, rhs, T::checked_add)
}

/// Element-wise `lhs - rhs`
pub fn subtract<T: MatrixElement>(
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    validate_same_shape(lhs.dimensions(), rhs.dimensions())?;
    merge(lhs, rhs, T::checked_sub)
}

/// Matrix product `lhs * rhs`
///
/// Rows of `lhs` are joined against rows of `rhs` through the row index,
/// so only pairs sharing the inner index are visited. Each output row is
/// accumulated in full before zeros are dropped.
pub fn multiply<T: MatrixElement>(
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    validate_inner_dimension(lhs.dimensions(), rhs.dimensions())?;

    let mut result = SparseMatrix::new(lhs.rows(), rhs.cols());
    let mut row_values: HashMap<usize, T> = HashMap::new();

    for (row, inner_cols) in lhs.occupied_rows() {
        row_values.clear();

        for &inner in inner_cols {
            let Some(rhs_cols) = rhs.row_columns(inner) else {
                continue;
            };
            let lhs_value = lhs.value_at(row, inner);

            for &col in rhs_cols {
                let product = lhs_value
                    .checked_mul(rhs.value_at(inner, col))
                    .ok_or(SpmatError::ArithmeticOverflow)?;
                let slot = row_values.entry(col).or_insert_with(T::zero);
                *slot = slot
                    .checked_add(product)
                    .ok_or(SpmatError::ArithmeticOverflow)?;
            }
        }

        for (col, value) in row_values.drain() {
            result.put(row, col, value);
        }
    }

    Ok(result)
}

/// Copy `lhs` and fold every entry of `rhs` into it with `op`
fn merge<T, F>(lhs: &SparseMatrix<T>, rhs: &SparseMatrix<T>, op: F) -> Result<SparseMatrix<T>>
where
    T: MatrixElement,
    F: Fn(T, T) -> Option<T>,
{
    let mut result = lhs.clone();
    for (row, col, value) in rhs.iter() {
        let combined = op(result.value_at(row, col), value).ok_or(SpmatError::ArithmeticOverflow)?;
        result.put(row, col, combined);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::decode_str;
    use crate::IntMatrix;
    use alloc::vec;
    use alloc::vec::Vec;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> IntMatrix {
        let mut m = IntMatrix::new(rows, cols);
        for _ in 0..nnz {
            let row = rng.gen_range(0..rows);
            let col = rng.gen_range(0..cols);
            m.set(row, col, rng.gen_range(-5..=5)).unwrap();
        }
        m
    }

    fn dense(m: &IntMatrix) -> Vec<Vec<i64>> {
        let mut out = vec![vec![0; m.cols()]; m.rows()];
        for (row, col, value) in m.iter() {
            out[row][col] = value;
        }
        out
    }

    #[test]
    fn test_add_to_itself() {
        let m = decode_str::<i64>("rows=2\ncols=2\n(0,0,1)\n(0,1,2)\n(1,0,3)\n(1,1,4)").unwrap();
        let sum = add(&m, &m).unwrap();
        let expected =
            IntMatrix::from_triplets(2, 2, vec![(0, 0, 2), (0, 1, 4), (1, 0, 6), (1, 1, 8)])
                .unwrap();
        assert_eq!(sum, expected);
    }

    #[test]
    fn test_add_cancels_to_absent() {
        let a = IntMatrix::from_triplets(2, 2, vec![(0, 0, 3), (1, 1, 1)]).unwrap();
        let b = IntMatrix::from_triplets(2, 2, vec![(0, 0, -3), (0, 1, 2)]).unwrap();
        let sum = add(&a, &b).unwrap();
        assert_eq!(sum.get(0, 0), Ok(0));
        assert_eq!(sum.nnz(), 2);
        assert!(sum.iter().all(|(_, _, v)| v != 0));
    }

    #[test]
    fn test_subtract() {
        let a = IntMatrix::from_triplets(2, 3, vec![(0, 0, 5), (1, 2, 7)]).unwrap();
        let b = IntMatrix::from_triplets(2, 3, vec![(0, 0, 5), (0, 1, 4)]).unwrap();
        let diff = subtract(&a, &b).unwrap();
        let expected = IntMatrix::from_triplets(2, 3, vec![(0, 1, -4), (1, 2, 7)]).unwrap();
        assert_eq!(diff, expected);

        // Not commutative
        assert_ne!(subtract(&b, &a).unwrap(), diff);
    }

    #[test]
    fn test_operands_untouched() {
        let a = IntMatrix::from_triplets(2, 2, vec![(0, 0, 1)]).unwrap();
        let b = IntMatrix::from_triplets(2, 2, vec![(0, 0, 2)]).unwrap();
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = add(&a, &b).unwrap();
        let _ = subtract(&a, &b).unwrap();
        let _ = multiply(&a, &b).unwrap();
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = IntMatrix::new(2, 2);
        let b = IntMatrix::new(2, 3);
        assert_eq!(add(&a, &b), Err(SpmatError::DimensionMismatch));
        assert_eq!(subtract(&a, &b), Err(SpmatError::DimensionMismatch));
        assert_eq!(multiply(&b, &a), Err(SpmatError::DimensionMismatch));
        assert_eq!(multiply(&a, &b).map(|m| m.dimensions()), Ok((2, 3)));
    }

    #[test]
    fn test_multiply_diagonal() {
        let a = decode_str::<i64>("rows=2\ncols=2\n(0,0,1)\n(1,1,2)").unwrap();
        let b = decode_str::<i64>("rows=2\ncols=2\n(0,0,3)\n(1,1,4)").unwrap();
        let product = multiply(&a, &b).unwrap();
        let expected = IntMatrix::from_triplets(2, 2, vec![(0, 0, 3), (1, 1, 8)]).unwrap();
        assert_eq!(product, expected);
    }

    #[test]
    fn test_multiply_rectangular() {
        let a_entries = vec![(0, 0, 1), (0, 2, 2), (1, 1, 3), (2, 0, 4), (2, 3, 5)];
        let a = IntMatrix::from_triplets(3, 4, a_entries).unwrap();
        let b_entries = vec![(0, 0, 1), (1, 1, 2), (2, 0, 3), (3, 1, 4)];
        let b = IntMatrix::from_triplets(4, 2, b_entries).unwrap();
        let product = multiply(&a, &b).unwrap();

        assert_eq!(product.dimensions(), (3, 2));
        assert_eq!(dense(&product), vec![vec![7, 0], vec![0, 6], vec![4, 20]]);
    }

    #[test]
    fn test_multiply_zero_only_after_full_accumulation() {
        // Row 0 of the product is 1*1 + 1*(-1) + 1*1 at column 0: the running
        // sum touches zero halfway and must still finish at one.
        let a = IntMatrix::from_triplets(1, 3, vec![(0, 0, 1), (0, 1, 1), (0, 2, 1)]).unwrap();
        let b_entries = vec![(0, 0, 1), (1, 0, -1), (2, 0, 1), (0, 1, 2), (1, 1, -2)];
        let b = IntMatrix::from_triplets(3, 2, b_entries).unwrap();
        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.get(0, 0), Ok(1));
        assert_eq!(product.get(0, 1), Ok(0));
        assert_eq!(product.nnz(), 1);
    }

    #[test]
    fn test_overflow_is_reported() {
        let a = IntMatrix::from_triplets(1, 1, vec![(0, 0, i64::MAX)]).unwrap();
        assert_eq!(add(&a, &a), Err(SpmatError::ArithmeticOverflow));
        assert_eq!(multiply(&a, &a), Err(SpmatError::ArithmeticOverflow));

        let b = IntMatrix::from_triplets(1, 1, vec![(0, 0, -1)]).unwrap();
        let min = IntMatrix::from_triplets(1, 1, vec![(0, 0, i64::MIN)]).unwrap();
        assert_eq!(subtract(&min, &b.try_mul(&b).unwrap()), Err(SpmatError::ArithmeticOverflow));
    }

    #[test]
    fn test_add_then_subtract_restores() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 8, 6, 20);
            let b = random_matrix(&mut rng, 8, 6, 20);
            let restored = subtract(&add(&a, &b).unwrap(), &b).unwrap();
            assert_eq!(restored, a);
            assert_eq!(add(&a, &b), add(&b, &a));
        }
    }

    #[test]
    fn test_multiply_matches_dense() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 7, 5, 15);
            let b = random_matrix(&mut rng, 5, 6, 15);
            let product = multiply(&a, &b).unwrap();

            let (da, db) = (dense(&a), dense(&b));
            for i in 0..7 {
                for j in 0..6 {
                    let expected: i64 = (0..5).map(|k| da[i][k] * db[k][j]).sum();
                    assert_eq!(product.get(i, j), Ok(expected));
                }
            }
            assert!(product.iter().all(|(_, _, v)| v != 0));
        }
    }
}
