//! Coordinate and shape validation
//!
//! Pure checks shared by the accessors, the arithmetic engine and the
//! text decoder.

use crate::SpmatError;

/// Validate a position against matrix dimensions
pub const fn validate_position(
    row: usize,
    col: usize,
    dimensions: (usize, usize),
) -> Result<(), SpmatError> {
    if row >= dimensions.0 || col >= dimensions.1 {
        return Err(SpmatError::IndexOutOfBounds);
    }
    Ok(())
}

/// Convert caller supplied indices of any integer type into a checked position
///
/// Negative values fail the conversion and are reported the same way as
/// indices past the end.
pub fn checked_position<R, C>(
    row: R,
    col: C,
    dimensions: (usize, usize),
) -> Result<(usize, usize), SpmatError>
where
    R: TryInto<usize>,
    C: TryInto<usize>,
{
    let row = row.try_into().map_err(|_| SpmatError::IndexOutOfBounds)?;
    let col = col.try_into().map_err(|_| SpmatError::IndexOutOfBounds)?;
    validate_position(row, col, dimensions)?;
    Ok((row, col))
}

/// Addition and subtraction require identical shapes
pub const fn validate_same_shape(
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> Result<(), SpmatError> {
    if lhs.0 != rhs.0 || lhs.1 != rhs.1 {
        return Err(SpmatError::DimensionMismatch);
    }
    Ok(())
}

/// Multiplication requires `lhs.cols == rhs.rows`
pub const fn validate_inner_dimension(
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> Result<(), SpmatError> {
    if lhs.1 != rhs.0 {
        return Err(SpmatError::DimensionMismatch);
    }
    Ok(())
}
