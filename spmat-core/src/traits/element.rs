//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Integer element types understood by the text format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
        }
    }
}

/// Trait for types that can be stored as matrix elements
///
/// Elements are signed integers: they must be cheap to copy, comparable
/// against zero, parseable from and printable to the text format, and
/// expose checked arithmetic so overflow is reported instead of wrapping.
pub trait MatrixElement: Copy + Eq + Debug + Display + FromStr + Sized {
    /// Get the DataType representation for this element type
    fn data_type() -> DataType;

    /// The additive identity, never stored explicitly
    fn zero() -> Self;

    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

impl MatrixElement for i32 {
    fn data_type() -> DataType {
        DataType::I32
    }

    fn zero() -> Self {
        0
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i32::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i32::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i32::checked_mul(self, rhs)
    }
}

impl MatrixElement for i64 {
    fn data_type() -> DataType {
        DataType::I64
    }

    fn zero() -> Self {
        0
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i64::checked_mul(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(MatrixElement::checked_add(2i64, 3), Some(5));
        assert_eq!(MatrixElement::checked_sub(2i32, 3), Some(-1));
        assert_eq!(MatrixElement::checked_mul(i32::MAX, 2), None);
        assert_eq!(MatrixElement::checked_add(i64::MAX, 1), None);
    }

    #[test]
    fn test_zero() {
        assert!(0i64.is_zero());
        assert!(!(-4i32).is_zero());
        assert_eq!(<i32 as MatrixElement>::data_type(), DataType::I32);
        assert_eq!(<i64 as MatrixElement>::data_type(), DataType::I64);
    }
}
