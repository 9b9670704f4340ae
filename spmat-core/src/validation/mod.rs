//! Validation utilities
//!
//! Pure validation functions with no I/O dependencies: coordinate and
//! shape checks, and line-level parsing of the text format.

pub mod bounds;
pub mod parsing;

pub use bounds::{
    checked_position, validate_inner_dimension, validate_position, validate_same_shape,
};
pub use parsing::{parse_entry, parse_header, FormatIssue, HeaderKey};
