//! Parsing utilities for the matrix text format
//!
//! Pure functions over single, already trimmed lines. Each failure names
//! the rule that was broken as a [`FormatIssue`]; callers that only need
//! the coarse kind convert it into [`SpmatError::InvalidFormat`].

use crate::format::constants::{
    COLS_KEY, ENTRY_CLOSE, ENTRY_FIELDS, ENTRY_OPEN, FIELD_SEPARATOR, ROWS_KEY,
};
use crate::SpmatError;
use core::str::FromStr;

/// The specific grammar rule a line violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Fewer than two non-blank lines
    MissingHeader,
    /// Header line does not start with its key or carries no dimension
    MalformedHeader,
    /// Entry line is not `(<int>, <int>, <int>)`
    MalformedEntry,
    /// Entry coordinate lies outside the declared dimensions
    EntryOutOfBounds,
    /// Entry value is zero and zero entries are rejected
    ZeroEntry,
    /// Entry coordinate already appeared and duplicates are rejected
    DuplicateEntry,
}

impl core::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatIssue::MissingHeader => "missing rows=/cols= header",
            FormatIssue::MalformedHeader => "malformed header line",
            FormatIssue::MalformedEntry => "malformed entry line",
            FormatIssue::EntryOutOfBounds => "Invalid row or column index",
            FormatIssue::ZeroEntry => "zero-valued entry",
            FormatIssue::DuplicateEntry => "duplicate entry coordinate",
        };
        write!(f, "{msg}")
    }
}

impl From<FormatIssue> for SpmatError {
    fn from(_: FormatIssue) -> Self {
        SpmatError::InvalidFormat
    }
}

/// Which header line is being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKey {
    Rows,
    Cols,
}

impl HeaderKey {
    pub const fn key(self) -> &'static str {
        match self {
            HeaderKey::Rows => ROWS_KEY,
            HeaderKey::Cols => COLS_KEY,
        }
    }
}

/// Parse a `rows=<n>` or `cols=<n>` line
pub fn parse_header(line: &str, key: HeaderKey) -> Result<usize, FormatIssue> {
    let value = line
        .strip_prefix(key.key())
        .ok_or(FormatIssue::MalformedHeader)?;
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| FormatIssue::MalformedHeader)
}

/// Parse an `(<row>, <col>, <value>)` line into its raw triple
///
/// Coordinates are returned signed so that negative values survive until
/// the bounds check; they are never valid positions.
pub fn parse_entry<T: FromStr>(line: &str) -> Result<(i64, i64, T), FormatIssue> {
    let inner = line
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(FormatIssue::MalformedEntry)?;

    let mut tokens = inner.split(FIELD_SEPARATOR);
    let mut fields: [&str; ENTRY_FIELDS] = [""; ENTRY_FIELDS];
    for field in fields.iter_mut() {
        *field = tokens.next().ok_or(FormatIssue::MalformedEntry)?.trim();
    }
    if tokens.next().is_some() {
        return Err(FormatIssue::MalformedEntry);
    }

    let row = parse_token::<i64>(fields[0])?;
    let col = parse_token::<i64>(fields[1])?;
    let value = parse_token::<T>(fields[2])?;
    Ok((row, col, value))
}

/// Resolve a raw triple coordinate against the declared dimensions
pub fn resolve_coordinate(
    row: i64,
    col: i64,
    dimensions: (usize, usize),
) -> Result<(usize, usize), FormatIssue> {
    crate::validation::bounds::checked_position(row, col, dimensions)
        .map_err(|_| FormatIssue::EntryOutOfBounds)
}

fn parse_token<T: FromStr>(token: &str) -> Result<T, FormatIssue> {
    if token.is_empty() {
        return Err(FormatIssue::MalformedEntry);
    }
    token.parse::<T>().map_err(|_| FormatIssue::MalformedEntry)
}
