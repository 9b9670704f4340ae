//! Tokens of the line-oriented matrix text format

/// Prefix of the first header line
pub const ROWS_KEY: &str = "rows=";

/// Prefix of the second header line
pub const COLS_KEY: &str = "cols=";

/// Entry lines are wrapped in parentheses
pub const ENTRY_OPEN: char = '(';
pub const ENTRY_CLOSE: char = ')';

/// Separator between the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';

/// Fields per entry line: row, col, value
pub const ENTRY_FIELDS: usize = 3;
