/// Alias for `Result<T, AeError>`.
pub type AeResult<T> = Result<T, AeError>;

/// Errors that can occur when validating or persisting encounter data.
#[derive(Debug, thiserror::Error)]
pub enum AeError {
    /// A submitted table cell was empty after trimming.
    #[error("empty encounter type at R{row}C{col}, please fill all cells")]
    EmptyCell {
        /// Table row (3-16).
        row: i32,
        /// Table column (1-4).
        col: usize,
    },

    /// A submitted table cell lies outside rows 3-16 or columns 1-4.
    #[error("cell R{row}C{col} is outside the encounter table")]
    CellOutOfRange {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: usize,
    },

    /// A cell key could not be parsed as `<row>-<col>`.
    #[error("invalid cell key: \"{0}\"")]
    InvalidCellKey(String),

    /// An imported table row is missing or does not hold four labels.
    #[error("row {row} is missing or malformed")]
    MalformedRow {
        /// The first offending row.
        row: i32,
    },

    /// An imported payload is not a JSON object keyed by row.
    #[error("encounter table must be a JSON object keyed by row")]
    NotAnObject,

    /// The import payload was not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A settings value was not one of the accepted choices.
    #[error("invalid value for setting '{key}': \"{value}\"")]
    InvalidSetting {
        /// The settings key.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// The backing key-value store failed.
    #[error("settings store error: {0}")]
    Store(String),

    /// An I/O error while reading a resource.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
