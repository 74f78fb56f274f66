use thiserror::Error;

// ---------------------------------------------------------------------------
// Data layer errors
// ---------------------------------------------------------------------------

/// Errors raised while loading and reshaping the source table.
///
/// All of these are fatal at startup: the process refuses to come up
/// with a malformed dataset. Cell *content* never raises — blank or
/// non-numeric cells become null values instead.
#[derive(Error, Debug)]
pub enum DataFormatError {
    /// The table needs an entity column plus at least one year column.
    #[error("source table has {0} column(s), need a country column plus at least one year column")]
    TooFewColumns(usize),

    /// Two rows claim the same country, so row identity is ambiguous.
    #[error("duplicate country '{0}' in source table")]
    DuplicateCountry(String),

    /// Two header columns carry the same year label.
    #[error("duplicate year label '{0}' in header")]
    DuplicateYear(String),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Parquet error: {0}")]
    Parquet(String),
}

impl From<serde_json::Error> for DataFormatError {
    fn from(err: serde_json::Error) -> Self {
        DataFormatError::Json(err.to_string())
    }
}

impl From<parquet::errors::ParquetError> for DataFormatError {
    fn from(err: parquet::errors::ParquetError) -> Self {
        DataFormatError::Parquet(err.to_string())
    }
}

impl From<arrow::error::ArrowError> for DataFormatError {
    fn from(err: arrow::error::ArrowError) -> Self {
        DataFormatError::Parquet(err.to_string())
    }
}

/// A year-range index pair that does not resolve against the year axis.
///
/// Unreachable when the range control keeps its handles in bounds; a
/// malformed [`FilterState`](super::filter::FilterState) is reported
/// loudly rather than rendered as an empty chart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("year range [{low}, {high}] out of bounds for an axis of {axis_len} years")]
pub struct InvalidRangeError {
    pub low: usize,
    pub high: usize,
    pub axis_len: usize,
}
