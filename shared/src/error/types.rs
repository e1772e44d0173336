//! Error enums

use thiserror::Error;

/// Failure of a currency formatting capability
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Option combination the formatter refuses (e.g. min > max fraction digits)
    #[error("Invalid format options: {0}")]
    InvalidOptions(String),

    /// Currency code is not a well-formed ISO 4217 code
    #[error("Unsupported currency code: {0:?}")]
    UnsupportedCurrency(String),

    /// Magnitude cannot be represented exactly for rounding
    #[error("Amount out of formattable range: {0}")]
    OutOfRange(f64),
}

/// Preference store errors
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid bookmark: {0}")]
    InvalidBookmark(String),

    #[error("Bookmark not found: {0}")]
    BookmarkNotFound(i64),
}

/// Result type for preference store operations
pub type PreferenceResult<T> = Result<T, PreferenceError>;
