//! Error types returned by tax calculation and rule construction.

use thiserror::Error;

/// Errors raised when calculating congestion tax or building the rules that drive it.
#[derive(Debug, Error)]
pub enum TaxError {
    /// A required argument was absent or empty, or a rule parameter is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A fee schedule contains malformed or overlapping bands.
    #[error("invalid fee schedule: {0}")]
    InvalidSchedule(String),
    /// A holiday specification does not describe real dates.
    #[error("invalid calendar: {0}")]
    InvalidCalendar(String),
    /// No pre-defined calendar is registered under the requested name.
    #[error("'{0}' is not found in list of existing calendars.")]
    UnknownCalendar(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for tax operations.
pub type TaxResult<T> = Result<T, TaxError>;
