//! Error types for calendar operations.

/// Errors raised when a calendar value cannot be built from caller input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Date out of range: {year}-{month}-{day}")]
    OutOfRange { year: i64, month: i64, day: i64 },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Shorthand for results carrying a [`CalendarError`].
pub type Result<T> = std::result::Result<T, CalendarError>;
