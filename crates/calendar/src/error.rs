//! Error types for the regime-calendar crate.

/// Error type for all fallible operations in the regime-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a timestep keyword is not recognized.
    #[error("unknown timestep keyword: {keyword:?} (expected \"day\", \"week\", \"month\" or \"<n>hour\")")]
    UnknownTimestep {
        /// The unrecognized keyword.
        keyword: String,
    },

    /// Returned when a month value is invalid.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Returned when a week number is invalid or not representable.
    #[error("invalid week number: {week} (must be 1..=53)")]
    InvalidWeek {
        /// The invalid week number.
        week: u32,
    },

    /// Returned when a calendar date cannot be constructed.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },
}
