//! Error types for the regime crate.

use regime_calendar::{CalendarError, Timestep};

/// Error type for all fallible operations in the regime crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegimeError {
    /// Returned when no input timestep is available from either the
    /// configuration or the table's granularity attribute.
    #[error("no input timestep: pass one in the configuration or attach one to the table")]
    MissingTimestep,

    /// Returned when the output timestep is finer than the input timestep.
    #[error("cannot aggregate {ts_in} input to {ts_out} output")]
    IncompatibleTimesteps {
        /// Resolved input timestep.
        ts_in: Timestep,
        /// Requested output timestep.
        ts_out: Timestep,
    },

    /// Returned when a statistic keyword is not recognized.
    #[error("unknown statistic keyword: {keyword:?} (must be \"mean\" or \"sum\")")]
    UnknownStat {
        /// The unrecognized keyword.
        keyword: String,
    },

    /// Returned when the hydrological year start month is out of range.
    #[error("start month must be 1..=12, got {month}")]
    InvalidStartMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Returned when the period that should open the hydrological year is
    /// absent from the aggregated data (sparse source series).
    #[error("rotation target period {label:?} not present in the aggregated data")]
    RotationTargetMissing {
        /// The label that was looked up.
        label: String,
    },

    /// Returned when the input table has no rows or no variables.
    #[error("input table is empty")]
    EmptyTable,

    /// Returned when the number of columns differs from the number of
    /// variable names.
    #[error("expected {expected} columns (one per variable), got {got}")]
    ColumnCountMismatch {
        /// Number of variable names.
        expected: usize,
        /// Number of columns supplied.
        got: usize,
    },

    /// Returned when a variable column length differs from the timestamp
    /// count.
    #[error("column {variable:?}: expected {expected} values, got {got}")]
    ColumnLengthMismatch {
        /// Name of the mismatched variable.
        variable: String,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when timestamps are not strictly increasing.
    #[error("timestamps must be strictly increasing (violation at row {index})")]
    UnsortedTimestamps {
        /// Row index of the first out-of-order timestamp.
        index: usize,
    },

    /// Returned when a column contains an infinite value. `NaN` is the
    /// missing-value marker and is allowed.
    #[error("infinite value in column {variable:?} at row {index}")]
    InfiniteValue {
        /// Name of the offending variable.
        variable: String,
        /// Row index of the infinite value.
        index: usize,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
