//! Period keys: cyclical calendar labels used as aggregation group keys.
//!
//! Every key carries a numeric calendar order next to its display label.
//! Grouping and sorting always use the order, never the label text (lexical
//! order of week labels does not match the calendar wrap-around).

use chrono::{Datelike, NaiveDateTime, Timelike};
use regime_calendar::{week_of_year, Timestep};

/// Collapsed boundary week: week numbers 0, 52 and 53 pool into this single
/// key so the partial weeks at the year edge form one group.
pub(crate) const BOUNDARY_WEEK: u32 = 52;

/// Returns the `(label, calendar order)` group key for one row.
///
/// Label formats per output timestep: `"MM-DD HH"` (sub-daily), `"MM-DD"`
/// (daily), `"WW"` (weekly, boundary weeks merged), `"MM"` (monthly).
pub(crate) fn period_key(ts_out: Timestep, t: NaiveDateTime) -> (String, u32) {
    match ts_out {
        Timestep::Hours(_) => {
            let (month, day, hour) = (t.month(), t.day(), t.hour());
            (
                format!("{month:02}-{day:02} {hour:02}"),
                month * 10_000 + day * 100 + hour,
            )
        }
        Timestep::Day => {
            let (month, day) = (t.month(), t.day());
            (format!("{month:02}-{day:02}"), month * 100 + day)
        }
        Timestep::Week => {
            let week = merge_boundary_week(week_of_year(t.date()));
            (format!("{week:02}"), week)
        }
        Timestep::Month => {
            let month = t.month();
            (format!("{month:02}"), month)
        }
    }
}

/// Folds the year-edge week numbers {0, 52, 53} into [`BOUNDARY_WEEK`].
pub(crate) fn merge_boundary_week(week: u32) -> u32 {
    if week == 0 || week > BOUNDARY_WEEK {
        BOUNDARY_WEEK
    } else {
        week
    }
}

/// Splits a daily calendar order back into `(month, day)`.
pub(crate) fn decode_day(order: u32) -> (u32, u32) {
    (order / 100, order % 100)
}

/// Splits a sub-daily calendar order back into `(month, day, hour)`.
pub(crate) fn decode_hour(order: u32) -> (u32, u32, u32) {
    (order / 10_000, (order / 100) % 100, order % 100)
}
