//! Weekly-to-daily expansion.
//!
//! Weekly source values follow the trailing-week convention (the value
//! printed on a date covers the week ending on that date), so each value is
//! propagated backward onto the preceding gap days.

use chrono::{NaiveDate, NaiveTime};
use regime_calendar::Timestep;
use tracing::debug;

use crate::table::SeriesTable;

/// Expands a weekly table to daily resolution.
///
/// Builds the complete daily date sequence from the first to the last source
/// date, places each weekly value on its own day, and back-fills every gap
/// day with the value of the next source row in calendar order. A missing
/// (`NaN`) source value back-fills like any other, so a missing week stays
/// missing across all of its days.
pub(crate) fn upsample_weekly(table: &SeriesTable) -> SeriesTable {
    let first = table.first_timestamp().date();
    let last = table.last_timestamp().date();
    let days: Vec<NaiveDate> = first.iter_days().take_while(|d| *d <= last).collect();

    // Source row index per daily slot, if that day carries a weekly value.
    let mut row_of_day: Vec<Option<usize>> = vec![None; days.len()];
    for (row, ts) in table.timestamps().iter().enumerate() {
        let offset = (ts.date() - first).num_days() as usize;
        row_of_day[offset] = Some(row);
    }

    let columns: Vec<Vec<f64>> = table
        .columns()
        .iter()
        .map(|col| {
            let mut filled = vec![f64::NAN; days.len()];
            let mut carry = f64::NAN;
            for (i, slot) in row_of_day.iter().enumerate().rev() {
                if let Some(row) = slot {
                    carry = col[*row];
                }
                filled[i] = carry;
            }
            filled
        })
        .collect();

    debug!(
        weekly_rows = table.len(),
        daily_rows = days.len(),
        "expanded weekly input to daily resolution"
    );

    let timestamps = days.into_iter().map(|d| d.and_time(NaiveTime::MIN)).collect();
    SeriesTable::from_parts(
        timestamps,
        table.variables().to_vec(),
        columns,
        Some(Timestep::Day),
    )
}
