//! Monday-start week-of-year numbering and the month-to-week lookup table.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::CalendarError;

/// Week number containing the 1st of each month, used as the rotation target
/// when a hydrological year starts mid-year (index 0 unused, index 1 =
/// January, ..., index 12 = December).
///
/// This is a fixed convention shared with downstream consumers, not a
/// per-year computation: actual week numbers drift by up to one week
/// depending on the year's weekday alignment.
pub(crate) const MONTH_START_WEEK: [u32; 13] = [0, 1, 4, 9, 13, 18, 22, 26, 31, 35, 40, 44, 49];

/// Returns the week of the year for `date`, with Monday as the first day of
/// the week (the strftime `%W` convention).
///
/// All days before the first Monday of the year are in week 0; weeks then
/// run up to 52 or 53 depending on the year.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let ordinal = date.ordinal();
    let weekday = date.weekday().number_from_monday();
    (ordinal + 7 - weekday) / 7
}

/// Returns the conventional first week of `month` (1..=12).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn month_start_week(month: u8) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(MONTH_START_WEEK[month as usize])
}

/// Returns the Wednesday of week `week` (Monday-start numbering) in `year`.
///
/// Week 1 is the week beginning on the first Monday of the year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWeek`] if `week` is 0 or larger than 53.
pub fn wednesday_of_week(year: i32, week: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=53).contains(&week) {
        return Err(CalendarError::InvalidWeek { week });
    }
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::InvalidDate {
        year,
        month: 1,
        day: 1,
    })?;
    let to_first_monday = (8 - jan1.weekday().number_from_monday()) % 7;
    let days = u64::from(to_first_monday) + u64::from(week - 1) * 7 + 2;
    jan1.checked_add_days(Days::new(days))
        .ok_or(CalendarError::InvalidWeek { week })
}
