//! Hydrological-year reordering and reference-date synthesis.
//!
//! Aggregated periods arrive in calendar order. This stage drops the leap
//! day when asked, rotates the sequence so it opens at the configured start
//! month, and attaches a synthetic plotting date to every period. Reference
//! years are fixed so that a wrapped hydrological year stays on a single
//! continuous date axis: 1911/1912 for rotated output (1912/1913 for a
//! February start, so the pre-wrap segment keeps its leap day), 1912 alone
//! when no rotation happens, and 1913 for unrotated weekly output (its week
//! numbering starts cleanly after New Year).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regime_calendar::{month_start_week, wednesday_of_week, CalendarError, Timestep};
use regime_stats::Summary;
use tracing::debug;

use crate::aggregate::Aggregated;
use crate::error::RegimeError;
use crate::period::{decode_day, decode_hour};

/// Periods in hydrological-year order with their reference dates.
#[derive(Debug)]
pub(crate) struct Reordered {
    pub reference_dates: Vec<NaiveDateTime>,
    pub labels: Vec<String>,
    /// `stats[period][variable]`
    pub stats: Vec<Vec<Summary>>,
}

pub(crate) fn reorder(
    agg: Aggregated,
    ts_out: Timestep,
    start_month: u8,
    include_leap_day: bool,
) -> Result<Reordered, RegimeError> {
    let mut agg = if include_leap_day {
        agg
    } else {
        strip_leap_day(agg, ts_out)
    };

    let rotated = start_month != 1;
    let split = if rotated {
        let target = rotation_target(ts_out, start_month)?;
        let pos = agg
            .labels
            .iter()
            .position(|l| *l == target)
            .ok_or(RegimeError::RotationTargetMissing { label: target })?;
        agg.labels.rotate_left(pos);
        agg.orders.rotate_left(pos);
        agg.stats.rotate_left(pos);
        debug!(start_month, pivot = pos, "rotated periods to hydrological year start");
        agg.labels.len() - pos
    } else {
        agg.labels.len()
    };

    let (y0, y1) = base_years(ts_out, start_month, rotated);
    let mut reference_dates = Vec::with_capacity(agg.labels.len());
    for (i, &order) in agg.orders.iter().enumerate() {
        let year = if i < split { y0 } else { y1 };
        reference_dates.push(reference_date(ts_out, order, year)?);
    }

    Ok(Reordered {
        reference_dates,
        labels: agg.labels,
        stats: agg.stats,
    })
}

/// Removes the February 29 period from daily and sub-daily output.
fn strip_leap_day(agg: Aggregated, ts_out: Timestep) -> Aggregated {
    let is_leap_day = |order: u32| match ts_out {
        Timestep::Day => order == 229,
        Timestep::Hours(_) => order / 100 == 229,
        Timestep::Week | Timestep::Month => false,
    };

    let n = agg.labels.len();
    let mut labels = Vec::with_capacity(n);
    let mut orders = Vec::with_capacity(n);
    let mut stats = Vec::with_capacity(n);
    for ((label, order), stat) in agg
        .labels
        .into_iter()
        .zip(agg.orders)
        .zip(agg.stats)
    {
        if is_leap_day(order) {
            continue;
        }
        labels.push(label);
        orders.push(order);
        stats.push(stat);
    }
    if labels.len() < n {
        debug!(removed = n - labels.len(), "dropped leap-day periods");
    }

    Aggregated {
        labels,
        orders,
        stats,
    }
}

/// The period label that opens the hydrological year.
fn rotation_target(ts_out: Timestep, start_month: u8) -> Result<String, RegimeError> {
    Ok(match ts_out {
        Timestep::Hours(_) => format!("{start_month:02}-01 00"),
        Timestep::Day => format!("{start_month:02}-01"),
        Timestep::Week => format!("{:02}", month_start_week(start_month)?),
        Timestep::Month => format!("{start_month:02}"),
    })
}

/// Reference years for the pre-wrap and wrapped segments.
fn base_years(ts_out: Timestep, start_month: u8, rotated: bool) -> (i32, i32) {
    if !rotated {
        let y = if ts_out == Timestep::Week { 1913 } else { 1912 };
        (y, y)
    } else if start_month == 2 {
        (1912, 1913)
    } else {
        (1911, 1912)
    }
}

/// Synthetic plotting date for one period in the given reference year.
fn reference_date(
    ts_out: Timestep,
    order: u32,
    year: i32,
) -> Result<NaiveDateTime, RegimeError> {
    match ts_out {
        Timestep::Hours(_) => {
            let (month, day, hour) = decode_hour(order);
            ymd_hms(year, month, day, hour)
        }
        Timestep::Day => {
            let (month, day) = decode_day(order);
            ymd_hms(year, month, day, 0)
        }
        Timestep::Week => Ok(wednesday_of_week(year, order)?.and_time(NaiveTime::MIN)),
        Timestep::Month => ymd_hms(year, order, 15, 0),
    }
}

fn ymd_hms(year: i32, month: u32, day: u32, hour: u32) -> Result<NaiveDateTime, RegimeError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .ok_or_else(|| CalendarError::InvalidDate { year, month, day }.into())
}
