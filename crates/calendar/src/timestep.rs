//! Timestep keywords and their granularity ordering.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Time resolution of a regime series.
///
/// Parsed from the keywords `"day"`, `"week"`, `"month"`, `"hour"` and
/// `"<n>hour"` (e.g. `"6hour"` for 6-hourly data). The granularity ordering
/// used for aggregation compatibility is `Hours < Day < Week < Month`; all
/// hour multiples share the same rank.
///
/// # Example
///
/// ```
/// use regime_calendar::Timestep;
///
/// let ts: Timestep = "6hour".parse().unwrap();
/// assert_eq!(ts, Timestep::Hours(6));
/// assert!(ts.can_aggregate_to(Timestep::Week));
/// assert!(!Timestep::Month.can_aggregate_to(Timestep::Day));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timestep {
    /// Sub-daily data, a fixed number of hours per step (1..=24).
    Hours(u32),
    /// Daily data.
    Day,
    /// Weekly data, one value printed on the last day of its week.
    Week,
    /// Monthly data.
    Month,
}

impl Timestep {
    /// Granularity rank: coarser timesteps have higher ranks.
    fn rank(self) -> u8 {
        match self {
            Timestep::Hours(_) => 0,
            Timestep::Day => 1,
            Timestep::Week => 2,
            Timestep::Month => 3,
        }
    }

    /// Returns `true` if data at this timestep can be aggregated to `out`.
    ///
    /// Output must be equal or coarser: monthly input only aggregates to
    /// monthly output, weekly input to weekly or monthly, daily input to
    /// daily, weekly or monthly. Any hour multiple aggregates to any hour
    /// multiple (sub-daily grouping is keyed per hour of day either way).
    pub fn can_aggregate_to(self, out: Timestep) -> bool {
        out.rank() >= self.rank()
    }

    /// Returns the keyword this timestep parses from.
    pub fn keyword(self) -> String {
        match self {
            Timestep::Hours(1) => "hour".to_string(),
            Timestep::Hours(n) => format!("{n}hour"),
            Timestep::Day => "day".to_string(),
            Timestep::Week => "week".to_string(),
            Timestep::Month => "month".to_string(),
        }
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keyword())
    }
}

impl FromStr for Timestep {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => return Ok(Timestep::Day),
            "week" => return Ok(Timestep::Week),
            "month" => return Ok(Timestep::Month),
            "hour" => return Ok(Timestep::Hours(1)),
            _ => {}
        }
        if let Some(prefix) = s.strip_suffix("hour") {
            if let Ok(n) = prefix.parse::<u32>() {
                if (1..=24).contains(&n) {
                    return Ok(Timestep::Hours(n));
                }
            }
        }
        Err(CalendarError::UnknownTimestep {
            keyword: s.to_string(),
        })
    }
}
