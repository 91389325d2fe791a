//! Configuration for annual regime computation.

use std::str::FromStr;

use regime_calendar::Timestep;

use crate::error::RegimeError;

/// How values sharing a period are reduced before the long-term statistics.
///
/// `Mean` pools all rows of a period across years directly. `Sum` first
/// totals each period within its calendar year, then computes the long-term
/// statistics across the per-year totals (volumes rather than intensities).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    /// Pool raw values across all years.
    Mean,
    /// Total per calendar year first, then pool the yearly totals.
    Sum,
}

impl FromStr for Stat {
    type Err = RegimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Stat::Mean),
            "sum" => Ok(Stat::Sum),
            _ => Err(RegimeError::UnknownStat {
                keyword: s.to_string(),
            }),
        }
    }
}

/// Configuration for [`annual_regime`](crate::annual_regime).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use regime::{RegimeConfig, Stat, Timestep};
///
/// let config = RegimeConfig::new()
///     .with_output_timestep(Timestep::Month)
///     .with_stat(Stat::Sum)
///     .with_start_month(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RegimeConfig {
    ts_in: Option<Timestep>,
    ts_out: Option<Timestep>,
    stat: Stat,
    start_month: u8,
    include_leap_day: bool,
    na_rm: bool,
}

impl RegimeConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: no explicit timesteps (input comes from the table
    /// attribute, output from the input), `stat = Mean`, `start_month = 1`,
    /// `include_leap_day = false`, `na_rm = true`.
    pub fn new() -> Self {
        Self {
            ts_in: None,
            ts_out: None,
            stat: Stat::Mean,
            start_month: 1,
            include_leap_day: false,
            na_rm: true,
        }
    }

    /// Sets the input timestep, overriding the table attribute.
    pub fn with_input_timestep(mut self, ts: Timestep) -> Self {
        self.ts_in = Some(ts);
        self
    }

    /// Sets the output timestep (must be equal or coarser than the input).
    pub fn with_output_timestep(mut self, ts: Timestep) -> Self {
        self.ts_out = Some(ts);
        self
    }

    /// Sets the per-period reduction statistic.
    pub fn with_stat(mut self, stat: Stat) -> Self {
        self.stat = stat;
        self
    }

    /// Sets the first month of the hydrological year (1 = calendar year).
    pub fn with_start_month(mut self, month: u8) -> Self {
        self.start_month = month;
        self
    }

    /// Keeps or drops the February 29 period for daily and sub-daily output.
    pub fn with_leap_day(mut self, include: bool) -> Self {
        self.include_leap_day = include;
        self
    }

    /// Sets the missing-value policy (R's `na.rm`).
    pub fn with_na_rm(mut self, na_rm: bool) -> Self {
        self.na_rm = na_rm;
        self
    }

    // --- Accessors ---

    /// Returns the explicit input timestep, if any.
    pub fn input_timestep(&self) -> Option<Timestep> {
        self.ts_in
    }

    /// Returns the explicit output timestep, if any.
    pub fn output_timestep(&self) -> Option<Timestep> {
        self.ts_out
    }

    /// Returns the per-period reduction statistic.
    pub fn stat(&self) -> Stat {
        self.stat
    }

    /// Returns the first month of the hydrological year.
    pub fn start_month(&self) -> u8 {
        self.start_month
    }

    /// Returns whether the February 29 period is kept.
    pub fn include_leap_day(&self) -> bool {
        self.include_leap_day
    }

    /// Returns the missing-value policy.
    pub fn na_rm(&self) -> bool {
        self.na_rm
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), RegimeError> {
        if !(1..=12).contains(&self.start_month) {
            return Err(RegimeError::InvalidStartMonth {
                month: self.start_month,
            });
        }
        Ok(())
    }
}

impl Default for RegimeConfig {
    fn default() -> Self {
        Self::new()
    }
}
