//! Sum-mode aggregation: yearly totals first, long-term statistics second.

use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regime::{annual_regime, RegimeConfig, SeriesTable, Stat, Timestep};

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

/// Monthly table (one row per month, stamped mid-month) for the given years;
/// `value(year, month)` supplies each row.
fn monthly_table(years: &[i32], value: impl Fn(i32, u32) -> f64) -> SeriesTable {
    let mut timestamps = Vec::new();
    let mut values = Vec::new();
    for &year in years {
        for month in 1..=12u32 {
            timestamps.push(dt(year, month, 15));
            values.push(value(year, month));
        }
    }
    SeriesTable::new(timestamps, vec!["Q".to_string()], vec![values])
        .unwrap()
        .with_timestep(Timestep::Month)
}

/// Daily table over full years with a constant value, one optional gap.
fn constant_daily(years: &[i32], gap: Option<NaiveDate>) -> SeriesTable {
    let mut timestamps = Vec::new();
    let mut values = Vec::new();
    for &year in years {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        for d in start.iter_days().take_while(|d| *d <= end) {
            timestamps.push(d.and_time(NaiveTime::MIN));
            values.push(if Some(d) == gap { f64::NAN } else { 1.0 });
        }
    }
    SeriesTable::new(timestamps, vec!["Q".to_string()], vec![values])
        .unwrap()
        .with_timestep(Timestep::Day)
}

#[test]
fn monthly_sums_pool_across_years() {
    // 2001 months sum to m, 2002 months to m + 12.
    let table = monthly_table(&[2001, 2002], |y, m| {
        if y == 2001 {
            m as f64
        } else {
            (m + 12) as f64
        }
    });
    let config = RegimeConfig::new().with_stat(Stat::Sum);
    let result = annual_regime(&table, &config).unwrap();

    assert_eq!(result.len(), 12);
    assert_eq!(result.period_labels()[0], "01");
    // January totals {1, 13}.
    assert_relative_eq!(result.mean().value(0, 0), 7.0, epsilon = 1e-12);
    assert_relative_eq!(result.minimum().value(0, 0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.maximum().value(0, 0), 13.0, epsilon = 1e-12);
    assert_relative_eq!(result.median().value(0, 0), 7.0, epsilon = 1e-12);
    assert_relative_eq!(result.p25().value(0, 0), 4.0, epsilon = 1e-12);
    assert_relative_eq!(result.p75().value(0, 0), 10.0, epsilon = 1e-12);
}

#[test]
fn single_year_sums_report_raw_totals() {
    let table = monthly_table(&[2001], |_, m| m as f64);
    let config = RegimeConfig::new().with_stat(Stat::Sum);
    let result = annual_regime(&table, &config).unwrap();

    for (row, month) in (1..=12u32).enumerate() {
        let expected = month as f64;
        assert_relative_eq!(result.mean().value(row, 0), expected, epsilon = 1e-12);
        assert_relative_eq!(result.minimum().value(row, 0), expected, epsilon = 1e-12);
        assert_relative_eq!(result.maximum().value(row, 0), expected, epsilon = 1e-12);
    }
}

#[test]
fn daily_input_sums_to_monthly_volumes() {
    let table = constant_daily(&[2003], None);
    let config = RegimeConfig::new()
        .with_output_timestep(Timestep::Month)
        .with_stat(Stat::Sum);
    let result = annual_regime(&table, &config).unwrap();

    // Constant 1.0 per day: each month's total is its day count.
    assert_relative_eq!(result.mean().value(0, 0), 31.0, epsilon = 1e-12);
    assert_relative_eq!(result.mean().value(1, 0), 28.0, epsilon = 1e-12);
    assert_relative_eq!(result.mean().value(3, 0), 30.0, epsilon = 1e-12);
    assert_relative_eq!(result.mean().value(11, 0), 31.0, epsilon = 1e-12);
}

#[test]
fn leap_year_changes_february_total() {
    let table = constant_daily(&[2003, 2004], None);
    let config = RegimeConfig::new()
        .with_output_timestep(Timestep::Month)
        .with_stat(Stat::Sum);
    let result = annual_regime(&table, &config).unwrap();

    // February totals {28, 29} across the two years.
    assert_relative_eq!(result.mean().value(1, 0), 28.5, epsilon = 1e-12);
    assert_relative_eq!(result.minimum().value(1, 0), 28.0, epsilon = 1e-12);
    assert_relative_eq!(result.maximum().value(1, 0), 29.0, epsilon = 1e-12);
}

#[test]
fn missing_day_shrinks_total_with_na_rm() {
    let gap = NaiveDate::from_ymd_opt(2003, 1, 5).unwrap();
    let table = constant_daily(&[2003], Some(gap));
    let config = RegimeConfig::new()
        .with_output_timestep(Timestep::Month)
        .with_stat(Stat::Sum);
    let result = annual_regime(&table, &config).unwrap();

    assert_relative_eq!(result.mean().value(0, 0), 30.0, epsilon = 1e-12);
    assert_relative_eq!(result.mean().value(1, 0), 28.0, epsilon = 1e-12);
}

#[test]
fn missing_day_poisons_total_without_na_rm() {
    let gap = NaiveDate::from_ymd_opt(2003, 1, 5).unwrap();
    let table = constant_daily(&[2003], Some(gap));
    let config = RegimeConfig::new()
        .with_output_timestep(Timestep::Month)
        .with_stat(Stat::Sum)
        .with_na_rm(false);
    let result = annual_regime(&table, &config).unwrap();

    assert!(result.mean().value(0, 0).is_nan());
    assert_relative_eq!(result.mean().value(1, 0), 28.0, epsilon = 1e-12);
}

#[test]
fn sum_mode_rotates_like_mean_mode() {
    let table = monthly_table(&[2001, 2002], |_, m| m as f64);
    let config = RegimeConfig::new()
        .with_stat(Stat::Sum)
        .with_start_month(10);
    let result = annual_regime(&table, &config).unwrap();

    assert_eq!(result.period_labels()[0], "10");
    assert_relative_eq!(result.mean().value(0, 0), 10.0, epsilon = 1e-12);
}
