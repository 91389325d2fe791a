//! Hydrological-year rotation behaviour.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use regime::{annual_regime, RegimeConfig, RegimeError, SeriesTable, Timestep};

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

/// Daily data covering `from`..=`to`; each day's value is its ordinal.
fn daily_range(from: NaiveDate, to: NaiveDate) -> SeriesTable {
    let mut timestamps = Vec::new();
    let mut values = Vec::new();
    for d in from.iter_days().take_while(|d| *d <= to) {
        timestamps.push(d.and_time(NaiveTime::MIN));
        values.push(d.ordinal() as f64);
    }
    SeriesTable::new(timestamps, vec!["Q".to_string()], vec![values])
        .unwrap()
        .with_timestep(Timestep::Day)
}

fn full_year(year: i32) -> SeriesTable {
    daily_range(
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
    )
}

#[test]
fn october_start_wraps_the_year() {
    let result = annual_regime(&full_year(2003), &RegimeConfig::new().with_start_month(10)).unwrap();

    assert_eq!(result.len(), 365);
    assert_eq!(result.period_labels()[0], "10-01");
    assert_eq!(result.period_labels()[364], "09-30");
    // Oct + Nov + Dec = 92 rows in the pre-wrap segment.
    assert_eq!(result.period_labels()[91], "12-31");
    assert_eq!(result.period_labels()[92], "01-01");
}

#[test]
fn october_start_reference_dates_span_the_base_year_pair() {
    let result = annual_regime(&full_year(2003), &RegimeConfig::new().with_start_month(10)).unwrap();

    assert_eq!(result.reference_dates()[0], dt(1911, 10, 1));
    assert_eq!(result.reference_dates()[91], dt(1911, 12, 31));
    assert_eq!(result.reference_dates()[92], dt(1912, 1, 1));
    assert_eq!(result.reference_dates()[364], dt(1912, 9, 30));
    // The axis is continuous across the wrap.
    for pair in result.reference_dates().windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn rotation_reorders_without_adding_or_dropping_rows() {
    let calendar = annual_regime(&full_year(2003), &RegimeConfig::new()).unwrap();
    let rotated = annual_regime(&full_year(2003), &RegimeConfig::new().with_start_month(6)).unwrap();

    let mut a: Vec<String> = calendar.period_labels().to_vec();
    let mut b: Vec<String> = rotated.period_labels().to_vec();
    a.sort();
    b.sort();
    assert_eq!(a, b);

    let mut va = calendar.mean().column(0);
    let mut vb = rotated.mean().column(0);
    va.sort_by(|x, y| x.partial_cmp(y).unwrap());
    vb.sort_by(|x, y| x.partial_cmp(y).unwrap());
    assert_eq!(va, vb);
}

#[test]
fn february_start_uses_leap_capable_base_years() {
    let config = RegimeConfig::new().with_start_month(2).with_leap_day(true);
    let result = annual_regime(&full_year(2004), &config).unwrap();

    assert_eq!(result.len(), 366);
    assert_eq!(result.period_labels()[0], "02-01");
    assert_eq!(result.reference_dates()[0], dt(1912, 2, 1));

    let leap_row = result
        .period_labels()
        .iter()
        .position(|l| l == "02-29")
        .unwrap();
    assert_eq!(result.reference_dates()[leap_row], dt(1912, 2, 29));

    assert_eq!(result.period_labels()[365], "01-31");
    assert_eq!(result.reference_dates()[365], dt(1913, 1, 31));
}

#[test]
fn monthly_rotation() {
    let config = RegimeConfig::new()
        .with_output_timestep(Timestep::Month)
        .with_start_month(10);
    let result = annual_regime(&full_year(2003), &config).unwrap();

    let labels: Vec<&str> = result.period_labels().iter().map(String::as_str).collect();
    assert_eq!(
        labels,
        ["10", "11", "12", "01", "02", "03", "04", "05", "06", "07", "08", "09"]
    );
    assert_eq!(result.reference_dates()[0], dt(1911, 10, 15));
    assert_eq!(result.reference_dates()[3], dt(1912, 1, 15));
}

#[test]
fn sparse_data_misses_rotation_target() {
    let spring_only = daily_range(
        NaiveDate::from_ymd_opt(2003, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2003, 3, 31).unwrap(),
    );
    let err =
        annual_regime(&spring_only, &RegimeConfig::new().with_start_month(10)).unwrap_err();
    assert!(matches!(
        err,
        RegimeError::RotationTargetMissing { label } if label == "10-01"
    ));
}

#[test]
fn january_start_needs_no_target() {
    // start_month = 1 never rotates, so sparse data cannot miss a target.
    let spring_only = daily_range(
        NaiveDate::from_ymd_opt(2003, 2, 1).unwrap(),
        NaiveDate::from_ymd_opt(2003, 3, 31).unwrap(),
    );
    let result = annual_regime(&spring_only, &RegimeConfig::new()).unwrap();
    assert_eq!(result.period_labels()[0], "02-01");
}
