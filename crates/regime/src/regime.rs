//! Pipeline entry point for the annual regime computation.

use regime_calendar::Timestep;
use tracing::debug;

use crate::aggregate::aggregate;
use crate::config::RegimeConfig;
use crate::error::RegimeError;
use crate::reorder::reorder;
use crate::resolve::resolve_timesteps;
use crate::result::RegimeResult;
use crate::table::SeriesTable;
use crate::upsample::upsample_weekly;

/// Computes long-term annual regime statistics for every variable in
/// `table`, expressed on the hydrological-year calendar selected by
/// `config`.
///
/// Chains: timestep resolution -> weekly upsampling -> period grouping ->
/// summary statistics -> hydrological-year reordering with reference dates.
/// Pure function: the same input always produces the same result and no
/// state outlives the call.
///
/// # Errors
///
/// Configuration problems ([`RegimeError::MissingTimestep`],
/// [`RegimeError::IncompatibleTimesteps`], [`RegimeError::InvalidStartMonth`],
/// a [`CalendarError`](regime_calendar::CalendarError) from an unknown
/// timestep keyword) surface before any aggregation work.
/// [`RegimeError::RotationTargetMissing`] is returned when the period that
/// should open the hydrological year is absent from the aggregated data.
#[tracing::instrument(skip(table, config), fields(rows = table.len(), vars = table.n_vars()))]
pub fn annual_regime(
    table: &SeriesTable,
    config: &RegimeConfig,
) -> Result<RegimeResult, RegimeError> {
    config.validate()?;
    let (ts_in, ts_out) = resolve_timesteps(table, config)?;
    debug!(%ts_in, %ts_out, "resolved timesteps");

    let upsampled;
    let working = if ts_in == Timestep::Week {
        upsampled = upsample_weekly(table);
        &upsampled
    } else {
        table
    };

    let aggregated = aggregate(working, ts_out, config.stat(), config.na_rm());
    let rows = reorder(
        aggregated,
        ts_out,
        config.start_month(),
        config.include_leap_day(),
    )?;

    Ok(RegimeResult::new(
        table.variables().to_vec(),
        rows.reference_dates,
        rows.labels,
        &rows.stats,
        (table.first_timestamp(), table.last_timestamp()),
        ts_out,
    ))
}
