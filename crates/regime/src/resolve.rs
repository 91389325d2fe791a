//! Timestep resolution: effective input and output granularity.

use regime_calendar::Timestep;

use crate::config::RegimeConfig;
use crate::error::RegimeError;
use crate::table::SeriesTable;

/// Resolves the effective `(input, output)` timestep pair.
///
/// The input timestep comes from the configuration when set, otherwise from
/// the table's granularity attribute. The output timestep defaults to the
/// input and must be equal or coarser.
pub(crate) fn resolve_timesteps(
    table: &SeriesTable,
    config: &RegimeConfig,
) -> Result<(Timestep, Timestep), RegimeError> {
    let ts_in = config
        .input_timestep()
        .or_else(|| table.timestep())
        .ok_or(RegimeError::MissingTimestep)?;
    let ts_out = config.output_timestep().unwrap_or(ts_in);
    if !ts_in.can_aggregate_to(ts_out) {
        return Err(RegimeError::IncompatibleTimesteps { ts_in, ts_out });
    }
    Ok((ts_in, ts_out))
}
