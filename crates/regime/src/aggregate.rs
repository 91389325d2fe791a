//! Period grouping and long-term summary statistics.

use std::collections::BTreeMap;

use chrono::Datelike;
use rayon::prelude::*;
use regime_calendar::Timestep;
use regime_stats::Summary;
use tracing::debug;

use crate::config::Stat;
use crate::period::period_key;
use crate::table::SeriesTable;

/// Aggregated periods in calendar order, one summary block per variable.
pub(crate) struct Aggregated {
    pub labels: Vec<String>,
    pub orders: Vec<u32>,
    /// `stats[period][variable]`
    pub stats: Vec<Vec<Summary>>,
}

/// Groups table rows by period key and computes the six summary statistics
/// per variable.
///
/// Groups are keyed by the numeric calendar order, so the result is
/// calendar-sorted by construction regardless of insertion order.
pub(crate) fn aggregate(
    table: &SeriesTable,
    ts_out: Timestep,
    stat: Stat,
    na_rm: bool,
) -> Aggregated {
    let agg = match stat {
        Stat::Mean => pooled_groups(table, ts_out),
        Stat::Sum => yearly_sum_groups(table, ts_out, na_rm),
    };
    debug!(periods = agg.len(), stat = ?stat, "grouped rows into periods");
    finalize(agg, na_rm)
}

type Groups = BTreeMap<u32, (String, Vec<Vec<f64>>)>;

/// One value pool per (period, variable), all years together.
fn pooled_groups(table: &SeriesTable, ts_out: Timestep) -> Groups {
    let n_vars = table.n_vars();
    let mut groups = Groups::new();
    for (row, ts) in table.timestamps().iter().enumerate() {
        let (label, order) = period_key(ts_out, *ts);
        let (_, values) = groups
            .entry(order)
            .or_insert_with(|| (label, vec![Vec::new(); n_vars]));
        for (var, col) in table.columns().iter().enumerate() {
            values[var].push(col[row]);
        }
    }
    groups
}

/// One value pool per (period, variable) holding per-year totals: rows are
/// first summed within each (calendar year, period) group, then the yearly
/// totals are pooled per period.
fn yearly_sum_groups(table: &SeriesTable, ts_out: Timestep, na_rm: bool) -> Groups {
    let n_vars = table.n_vars();
    let mut yearly: BTreeMap<(i32, u32), (String, Vec<Vec<f64>>)> = BTreeMap::new();
    for (row, ts) in table.timestamps().iter().enumerate() {
        let (label, order) = period_key(ts_out, *ts);
        let year = ts.year();
        let (_, values) = yearly
            .entry((year, order))
            .or_insert_with(|| (label, vec![Vec::new(); n_vars]));
        for (var, col) in table.columns().iter().enumerate() {
            values[var].push(col[row]);
        }
    }

    let mut groups = Groups::new();
    for ((_, order), (label, values)) in yearly {
        let (_, totals) = groups
            .entry(order)
            .or_insert_with(|| (label, vec![Vec::new(); n_vars]));
        for (var, pool) in values.iter().enumerate() {
            totals[var].push(regime_stats::sum(pool, na_rm));
        }
    }
    groups
}

/// Computes the per-variable summaries for every group, in calendar order.
fn finalize(groups: Groups, na_rm: bool) -> Aggregated {
    let mut labels = Vec::with_capacity(groups.len());
    let mut orders = Vec::with_capacity(groups.len());
    let mut pools = Vec::with_capacity(groups.len());
    for (order, (label, values)) in groups {
        labels.push(label);
        orders.push(order);
        pools.push(values);
    }

    let stats: Vec<Vec<Summary>> = pools
        .par_iter()
        .map(|vars| vars.iter().map(|v| Summary::compute(v, na_rm)).collect())
        .collect();

    Aggregated {
        labels,
        orders,
        stats,
    }
}
