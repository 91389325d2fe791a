//! Output container: six parallel statistic tables plus attributes.

use chrono::NaiveDateTime;
use regime_calendar::Timestep;
use regime_stats::Summary;

/// Selects one of the six aggregate statistics of a [`RegimeResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Mean,
    Median,
    Minimum,
    Maximum,
    P25,
    P75,
}

impl Statistic {
    /// All six statistics in reporting order.
    pub const ALL: [Statistic; 6] = [
        Statistic::Mean,
        Statistic::Median,
        Statistic::Minimum,
        Statistic::Maximum,
        Statistic::P25,
        Statistic::P75,
    ];
}

/// Result of an annual regime computation.
///
/// Periods are stored once (reference dates and labels in hydrological-year
/// order); the six statistic tables are exposed as borrowed views over the
/// shared rows, so they have identical row counts and label sequences by
/// construction.
#[derive(Debug, Clone)]
pub struct RegimeResult {
    variables: Vec<String>,
    reference_dates: Vec<NaiveDateTime>,
    period_labels: Vec<String>,
    mean: Vec<Vec<f64>>,
    median: Vec<Vec<f64>>,
    minimum: Vec<Vec<f64>>,
    maximum: Vec<Vec<f64>>,
    p25: Vec<Vec<f64>>,
    p75: Vec<Vec<f64>>,
    period: (NaiveDateTime, NaiveDateTime),
    timestep: Timestep,
}

impl RegimeResult {
    /// Assembles the result from per-period summary blocks
    /// (`stats[period][variable]`).
    pub(crate) fn new(
        variables: Vec<String>,
        reference_dates: Vec<NaiveDateTime>,
        period_labels: Vec<String>,
        stats: &[Vec<Summary>],
        period: (NaiveDateTime, NaiveDateTime),
        timestep: Timestep,
    ) -> Self {
        let pick = |f: fn(&Summary) -> f64| -> Vec<Vec<f64>> {
            stats
                .iter()
                .map(|row| row.iter().map(f).collect())
                .collect()
        };
        Self {
            variables,
            reference_dates,
            period_labels,
            mean: pick(|s| s.mean),
            median: pick(|s| s.median),
            minimum: pick(|s| s.min),
            maximum: pick(|s| s.max),
            p25: pick(|s| s.p25),
            p75: pick(|s| s.p75),
            period,
            timestep,
        }
    }

    /// Returns the variable names, in column order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Returns the synthetic plotting dates, one per period.
    ///
    /// These use fixed placeholder years and exist only to lay a full
    /// hydrological year on a continuous date axis; never use them for
    /// elapsed-time arithmetic.
    pub fn reference_dates(&self) -> &[NaiveDateTime] {
        &self.reference_dates
    }

    /// Returns the period labels in hydrological-year order.
    pub fn period_labels(&self) -> &[String] {
        &self.period_labels
    }

    /// Returns the number of periods.
    pub fn len(&self) -> usize {
        self.period_labels.len()
    }

    /// Returns `true` if there are no periods.
    pub fn is_empty(&self) -> bool {
        self.period_labels.is_empty()
    }

    /// Returns the first and last timestamp of the source data.
    pub fn period(&self) -> (NaiveDateTime, NaiveDateTime) {
        self.period
    }

    /// Returns the resolved output timestep.
    pub fn timestep(&self) -> Timestep {
        self.timestep
    }

    /// Returns the table view for `statistic`.
    pub fn table(&self, statistic: Statistic) -> RegimeTable<'_> {
        let values = match statistic {
            Statistic::Mean => &self.mean,
            Statistic::Median => &self.median,
            Statistic::Minimum => &self.minimum,
            Statistic::Maximum => &self.maximum,
            Statistic::P25 => &self.p25,
            Statistic::P75 => &self.p75,
        };
        RegimeTable {
            reference_dates: &self.reference_dates,
            period_labels: &self.period_labels,
            values,
        }
    }

    /// Returns the long-term mean table.
    pub fn mean(&self) -> RegimeTable<'_> {
        self.table(Statistic::Mean)
    }

    /// Returns the long-term median table.
    pub fn median(&self) -> RegimeTable<'_> {
        self.table(Statistic::Median)
    }

    /// Returns the long-term minimum table.
    pub fn minimum(&self) -> RegimeTable<'_> {
        self.table(Statistic::Minimum)
    }

    /// Returns the long-term maximum table.
    pub fn maximum(&self) -> RegimeTable<'_> {
        self.table(Statistic::Maximum)
    }

    /// Returns the 25th percentile table.
    pub fn p25(&self) -> RegimeTable<'_> {
        self.table(Statistic::P25)
    }

    /// Returns the 75th percentile table.
    pub fn p75(&self) -> RegimeTable<'_> {
        self.table(Statistic::P75)
    }
}

/// Borrowed view of one statistic table: rows of
/// `(reference_date, period_label, one value per variable)`.
#[derive(Debug, Clone, Copy)]
pub struct RegimeTable<'a> {
    reference_dates: &'a [NaiveDateTime],
    period_labels: &'a [String],
    values: &'a [Vec<f64>],
}

impl<'a> RegimeTable<'a> {
    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.period_labels.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.period_labels.is_empty()
    }

    /// Returns the synthetic plotting dates.
    pub fn reference_dates(&self) -> &'a [NaiveDateTime] {
        self.reference_dates
    }

    /// Returns the period labels.
    pub fn period_labels(&self) -> &'a [String] {
        self.period_labels
    }

    /// Returns the value rows (`values[row][variable]`).
    pub fn values(&self) -> &'a [Vec<f64>] {
        self.values
    }

    /// Returns the value for one row and variable.
    pub fn value(&self, row: usize, var: usize) -> f64 {
        self.values[row][var]
    }

    /// Collects the value column for one variable.
    pub fn column(&self, var: usize) -> Vec<f64> {
        self.values.iter().map(|row| row[var]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    fn sample() -> RegimeResult {
        let stats = vec![
            vec![Summary::compute(&[1.0, 3.0], true)],
            vec![Summary::compute(&[2.0, 4.0], true)],
        ];
        RegimeResult::new(
            vec!["Q".to_string()],
            vec![dt(1912, 1, 1), dt(1912, 1, 2)],
            vec!["01-01".to_string(), "01-02".to_string()],
            &stats,
            (dt(2001, 1, 1), dt(2002, 1, 2)),
            Timestep::Day,
        )
    }

    #[test]
    fn accessors() {
        let r = sample();
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
        assert_eq!(r.variables(), &["Q".to_string()]);
        assert_eq!(r.period_labels(), &["01-01".to_string(), "01-02".to_string()]);
        assert_eq!(r.period(), (dt(2001, 1, 1), dt(2002, 1, 2)));
        assert_eq!(r.timestep(), Timestep::Day);
    }

    #[test]
    fn six_tables_share_rows() {
        let r = sample();
        for statistic in Statistic::ALL {
            let t = r.table(statistic);
            assert_eq!(t.len(), r.len());
            assert_eq!(t.period_labels(), r.period_labels());
            assert_eq!(t.reference_dates(), r.reference_dates());
        }
    }

    #[test]
    fn statistic_views_select_their_field() {
        let r = sample();
        assert_eq!(r.mean().value(0, 0), 2.0);
        assert_eq!(r.minimum().value(0, 0), 1.0);
        assert_eq!(r.maximum().value(0, 0), 3.0);
        assert_eq!(r.median().value(0, 0), 2.0);
        assert_eq!(r.mean().value(1, 0), 3.0);
    }

    #[test]
    fn table_column() {
        let r = sample();
        assert_eq!(r.mean().column(0), vec![2.0, 3.0]);
    }
}
