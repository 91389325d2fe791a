//! Statistical helpers for regime aggregation.
//!
//! Conventions match R: quantiles are type 7, the median of an even-length
//! sample averages the middle pair, and `NaN` plays the role of `NA`. The
//! `na_rm` flag mirrors R's `na.rm`: when `true`, missing values are dropped
//! before computing a statistic; when `false`, a single missing value makes
//! the statistic itself missing.

/// Arithmetic mean of a slice. Returns `NaN` if empty (matching R's `mean()`
/// on a zero-length vector).
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sum with R's `na.rm` convention.
///
/// With `na_rm`, missing values are dropped and an all-missing (or empty)
/// slice sums to 0.0, matching `sum(..., na.rm = TRUE)`. Without it, any
/// missing value makes the sum missing.
pub fn sum(data: &[f64], na_rm: bool) -> f64 {
    if na_rm {
        data.iter().filter(|v| !v.is_nan()).sum()
    } else {
        data.iter().sum()
    }
}

/// R's default quantile algorithm (type=7).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Median of pre-sorted data. For even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "median: input must not be empty");
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// The six summary statistics reported for every period and variable.
///
/// `NaN` in any field means the statistic is undefined for that group
/// (empty after missing-value removal, or poisoned by a missing value when
/// `na_rm` is off).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

impl Summary {
    /// A summary with every statistic missing.
    pub fn undefined() -> Self {
        Self {
            mean: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            median: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        }
    }

    /// Computes the six statistics over `values` under the `na_rm` policy.
    ///
    /// With `na_rm`, missing values are excluded; a group that is empty after
    /// exclusion yields [`Summary::undefined`]. Without it, any missing value
    /// in the group yields [`Summary::undefined`].
    pub fn compute(values: &[f64], na_rm: bool) -> Self {
        if !na_rm && values.iter().any(|v| v.is_nan()) {
            return Self::undefined();
        }
        let mut finite: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if finite.is_empty() {
            return Self::undefined();
        }
        finite.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Self {
            mean: mean(&finite),
            min: finite[0],
            p25: quantile_type7(&finite, 0.25),
            median: median(&finite),
            p75: quantile_type7(&finite, 0.75),
            max: finite[finite.len() - 1],
        }
    }

    /// Returns `true` if every statistic is missing.
    pub fn is_undefined(&self) -> bool {
        self.mean.is_nan()
            && self.min.is_nan()
            && self.p25.is_nan()
            && self.median.is_nan()
            && self.p75.is_nan()
            && self.max.is_nan()
    }
}
