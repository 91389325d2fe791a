//! Input time series table with its granularity attribute.

use chrono::NaiveDateTime;
use regime_calendar::Timestep;

use crate::error::RegimeError;

/// Owned, column-major time series table.
///
/// One timestamp per row and one column per variable. Missing observations
/// are `f64::NAN`. The granularity attribute carried by the data source, if
/// any, is attached with [`SeriesTable::with_timestep`] and is used when no
/// explicit input timestep is configured.
///
/// Timestamps must be strictly increasing. Equal spacing at the declared
/// granularity is the caller's responsibility and is not validated here.
#[derive(Debug, Clone)]
pub struct SeriesTable {
    timestamps: Vec<NaiveDateTime>,
    variables: Vec<String>,
    columns: Vec<Vec<f64>>,
    timestep: Option<Timestep>,
}

impl SeriesTable {
    /// Builds a table from timestamps, variable names and value columns.
    ///
    /// # Errors
    ///
    /// Returns [`RegimeError`] if the table is empty, the column count does
    /// not match the variable count, any column length differs from the
    /// timestamp count, timestamps are not strictly increasing, or any value
    /// is infinite (`NaN` marks missing data and is allowed).
    pub fn new(
        timestamps: Vec<NaiveDateTime>,
        variables: Vec<String>,
        columns: Vec<Vec<f64>>,
    ) -> Result<Self, RegimeError> {
        if timestamps.is_empty() || variables.is_empty() {
            return Err(RegimeError::EmptyTable);
        }
        if columns.len() != variables.len() {
            return Err(RegimeError::ColumnCountMismatch {
                expected: variables.len(),
                got: columns.len(),
            });
        }
        let n = timestamps.len();
        for (variable, column) in variables.iter().zip(columns.iter()) {
            if column.len() != n {
                return Err(RegimeError::ColumnLengthMismatch {
                    variable: variable.clone(),
                    expected: n,
                    got: column.len(),
                });
            }
        }
        for (i, pair) in timestamps.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(RegimeError::UnsortedTimestamps { index: i + 1 });
            }
        }
        for (variable, column) in variables.iter().zip(columns.iter()) {
            if let Some(index) = column.iter().position(|v| v.is_infinite()) {
                return Err(RegimeError::InfiniteValue {
                    variable: variable.clone(),
                    index,
                });
            }
        }

        Ok(Self {
            timestamps,
            variables,
            columns,
            timestep: None,
        })
    }

    /// Internal constructor for tables derived from an already validated
    /// table (the weekly upsampler).
    pub(crate) fn from_parts(
        timestamps: Vec<NaiveDateTime>,
        variables: Vec<String>,
        columns: Vec<Vec<f64>>,
        timestep: Option<Timestep>,
    ) -> Self {
        Self {
            timestamps,
            variables,
            columns,
            timestep,
        }
    }

    /// Attaches the granularity attribute of the data source.
    pub fn with_timestep(mut self, timestep: Timestep) -> Self {
        self.timestep = Some(timestep);
        self
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Returns the number of variables.
    pub fn n_vars(&self) -> usize {
        self.variables.len()
    }

    /// Returns the row timestamps.
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Returns the variable names, in column order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Returns all value columns, one per variable.
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// Returns the value column for variable `var`.
    pub fn column(&self, var: usize) -> &[f64] {
        &self.columns[var]
    }

    /// Returns the granularity attribute, if any.
    pub fn timestep(&self) -> Option<Timestep> {
        self.timestep
    }

    /// Returns the first row timestamp.
    pub fn first_timestamp(&self) -> NaiveDateTime {
        self.timestamps[0]
    }

    /// Returns the last row timestamp.
    pub fn last_timestamp(&self) -> NaiveDateTime {
        self.timestamps[self.timestamps.len() - 1]
    }
}
