//! Long-term annual regime statistics for hydrological time series.
//!
//! Reduces an equally spaced, timestamped series to one row per recurring
//! calendar period (hour of day, day, week or month of the year), with six
//! long-term statistics per variable, reordered to a user-selected
//! hydrological-year calendar.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────┐   ┌──────────┐   ┌─────────────┐   ┌───────────┐   ┌──────────────┐
//!  │ Timestep  │──▶│  Weekly   │──▶│ Period keys  │──▶│ Aggregate  │──▶│ Reorder +     │
//!  │ resolver  │   │ upsampler │   │ (label+order)│   │ (6 stats)  │   │ reference date│
//!  └──────────┘   └──────────┘   └─────────────┘   └───────────┘   └──────────────┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use regime::{annual_regime, RegimeConfig, SeriesTable, Stat, Timestep};
//!
//! let table = SeriesTable::new(timestamps, vec!["Q".to_string()], vec![flows])?
//!     .with_timestep(Timestep::Day);
//! let config = RegimeConfig::new()
//!     .with_output_timestep(Timestep::Month)
//!     .with_stat(Stat::Sum)
//!     .with_start_month(10);
//! let result = annual_regime(&table, &config)?;
//! let october = result.mean().value(0, 0);
//! ```

mod aggregate;
mod config;
mod error;
mod period;
mod regime;
mod reorder;
mod resolve;
mod result;
mod table;
mod upsample;

pub use config::{RegimeConfig, Stat};
pub use error::RegimeError;
pub use regime::annual_regime;
pub use regime_calendar::Timestep;
pub use result::{RegimeResult, RegimeTable, Statistic};
pub use table::SeriesTable;
