//! # regime-calendar
//!
//! Pure date arithmetic for regime aggregation: timestep keywords with their
//! granularity ordering, Monday-start week-of-year numbering, and the fixed
//! month-to-week lookup used when a hydrological year starts mid-year.
//!
//! ## Quick Start
//!
//! ```ignore
//! use regime_calendar::{Timestep, month_start_week, wednesday_of_week, week_of_year};
//! use chrono::NaiveDate;
//!
//! // Timestep keywords and aggregation compatibility
//! let ts: Timestep = "6hour".parse()?;
//! assert!(ts.can_aggregate_to(Timestep::Day));
//!
//! // Week numbering (Monday-start, days before the first Monday are week 0)
//! let d = NaiveDate::from_ymd_opt(2003, 1, 6).unwrap();
//! assert_eq!(week_of_year(d), 1);
//!
//! // Rotation target for an October-start hydrological year
//! assert_eq!(month_start_week(10)?, 40);
//!
//! // Reference date for plotting a weekly period
//! let wed = wednesday_of_week(1913, 1)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `timestep` | Timestep keywords and granularity ordering |
//! | `week` | Week-of-year numbering and month-to-week lookup |
//! | `error` | Error types |

mod error;
mod timestep;
mod week;

pub use error::CalendarError;
pub use timestep::Timestep;
pub use week::{month_start_week, wednesday_of_week, week_of_year};
