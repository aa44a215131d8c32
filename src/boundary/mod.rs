//! Calendar period boundaries.
//!
//! Each submodule covers one granularity. Every function takes an explicit
//! point in time and returns values in the same zone; "start" results sit at
//! 00:00:00.000000000 and "end" results at 23:59:59.999999999 of that zone.
//!
//! # Available Granularities
//!
//! - [`day`] - start and end of a day
//! - [`week`] - Monday to Sunday weeks, weekday/weekend checks
//! - [`month`] - month boundaries and month lengths
//! - [`quarter`] - quarter numbers and quarter boundaries
//! - [`year`] - year boundaries, leap years and ordinal days

pub mod day;
pub mod month;
pub mod quarter;
pub mod week;
pub mod year;

pub use day::{end_of_day, start_of_day};
pub use month::{days_in_month, end_of_month, is_first_day_of_month, is_last_day_of_month, start_of_month};
pub use quarter::{
    end_of_quarter, end_of_quarter_str, is_first_day_of_quarter, is_last_day_of_quarter, quarter, start_of_quarter,
    start_of_quarter_str,
};
pub use week::{end_of_week, is_weekday, is_weekend, start_of_week};
pub use year::{
    day_of_year, days_in_year, end_of_year, is_first_day_of_year, is_last_day_of_year, is_leap_year, start_of_year,
};
