//! moment - calendar boundary helpers built on chrono
//!
//! This library answers everyday calendar questions: where a day, week,
//! month, quarter or year starts and ends, whether a date is a weekend or the
//! last day of its month, how many days separate two instants, and how long
//! ago something happened.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`boundary`] - Start/end of periods and calendar predicates
//! * [`calendar`] - The same operations relative to "now", with an injected clock
//! * [`civil`] - Construction from calendar fields with normalization
//! * [`compare`] - Same-day checks and day differences
//! * [`range`] - Inclusive date ranges
//! * [`relative`] - "time ago" formatting
//! * [`zone`] - Time zones and conversion
//! * [`config`] / [`logger`] - Application configuration and logging setup
//!
//! ```
//! use chrono::{TimeZone, Timelike, Utc};
//! use moment::boundary;
//!
//! let t = Utc.with_ymd_and_hms(2024, 2, 10, 15, 30, 0).unwrap();
//! let end = boundary::end_of_month(&t);
//! assert_eq!(end.to_string(), "2024-02-29 23:59:59.999999999 UTC");
//! assert_eq!(boundary::start_of_month(&t).hour(), 0);
//! ```

/// Period boundaries and calendar predicates
pub mod boundary;

/// Calendar bound to a clock and a time zone
pub mod calendar;

/// Civil calendar construction and normalization
pub mod civil;

/// Time sources
pub mod clock;

/// Comparisons between two points in time
pub mod compare;

/// Configuration module for managing library settings
pub mod config;

/// Constants and default values
pub mod constants;

/// Error types
pub mod error;

/// Date formatting
pub mod format;

/// Logging setup
pub mod logger;

/// Date ranges
pub mod range;

/// Relative time formatting
pub mod relative;

/// Time zones and conversion
pub mod zone;

// Re-export the main entry points for convenient access
pub use calendar::Calendar;
pub use clock::{Clock, FixedClock, SystemClock};
pub use compare::{diff_in_days, is_same_day};
pub use error::CalendarError;
pub use format::DateFormat;
pub use range::{dates_in_range, DateRange};
pub use relative::time_ago;
pub use zone::{convert_time_zone, Zone};
