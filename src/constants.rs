//! Constants used throughout the crate
//!
//! This module centralizes format strings, relative-time labels and threshold
//! values so the rendering code and its tests agree on them.

// Formatting
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Time zone name that selects the process zone
pub const LOCAL_ZONE_NAME: &str = "local";

// Relative time labels
pub const JUST_NOW: &str = "just now";
pub const UNIT_MINUTE: &str = "minute";
pub const UNIT_HOUR: &str = "hour";
pub const UNIT_DAY: &str = "day";
pub const UNIT_MONTH: &str = "month";
pub const UNIT_YEAR: &str = "year";

// Relative time thresholds, in seconds
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
pub const DAYS_PER_MONTH: i64 = 30;
pub const DAYS_PER_YEAR: i64 = 365;

// Configuration file lookup
pub const CONFIG_FILE_NAME: &str = "moment.toml";
pub const CONFIG_DIR_NAME: &str = "moment";
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";
