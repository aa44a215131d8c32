//! Relative time formatting
//!
//! Renders how long ago an instant was, the way activity feeds do
//! ("just now", "5 minutes ago", "3 months ago").

use crate::constants::{
    DAYS_PER_MONTH, DAYS_PER_YEAR, JUST_NOW, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, UNIT_DAY,
    UNIT_HOUR, UNIT_MINUTE, UNIT_MONTH, UNIT_YEAR,
};
use chrono::{DateTime, TimeZone};

/// Human-readable time elapsed from `t` to `now`.
///
/// Thresholds are checked in order and every count truncates toward zero:
///
/// | elapsed          | output            |
/// |------------------|-------------------|
/// | under 1 minute   | `just now`        |
/// | under 1 hour     | `N minutes ago`   |
/// | under 24 hours   | `N hours ago`     |
/// | under 30 days    | `N days ago`      |
/// | under 365 days   | `N months ago` (days / 30) |
/// | otherwise        | `N years ago` (days / 365) |
///
/// Instants after `now` count as `just now`.
pub fn time_ago<Tz: TimeZone, Now: TimeZone>(t: &DateTime<Tz>, now: &DateTime<Now>) -> String {
    let elapsed = now.clone().signed_duration_since(t.clone()).num_seconds();
    let days = elapsed / SECONDS_PER_DAY;

    if elapsed < SECONDS_PER_MINUTE {
        JUST_NOW.to_string()
    } else if elapsed < SECONDS_PER_HOUR {
        ago(elapsed / SECONDS_PER_MINUTE, UNIT_MINUTE)
    } else if elapsed < SECONDS_PER_DAY {
        ago(elapsed / SECONDS_PER_HOUR, UNIT_HOUR)
    } else if days < DAYS_PER_MONTH {
        ago(days, UNIT_DAY)
    } else if days < DAYS_PER_YEAR {
        ago(days / DAYS_PER_MONTH, UNIT_MONTH)
    } else {
        ago(days / DAYS_PER_YEAR, UNIT_YEAR)
    }
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{} {} ago", count, unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ago_pluralizes() {
        assert_eq!(ago(1, UNIT_HOUR), "1 hour ago");
        assert_eq!(ago(2, UNIT_HOUR), "2 hours ago");
        assert_eq!(ago(0, UNIT_DAY), "0 days ago");
    }
}
