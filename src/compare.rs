//! Comparisons between two points in time

use chrono::{DateTime, Datelike, TimeZone};

/// Whether `a` and `b` fall on the same calendar day.
///
/// Each side is read in its own zone. Both the year and the day of the year
/// must match, so January 1 of two different years is not the same day.
pub fn is_same_day<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a.ordinal() == b.ordinal() && a.year() == b.year()
}

/// Whole days elapsed from `start` to `end`, truncated toward zero.
///
/// Negative when `end` precedes `start`.
pub fn diff_in_days<A: TimeZone, B: TimeZone>(start: &DateTime<A>, end: &DateTime<B>) -> i64 {
    end.clone().signed_duration_since(start.clone()).num_days()
}
