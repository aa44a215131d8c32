//! Month boundaries

use super::year::is_leap_year;
use crate::civil;
use chrono::{DateTime, Datelike, Duration, TimeZone};

/// Number of days in `month` (1-12) of `year`.
///
/// Returns 0 for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Day 1 of `t`'s month at 00:00:00.000000000.
pub fn start_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let date = t.date_naive();
    civil::start_of(&t.timezone(), date - Duration::days(date.day0() as i64))
}

/// Last day of `t`'s month at 23:59:59.999999999.
pub fn end_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let date = t.date_naive();
    let remaining = days_in_month(date.year(), date.month()) - date.day();
    civil::end_of(&t.timezone(), date + Duration::days(remaining as i64))
}

/// Whether `t` is on day 1 of its month.
pub fn is_first_day_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    t.day() == 1
}

/// Whether `t` is on the last calendar day of its month.
pub fn is_last_day_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    t.day() == days_in_month(t.year(), t.month())
}
