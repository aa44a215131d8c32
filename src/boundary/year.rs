//! Year boundaries, leap years and ordinal days

use crate::civil;
use chrono::{DateTime, Datelike, Duration, TimeZone};

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
///
/// Years divisible by 4 are leap years, except centuries, which must also be
/// divisible by 400: 2000 and 2004 are leap years, 1900 and 2005 are not.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 366 for leap years, 365 otherwise.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// January 1 of `t`'s year at 00:00:00.000000000.
pub fn start_of_year<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let date = t.date_naive();
    civil::start_of(&t.timezone(), date - Duration::days(date.ordinal0() as i64))
}

/// December 31 of `t`'s year at 23:59:59.999999999.
pub fn end_of_year<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let date = t.date_naive();
    let remaining = days_in_year(date.year()) - date.ordinal();
    civil::end_of(&t.timezone(), date + Duration::days(remaining as i64))
}

/// Whether `t` is January 1.
pub fn is_first_day_of_year<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    t.day() == 1 && t.month() == 1
}

/// Whether `t` is December 31.
pub fn is_last_day_of_year<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    t.day() == 31 && t.month() == 12
}

/// 1-based day of the year: January 1 is 1, December 31 is 365 or 366.
pub fn day_of_year<Tz: TimeZone>(t: &DateTime<Tz>) -> u32 {
    t.ordinal()
}
