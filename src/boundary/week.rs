//! Week boundaries and weekday classification
//!
//! Weeks run from Monday to Sunday.

use crate::civil;
use chrono::{DateTime, Datelike, Duration, TimeZone, Weekday};

/// Monday 00:00:00.000000000 of the week containing `t`.
///
/// On a Sunday this is the Monday six days earlier, never the upcoming one.
pub fn start_of_week<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let date = t.date_naive();
    let offset = date.weekday().num_days_from_monday() as i64;
    civil::start_of(&t.timezone(), date - Duration::days(offset))
}

/// Sunday 23:59:59.999999999 of the week containing `t`.
pub fn end_of_week<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let date = t.date_naive();
    let offset = 6 - date.weekday().num_days_from_monday() as i64;
    civil::end_of(&t.timezone(), date + Duration::days(offset))
}

/// Whether `t` falls on a Saturday or Sunday.
pub fn is_weekend<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    matches!(t.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether `t` falls on Monday through Friday.
pub fn is_weekday<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    !is_weekend(t)
}
