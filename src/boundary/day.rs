//! Day boundaries

use crate::civil;
use chrono::{DateTime, TimeZone};

/// The first instant of `t`'s day, 00:00:00.000000000 in `t`'s zone.
pub fn start_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    civil::start_of(&t.timezone(), t.date_naive())
}

/// The last instant of `t`'s day, 23:59:59.999999999 in `t`'s zone.
pub fn end_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    civil::end_of(&t.timezone(), t.date_naive())
}
