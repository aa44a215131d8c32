//! Civil calendar construction.
//!
//! Builds points in time from calendar fields the way a wall calendar reads
//! them. Out-of-range fields are normalized instead of rejected: month 13 is
//! January of the next year, day 0 is the last day of the previous month, and
//! negative values borrow from the next larger unit.

use crate::error::{CalendarError, Result};
use chrono::{DateTime, Days, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};
use log::debug;

/// 00:00:00.000000000
pub const START_OF_DAY: NaiveTime = match NaiveTime::from_hms_nano_opt(0, 0, 0, 0) {
    Some(time) => time,
    None => panic!("midnight is a valid time"),
};

/// 23:59:59.999999999
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999) {
    Some(time) => time,
    None => panic!("last nanosecond of the day is a valid time"),
};

/// Which side of a period a civil time is anchoring.
///
/// Decides how a civil time that occurs twice (clocks turned back) is mapped
/// to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Take the earliest instant.
    Start,
    /// Take the latest instant.
    End,
}

/// Normalizes `year`/`month`/`day` into a valid calendar date.
///
/// # Errors
/// Returns [`CalendarError::OutOfRange`] if the normalized date cannot be
/// represented.
pub fn normalize_date(year: i64, month: i64, day: i64) -> Result<NaiveDate> {
    let out_of_range = || CalendarError::OutOfRange { year, month, day };

    let month0 = month.checked_sub(1).ok_or_else(out_of_range)?;
    let year = year.checked_add(month0.div_euclid(12)).ok_or_else(out_of_range)?;
    let month = (month0.rem_euclid(12) + 1) as u32;

    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;

    let offset = day.checked_sub(1).ok_or_else(out_of_range)?;
    let date = if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    date.ok_or_else(out_of_range)
}

/// Builds the instant for the given civil fields in `tz`, normalizing every
/// field that overflows its natural range.
///
/// ```
/// use chrono::{Datelike, Utc};
/// use moment::civil;
///
/// // Day 0 of March is the last day of February.
/// let t = civil::date(&Utc, 2024, 3, 0, 0, 0, 0, 0).unwrap();
/// assert_eq!((t.month(), t.day()), (2, 29));
/// ```
///
/// # Errors
/// Returns [`CalendarError::OutOfRange`] if the result cannot be represented.
#[allow(clippy::too_many_arguments)]
pub fn date<Tz: TimeZone>(
    tz: &Tz,
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    nanosecond: i64,
) -> Result<DateTime<Tz>> {
    let out_of_range = || CalendarError::OutOfRange { year, month, day };

    let midnight = normalize_date(year, month, day)?.and_time(START_OF_DAY);
    let time_of_day = TimeDelta::try_hours(hour)
        .and_then(|d| d.checked_add(&TimeDelta::try_minutes(minute)?))
        .and_then(|d| d.checked_add(&TimeDelta::try_seconds(second)?))
        .and_then(|d| d.checked_add(&TimeDelta::nanoseconds(nanosecond)))
        .ok_or_else(out_of_range)?;
    let naive = midnight
        .checked_add_signed(time_of_day)
        .ok_or_else(out_of_range)?;

    Ok(resolve_local(tz, naive, Edge::Start))
}

/// Maps a civil date-time in `tz` to a single instant.
///
/// A civil time skipped by a forward transition is read with the offset in
/// force before the transition, which places it just after the gap. A civil
/// time that occurs twice resolves according to `edge`.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime, edge: Edge) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, latest) => {
            debug!("Ambiguous civil time {}, resolving to {:?} edge", naive, edge);
            match edge {
                Edge::Start => earliest,
                Edge::End => latest,
            }
        }
        LocalResult::None => {
            debug!("Civil time {} falls in a transition gap", naive);
            let before = naive.checked_sub_signed(TimeDelta::days(1)).unwrap_or(naive);
            let offset = tz.offset_from_utc_datetime(&before).fix();
            let utc = naive
                .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
                .unwrap_or(naive);
            tz.from_utc_datetime(&utc)
        }
    }
}

/// `date` at 00:00:00.000000000 in `tz`.
pub(crate) fn start_of<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    resolve_local(tz, date.and_time(START_OF_DAY), Edge::Start)
}

/// `date` at 23:59:59.999999999 in `tz`.
pub(crate) fn end_of<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    resolve_local(tz, date.and_time(END_OF_DAY), Edge::End)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset, Timelike, Utc};
    use chrono_tz::Europe::Paris;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_normalize_in_range() {
        assert_eq!(normalize_date(2023, 6, 15).unwrap(), ymd(2023, 6, 15));
    }

    #[test]
    fn test_normalize_day_zero() {
        assert_eq!(normalize_date(2023, 3, 0).unwrap(), ymd(2023, 2, 28));
        assert_eq!(normalize_date(2024, 3, 0).unwrap(), ymd(2024, 2, 29));
        assert_eq!(normalize_date(2024, 1, 0).unwrap(), ymd(2023, 12, 31));
    }

    #[test]
    fn test_normalize_month_overflow() {
        assert_eq!(normalize_date(2023, 13, 1).unwrap(), ymd(2024, 1, 1));
        assert_eq!(normalize_date(2023, 13, 0).unwrap(), ymd(2023, 12, 31));
        assert_eq!(normalize_date(2023, 0, 1).unwrap(), ymd(2022, 12, 1));
        assert_eq!(normalize_date(2023, -11, 1).unwrap(), ymd(2022, 1, 1));
    }

    #[test]
    fn test_normalize_leap_day_in_common_year() {
        assert_eq!(normalize_date(2023, 2, 29).unwrap(), ymd(2023, 3, 1));
    }

    #[test]
    fn test_normalize_out_of_range() {
        assert_eq!(
            normalize_date(i64::MAX, 1, 1),
            Err(CalendarError::OutOfRange {
                year: i64::MAX,
                month: 1,
                day: 1
            })
        );
    }

    #[test]
    fn test_date_time_overflow() {
        let t = date(&Utc, 2023, 12, 31, 24, 0, 0, 0).unwrap();
        assert_eq!(t.date_naive(), ymd(2024, 1, 1));
        assert_eq!(t.hour(), 0);

        let t = date(&Utc, 2023, 1, 1, 0, 0, -1, 0).unwrap();
        assert_eq!(t.date_naive(), ymd(2022, 12, 31));
        assert_eq!((t.hour(), t.minute(), t.second()), (23, 59, 59));
    }

    #[test]
    fn test_date_keeps_offset() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let t = date(&tz, 2023, 5, 1, 0, 0, 0, 0).unwrap();
        assert_eq!(t.offset(), &tz);
        assert_eq!(t.day(), 1);
    }

    #[test]
    fn test_resolve_gap_moves_past_transition() {
        // Paris skips 02:00-03:00 on 2024-03-31.
        let naive = ymd(2024, 3, 31).and_hms_opt(2, 30, 0).unwrap();
        let t = resolve_local(&Paris, naive, Edge::Start);
        assert_eq!((t.hour(), t.minute()), (3, 30));
    }

    #[test]
    fn test_resolve_fold_follows_edge() {
        // Paris repeats 02:00-03:00 on 2024-10-27.
        let naive = ymd(2024, 10, 27).and_hms_opt(2, 30, 0).unwrap();
        let start = resolve_local(&Paris, naive, Edge::Start);
        let end = resolve_local(&Paris, naive, Edge::End);
        assert!(start < end);
        assert_eq!(end - start, TimeDelta::hours(1));
    }
}
