//! Quarter boundaries
//!
//! Quarter `n` covers months `3n-2` through `3n`: January-March is Q1,
//! October-December is Q4.

use super::month::days_in_month;
use crate::civil;
use crate::format::DateFormat;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};

/// The quarter (1-4) containing `t`.
pub fn quarter<Tz: TimeZone>(t: &DateTime<Tz>) -> u32 {
    (t.month() - 1) / 3 + 1
}

fn first_month(quarter: u32) -> u32 {
    (quarter - 1) * 3 + 1
}

fn last_month(quarter: u32) -> u32 {
    quarter * 3
}

/// Date `day` of `month` in the same year as `date`.
///
/// Moves `date` by whole days so no fallible construction is involved.
fn same_year(date: NaiveDate, month: u32, day: u32) -> NaiveDate {
    let target = (1..month).map(|m| days_in_month(date.year(), m)).sum::<u32>() + day;
    let delta = target as i64 - date.ordinal() as i64;
    date + Duration::days(delta)
}

/// First day of `t`'s quarter at 00:00:00.000000000.
pub fn start_of_quarter<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let date = t.date_naive();
    civil::start_of(&t.timezone(), same_year(date, first_month(quarter(t)), 1))
}

/// Last day of `t`'s quarter at 23:59:59.999999999.
///
/// For Q4 this is December 31 of `t`'s year.
pub fn end_of_quarter<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let date = t.date_naive();
    let month = last_month(quarter(t));
    let last = days_in_month(date.year(), month);
    civil::end_of(&t.timezone(), same_year(date, month, last))
}

/// Whether `t` is the first day of its quarter.
pub fn is_first_day_of_quarter<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    t.day() == 1 && t.month() == first_month(quarter(t))
}

/// Whether `t` is the last day of its quarter (Mar 31, Jun 30, Sep 30, Dec 31).
pub fn is_last_day_of_quarter<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    let month = last_month(quarter(t));
    t.month() == month && t.day() == days_in_month(t.year(), month)
}

/// [`start_of_quarter`] rendered with `format`.
pub fn start_of_quarter_str<Tz: TimeZone>(t: &DateTime<Tz>, format: &DateFormat) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format.render(&start_of_quarter(t))
}

/// [`end_of_quarter`] rendered with `format`.
pub fn end_of_quarter_str<Tz: TimeZone>(t: &DateTime<Tz>, format: &DateFormat) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format.render(&end_of_quarter(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_year_moves_to_target_day() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        assert_eq!(same_year(date, 4, 1), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(same_year(date, 6, 30), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(same_year(date, 1, 1), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(same_year(date, 12, 31), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_quarter_months() {
        assert_eq!((first_month(1), last_month(1)), (1, 3));
        assert_eq!((first_month(4), last_month(4)), (10, 12));
    }
}
