use chrono::{Duration, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Europe::Paris;
use moment::{dates_in_range, DateRange};

fn day(d: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, d, 0, 0, 0).unwrap()
}

#[test]
fn test_inclusive_range() {
    let dates = dates_in_range(&day(1), &day(3));
    assert_eq!(dates, vec![day(1), day(2), day(3)]);
}

#[test]
fn test_single_day_range() {
    assert_eq!(dates_in_range(&day(5), &day(5)), vec![day(5)]);
}

#[test]
fn test_reversed_range_is_empty() {
    assert!(dates_in_range(&day(3), &day(1)).is_empty());
    assert!(DateRange::new(day(3), day(1)).is_empty());
}

#[test]
fn test_range_keeps_time_of_day() {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 18, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2023, 1, 3, 12, 0, 0).unwrap();
    let dates = dates_in_range(&start, &end);

    // Jan 3 18:00 is past the end
    assert_eq!(dates.len(), 2);
    assert!(dates.iter().all(|d| d.hour() == 18));
}

#[test]
fn test_range_crosses_month_and_leap_day() {
    let start = Utc.with_ymd_and_hms(2024, 2, 27, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
    let dates: Vec<NaiveDate> = DateRange::new(start, end).map(|d| d.date_naive()).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        ]
    );
}

#[test]
fn test_range_is_restartable() {
    let range = DateRange::new(day(1), day(4));
    let first: Vec<_> = range.clone().collect();
    let second: Vec<_> = range.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn test_range_is_fused() {
    let mut range = DateRange::new(day(1), day(1));
    assert_eq!(range.next(), Some(day(1)));
    assert_eq!(range.next(), None);
    assert_eq!(range.next(), None);
}

#[test]
fn test_range_steps_calendar_days_across_dst() {
    // Paris moves to summer time on 2024-03-31; each element stays at 09:00
    let start = Paris.with_ymd_and_hms(2024, 3, 30, 9, 0, 0).unwrap();
    let end = Paris.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();
    let dates = dates_in_range(&start, &end);

    assert_eq!(dates.len(), 3);
    assert!(dates.iter().all(|d| d.hour() == 9));
    assert_eq!(dates[1] - dates[0], Duration::hours(23));
}
