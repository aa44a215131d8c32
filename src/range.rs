//! Date ranges
//!
//! Enumerates calendar days between two points in time, inclusive of both
//! ends. Each step advances the civil date by one day and keeps the
//! time-of-day of `start`.

use crate::civil::{self, Edge};
use chrono::{DateTime, Days, TimeZone};
use std::iter::FusedIterator;

/// Lazy, inclusive sequence of days from `start` to `end`.
///
/// Cloning the range before iterating gives an independent copy that starts
/// over from `start`.
#[derive(Debug, Clone)]
pub struct DateRange<Tz: TimeZone> {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    index: u64,
    finished: bool,
}

impl<Tz: TimeZone> DateRange<Tz> {
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self {
            start,
            end,
            index: 0,
            finished: false,
        }
    }

    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    pub fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    /// Whether the range yields nothing, i.e. `start` is after `end`.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    fn nth_day(&self, index: u64) -> Option<DateTime<Tz>> {
        if index == 0 {
            return Some(self.start.clone());
        }
        let date = self.start.date_naive().checked_add_days(Days::new(index))?;
        let naive = date.and_time(self.start.time());
        Some(civil::resolve_local(&self.start.timezone(), naive, Edge::Start))
    }
}

impl<Tz: TimeZone> Iterator for DateRange<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.nth_day(self.index) {
            Some(current) if current <= self.end => {
                self.index += 1;
                Some(current)
            }
            _ => {
                self.finished = true;
                None
            }
        }
    }
}

impl<Tz: TimeZone> FusedIterator for DateRange<Tz> {}

/// Every day from `start` to `end`, inclusive; empty if `start > end`.
pub fn dates_in_range<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Vec<DateTime<Tz>> {
    DateRange::new(start.clone(), end.clone()).collect()
}
