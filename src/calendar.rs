//! Calendar bound to a clock and a time zone
//!
//! [`Calendar`] answers the "relative to now" questions: the start of today,
//! the end of this week, how long ago something happened. It reads the
//! current instant from an injected [`Clock`] and interprets it in its zone,
//! so the same code runs against the system clock in production and a
//! [`FixedClock`](crate::clock::FixedClock) in tests.
//!
//! Every `*_str` method accepts an optional [`DateFormat`]; `None` falls back
//! to the calendar's own format, which is `%Y-%m-%d %H:%M:%S` unless changed
//! with [`Calendar::with_format`].

use crate::boundary;
use crate::clock::{Clock, SystemClock};
use crate::config::CalendarConfig;
use crate::error::Result;
use crate::format::DateFormat;
use crate::relative;
use crate::zone::{self, Zone};
use chrono::{DateTime, TimeZone};
use log::debug;
use std::fmt::Display;

/// Calendar arithmetic relative to the current instant.
#[derive(Debug, Clone)]
pub struct Calendar<Tz: TimeZone = Zone, C: Clock = SystemClock> {
    zone: Tz,
    clock: C,
    format: DateFormat,
}

impl Calendar<Zone, SystemClock> {
    /// System clock in the process time zone.
    pub fn new() -> Self {
        Self::with_zone(Zone::Local)
    }

    /// Builds a system-clock calendar from configuration.
    ///
    /// # Errors
    /// Fails if the configured time zone is unknown or the format contains
    /// unrecognized specifiers.
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        let zone: Zone = config.time_zone.parse()?;
        config.format.validate()?;
        debug!("Calendar configured for zone '{}' with format '{}'", zone, config.format);
        Ok(Self::with_zone(zone).with_format(config.format.clone()))
    }
}

impl Default for Calendar<Zone, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> Calendar<Tz, SystemClock> {
    /// System clock in `zone`.
    pub fn with_zone(zone: Tz) -> Self {
        Self {
            zone,
            clock: SystemClock,
            format: DateFormat::default(),
        }
    }
}

impl<Tz: TimeZone, C: Clock> Calendar<Tz, C> {
    /// Replaces the time source.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Calendar<Tz, C2> {
        Calendar {
            zone: self.zone,
            clock,
            format: self.format,
        }
    }

    /// Replaces the default format used by the `*_str` methods.
    pub fn with_format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }

    pub fn zone(&self) -> &Tz {
        &self.zone
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn default_format(&self) -> &DateFormat {
        &self.format
    }

    /// The current instant in this calendar's zone.
    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.zone)
    }

    /// The current instant shown in `zone`.
    pub fn current_time_in<Z: TimeZone>(&self, zone: &Z) -> DateTime<Z> {
        zone::convert_time_zone(&self.clock.now(), zone)
    }

    /// How long ago `t` was, e.g. `"5 minutes ago"`.
    pub fn time_ago<T: TimeZone>(&self, t: &DateTime<T>) -> String {
        relative::time_ago(t, &self.clock.now())
    }

    pub fn start_of_day(&self) -> DateTime<Tz> {
        boundary::start_of_day(&self.now())
    }

    pub fn end_of_day(&self) -> DateTime<Tz> {
        boundary::end_of_day(&self.now())
    }

    pub fn start_of_week(&self) -> DateTime<Tz> {
        boundary::start_of_week(&self.now())
    }

    pub fn end_of_week(&self) -> DateTime<Tz> {
        boundary::end_of_week(&self.now())
    }

    pub fn start_of_month(&self) -> DateTime<Tz> {
        boundary::start_of_month(&self.now())
    }

    pub fn end_of_month(&self) -> DateTime<Tz> {
        boundary::end_of_month(&self.now())
    }

    pub fn start_of_quarter(&self) -> DateTime<Tz> {
        boundary::start_of_quarter(&self.now())
    }

    pub fn end_of_quarter(&self) -> DateTime<Tz> {
        boundary::end_of_quarter(&self.now())
    }

    pub fn start_of_year(&self) -> DateTime<Tz> {
        boundary::start_of_year(&self.now())
    }

    pub fn end_of_year(&self) -> DateTime<Tz> {
        boundary::end_of_year(&self.now())
    }
}

impl<Tz: TimeZone, C: Clock> Calendar<Tz, C>
where
    Tz::Offset: Display,
{
    /// Renders `t` with `format`, or this calendar's format when `None`.
    pub fn format(&self, t: &DateTime<Tz>, format: Option<&DateFormat>) -> String {
        format.unwrap_or(&self.format).render(t)
    }

    pub fn start_of_day_str(&self, format: Option<&DateFormat>) -> String {
        self.format(&self.start_of_day(), format)
    }

    pub fn end_of_day_str(&self, format: Option<&DateFormat>) -> String {
        self.format(&self.end_of_day(), format)
    }

    pub fn start_of_week_str(&self, format: Option<&DateFormat>) -> String {
        self.format(&self.start_of_week(), format)
    }

    pub fn end_of_week_str(&self, format: Option<&DateFormat>) -> String {
        self.format(&self.end_of_week(), format)
    }

    pub fn start_of_month_str(&self, format: Option<&DateFormat>) -> String {
        self.format(&self.start_of_month(), format)
    }

    pub fn end_of_month_str(&self, format: Option<&DateFormat>) -> String {
        self.format(&self.end_of_month(), format)
    }

    pub fn start_of_quarter_str(&self, format: Option<&DateFormat>) -> String {
        self.format(&self.start_of_quarter(), format)
    }

    pub fn end_of_quarter_str(&self, format: Option<&DateFormat>) -> String {
        self.format(&self.end_of_quarter(), format)
    }

    pub fn start_of_year_str(&self, format: Option<&DateFormat>) -> String {
        self.format(&self.start_of_year(), format)
    }

    pub fn end_of_year_str(&self, format: Option<&DateFormat>) -> String {
        self.format(&self.end_of_year(), format)
    }
}
