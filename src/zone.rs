//! Time zones.
//!
//! [`Zone`] is either the process zone or an IANA zone from the bundled
//! database. It implements [`chrono::TimeZone`], so every boundary function in
//! this crate accepts it the same way it accepts `Utc`, `Local` or a
//! `FixedOffset`.

use crate::constants::LOCAL_ZONE_NAME;
use crate::error::CalendarError;
use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// A time zone used to interpret instants as civil date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The zone configured for the current process.
    #[default]
    Local,
    /// A zone from the IANA time zone database.
    Named(Tz),
}

/// The offset of a [`Zone`] at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneOffset {
    zone: Zone,
    fixed: FixedOffset,
}

impl ZoneOffset {
    /// The zone this offset belongs to.
    pub fn zone(&self) -> Zone {
        self.zone
    }
}

impl Offset for ZoneOffset {
    fn fix(&self) -> FixedOffset {
        self.fixed
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fixed, f)
    }
}

impl Zone {
    fn wrap(self, fixed: FixedOffset) -> ZoneOffset {
        ZoneOffset { zone: self, fixed }
    }

    /// The IANA name, or `"local"` for the process zone.
    pub fn name(&self) -> &'static str {
        match self {
            Zone::Local => LOCAL_ZONE_NAME,
            Zone::Named(tz) => tz.name(),
        }
    }
}

impl TimeZone for Zone {
    type Offset = ZoneOffset;

    fn from_offset(offset: &ZoneOffset) -> Self {
        offset.zone
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<ZoneOffset> {
        match self {
            Zone::Local => Local.offset_from_local_date(local).map(|o| self.wrap(o)),
            Zone::Named(tz) => tz.offset_from_local_date(local).map(|o| self.wrap(o.fix())),
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<ZoneOffset> {
        match self {
            Zone::Local => Local.offset_from_local_datetime(local).map(|o| self.wrap(o)),
            Zone::Named(tz) => tz.offset_from_local_datetime(local).map(|o| self.wrap(o.fix())),
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> ZoneOffset {
        match self {
            Zone::Local => self.wrap(Local.offset_from_utc_date(utc)),
            Zone::Named(tz) => self.wrap(tz.offset_from_utc_date(utc).fix()),
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> ZoneOffset {
        match self {
            Zone::Local => self.wrap(Local.offset_from_utc_datetime(utc)),
            Zone::Named(tz) => self.wrap(tz.offset_from_utc_datetime(utc).fix()),
        }
    }
}

impl FromStr for Zone {
    type Err = CalendarError;

    /// Parses `"local"` (any case) or an IANA name such as `"Europe/Paris"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case(LOCAL_ZONE_NAME) {
            return Ok(Zone::Local);
        }
        name.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| CalendarError::UnknownTimeZone(s.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Tz> for Zone {
    fn from(tz: Tz) -> Self {
        Zone::Named(tz)
    }
}

/// Shows the instant `t` in the civil calendar of `zone`.
///
/// The absolute instant is unchanged; only the displayed fields shift.
pub fn convert_time_zone<Src: TimeZone, Dst: TimeZone>(t: &DateTime<Src>, zone: &Dst) -> DateTime<Dst> {
    t.with_timezone(zone)
}
