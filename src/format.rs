//! Date formatting
//!
//! [`DateFormat`] wraps a chrono strftime pattern and renders it without ever
//! panicking: specifiers chrono does not recognize are copied to the output
//! as literal text.

use crate::constants::{DATE_FORMAT, DEFAULT_FORMAT};
use crate::error::{CalendarError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Write};

/// Longest strftime specifier chrono accepts, e.g. `%:::z`, counted in chars.
const MAX_SPECIFIER_LEN: usize = 5;

/// A strftime pattern used to render points in time.
///
/// Defaults to `%Y-%m-%d %H:%M:%S`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateFormat(String);

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_FORMAT.to_string())
    }
}

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// `%Y-%m-%d`
    pub fn date_only() -> Self {
        Self(DATE_FORMAT.to_string())
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Whether chrono recognizes every specifier in the pattern.
    pub fn is_valid(&self) -> bool {
        is_recognized(&self.0)
    }

    /// Checks that every specifier in the pattern is recognized.
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidFormat`] naming the pattern otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CalendarError::InvalidFormat(self.0.clone()))
        }
    }

    /// Renders `t` with this pattern.
    pub fn render<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        if self.is_valid() {
            let mut out = String::new();
            if write!(out, "{}", t.format(&self.0)).is_ok() {
                return out;
            }
        }
        trace!("Rendering '{}' with literal fallback", self.0);
        render_lenient(&self.0, t)
    }
}

impl Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DateFormat {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        Self(pattern)
    }
}

fn is_recognized(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

/// The shortest recognized specifier at the start of `s`, which begins with `%`.
fn leading_specifier(s: &str) -> Option<&str> {
    s.char_indices()
        .skip(1)
        .take(MAX_SPECIFIER_LEN)
        .map(|(idx, c)| &s[..idx + c.len_utf8()])
        .find(|candidate| is_recognized(candidate))
}

/// Renders one specifier at a time, copying unknown ones verbatim.
fn render_lenient<Tz: TimeZone>(pattern: &str, t: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let mut out = String::new();
    let mut rest = pattern;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match leading_specifier(rest) {
            Some(spec) => {
                let mut piece = String::new();
                if write!(piece, "{}", t.format(spec)).is_ok() {
                    out.push_str(&piece);
                } else {
                    out.push_str(spec);
                }
                rest = &rest[spec.len()..];
            }
            None => {
                out.push('%');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_leading_specifier() {
        assert_eq!(leading_specifier("%Y-%m"), Some("%Y"));
        assert_eq!(leading_specifier("%-d."), Some("%-d"));
        assert_eq!(leading_specifier("%.3f"), Some("%.3f"));
        assert_eq!(leading_specifier("%%"), Some("%%"));
        assert_eq!(leading_specifier("%"), None);
        assert_eq!(leading_specifier("%Q"), None);
    }

    #[test]
    fn test_lenient_keeps_unknown_specifier() {
        let t = Utc.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap();
        assert_eq!(render_lenient("%Y %Q %d", &t), "2023 %Q 05");
        assert_eq!(render_lenient("100%", &t), "100%");
    }
}
