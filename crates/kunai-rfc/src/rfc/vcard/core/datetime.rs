//! vCard date-and-or-time values for BDAY and ANNIVERSARY (RFC 6350 §4.3.4).
//!
//! Values are kept as the strings found on the wire. Calendar interpretation
//! through `chrono` is available on demand and never affects round-tripping.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

/// A BDAY or ANNIVERSARY value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTime {
    /// Free-form text (`VALUE=text`, or a token that is not recognisably a date).
    Text(String),
    /// Date and/or time components, split at the first `T`.
    Structured {
        date: String,
        time: String,
        utc: bool,
    },
}

impl DateTime {
    /// Creates a text-form value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a date-only value.
    #[must_use]
    pub fn date(date: impl Into<String>) -> Self {
        Self::date_time(date, "")
    }

    /// Creates a structured value from date and time parts (either may be empty).
    #[must_use]
    pub fn date_time(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self::Structured {
            date: date.into(),
            time: time.into(),
            utc: false,
        }
    }

    /// Returns whether this is a text-form value.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the text, or `""` for structured values.
    #[must_use]
    pub fn text_value(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Structured { .. } => "",
        }
    }

    /// Returns the date part, or `""` when absent.
    #[must_use]
    pub fn date_part(&self) -> &str {
        match self {
            Self::Structured { date, .. } => date,
            Self::Text(_) => "",
        }
    }

    /// Returns the time part, or `""` when absent.
    #[must_use]
    pub fn time_part(&self) -> &str {
        match self {
            Self::Structured { time, .. } => time,
            Self::Text(_) => "",
        }
    }

    /// Returns whether the value is flagged as UTC.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self, Self::Structured { utc: true, .. })
    }

    /// Interprets the date part as a calendar date.
    ///
    /// Accepts `YYYYMMDD` and `YYYY-MM-DD`; truncated forms such as `--0415`
    /// have no calendar date and yield `None`.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let date = self.date_part();
        if date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit()) {
            let year = date.get(0..4)?.parse().ok()?;
            let month = date.get(4..6)?.parse().ok()?;
            let day = date.get(6..8)?.parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, day);
        }
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }

    /// Interprets the time part as a wall-clock time.
    ///
    /// Accepts `HHMMSS`, `HHMM`, and `HH:MM:SS`, each optionally followed by
    /// `Z`.
    #[must_use]
    pub fn calendar_time(&self) -> Option<NaiveTime> {
        let time = self.time_part();
        let time = time.strip_suffix('Z').unwrap_or(time);
        if time.bytes().all(|b| b.is_ascii_digit()) {
            let hour = time.get(0..2)?.parse().ok()?;
            let minute = time.get(2..4)?.parse().ok()?;
            let second = match time.len() {
                4 => 0,
                6 => time.get(4..6)?.parse().ok()?,
                _ => return None,
            };
            return NaiveTime::from_hms_opt(hour, minute, second);
        }
        NaiveTime::parse_from_str(time, "%H:%M:%S").ok()
    }

    /// Returns whether the time is UTC, either by flag or by a trailing `Z`.
    #[must_use]
    pub fn is_utc_time(&self) -> bool {
        self.is_utc() || self.time_part().ends_with('Z')
    }
}

/// Renders the wire form: the text, `date`, `dateTtime`, or `Ttime`.
///
/// A UTC flag adds a trailing `Z` unless the time already carries one.
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Structured { date, time, utc } => {
                f.write_str(date)?;
                if !time.is_empty() || date.is_empty() {
                    write!(f, "T{time}")?;
                }
                if *utc && !time.ends_with('Z') {
                    f.write_str("Z")?;
                }
                Ok(())
            }
        }
    }
}
