//! Calendar dates and date ranges of bookings.

use std::fmt;

use thiserror::Error;
use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    Date, OffsetDateTime,
};

const ISO_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
#[error("Invalid calendar date: {0}")]
pub struct DateParseError(String);

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// A full RFC 3339 date-time is accepted as well, only
/// its date part is used.
pub fn parse_iso_date(s: &str) -> Result<Date, DateParseError> {
    let s = s.trim();
    Date::parse(s, ISO_DATE_FORMAT)
        .or_else(|_| OffsetDateTime::parse(s, &Rfc3339).map(OffsetDateTime::date))
        .map_err(|_| DateParseError(s.to_owned()))
}

pub fn format_iso_date(date: Date) -> String {
    // Formatting a valid date with a static description cannot fail
    date.format(ISO_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("The end date must be after the start date")]
pub struct EmptyDateRange;

/// A range of calendar days with `start < end`.
///
/// The day of departure (`end`) is free for a
/// new arrival, i.e. adjacent ranges may share
/// a boundary date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    pub fn try_new(start: Date, end: Date) -> Result<Self, EmptyDateRange> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(EmptyDateRange)
        }
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    /// Number of nights
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).whole_days()
    }

    /// Open interval test: boundary dates are not contained.
    pub fn contains_strictly(&self, date: Date) -> bool {
        self.start < date && date < self.end
    }

    /// Closed interval test: boundary dates are contained.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// The other range lies completely within this range.
    pub fn covers(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Both closed intervals have at least one date in common.
    pub fn touches(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            format_iso_date(self.start),
            format_iso_date(self.end)
        )
    }
}
