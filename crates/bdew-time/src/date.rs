//! `Date` type.
//!
//! Dates are stored as a serial number of days. Serial 1 is
//! January 1, 1900 (a Monday); the supported range is 1900-01-01 to
//! 2199-12-31. Every constructor and every arithmetic method that could leave
//! that range returns a [`Result`].
//!
//! Dates have no time-of-day component. Converting from a
//! [`chrono::NaiveDateTime`] drops the time, which is what holiday membership
//! needs: only the calendar date matters.

use std::str::FromStr;

use bdew_core::errors::{Error, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::weekday::Weekday;

/// A calendar date (proleptic Gregorian) represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

const MIN_YEAR: u16 = 1900;
const MAX_YEAR: u16 = 2199;

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (1 = 1900-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from components already known to be valid.
    pub(crate) const fn from_ymd_unchecked(year: u16, month: u8, day: u8) -> Self {
        Date(serial_from_ymd(year, month, day))
    }

    /// January 1 of `year`.
    pub fn first_of_year(year: u16) -> Result<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// December 31 of `year`.
    pub fn last_of_year(year: u16) -> Result<Self> {
        Self::from_ymd(year, 12, 31)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = MONTH_OFFSET[m as usize - 1] + d as u16;
        if m > 2 && is_leap_year(y) {
            doy += 1;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 (1900-01-01) is a Monday
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move by `n` calendar days (negative moves backwards).
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {self} + {n} days overflows"))
        })?;
        Self::from_serial(serial)
            .map_err(|_| Error::Date(format!("date arithmetic: {self} + {n} days out of range")))
    }

    /// The following calendar day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// The preceding calendar day.
    pub fn pred(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// The first day of the month containing this date.
    pub fn first_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, 1))
    }

    /// The first day of the month following the one containing this date.
    pub fn first_of_next_month(self) -> Result<Self> {
        let (y, m, _) = ymd_from_serial(self.0);
        if m == 12 {
            Self::from_ymd(y + 1, 1, 1)
        } else {
            Self::from_ymd(y, m + 1, 1)
        }
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Every date from `self` up to and including `end`; empty if
    /// `end < self`.
    pub fn iter_through(self, end: Date) -> impl Iterator<Item = Date> {
        (self.0..=end.0).map(Date)
    }

    /// Number of calendar days from `self` to `other` (positive if
    /// `other > self`).
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: NaiveDate) -> Result<Self> {
        let year = u16::try_from(value.year())
            .map_err(|_| Error::Date(format!("year {} out of range", value.year())))?;
        Date::from_ymd(year, value.month() as u8, value.day() as u8)
    }
}

impl TryFrom<NaiveDateTime> for Date {
    type Error = Error;

    /// The time of day is discarded.
    fn try_from(value: NaiveDateTime) -> Result<Self> {
        Date::try_from(value.date())
    }
}

impl From<Date> for NaiveDate {
    fn from(value: Date) -> Self {
        let (y, m, d) = ymd_from_serial(value.0);
        NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
            .expect("every Date in range is a valid NaiveDate")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let naive = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| Error::Date(format!("cannot parse '{s}' as YYYY-MM-DD: {e}")))?;
        Date::try_from(naive)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!(),
    }
}

/// Serial 1 = 1900-01-01.
const fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let mut serial = (y - 1900) * 365;
    // leap days in [1900, year); 1900 itself is not a leap year
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
