//! # bdew-time
//!
//! Dates, the BDEW holiday calendar, working-day and Frist arithmetic, and the
//! Stromtag / Gastag boundaries of the German energy market.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and holiday-free calendars.
pub mod calendar;

/// Concrete calendars and holiday sources.
pub mod calendars;

/// Source of the current German date.
pub mod clock;

/// `Date` type.
pub mod date;

/// Period arithmetic and the n-th working day of a month.
pub mod frist;

/// `HolidaySet` — dates with labels.
pub mod holiday_set;

/// `HolidaySource` trait and jurisdictions.
pub mod holiday_source;

/// `Period` — a number of working or calendar days.
pub mod period;

/// German local time and day boundaries per division.
pub mod time_zone;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use calendars::bdew::{BdewCalendar, BdewCalendarBuilder, BdewDefinedHolidays, BDEW_SUBDIVISIONS};
pub use calendars::germany::{easter_sunday, GermanHolidays};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::Date;
pub use frist::{FristEngine, MonthType};
pub use holiday_set::HolidaySet;
pub use holiday_source::{HolidaySource, Jurisdiction, Subdivision};
pub use period::{DayType, EndDateType, Period};
pub use time_zone::{
    german_local_time, has_no_utc_offset, is_division_boundary, is_gastag_limit,
    is_stromtag_limit, Division, GERMAN_TIME_ZONE,
};
pub use weekday::Weekday;
