//! # bdew-datetimes
//!
//! Working days, statutory periods ("Fristen") and day boundaries of the
//! German energy market, as defined by the BDEW for GPKE, GeLi Gas and MaBiS.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than on `bdew-core` or `bdew-time` directly.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bdew-datetimes = "0.1"
//! ```
//!
//! ```rust
//! use bdew_datetimes::prelude::*;
//!
//! let calendar = BdewCalendar::builder().years(2023..=2023).build()?;
//! let engine = FristEngine::new(calendar);
//!
//! // 14th working day of the delivery month January 2023
//! let january = Date::from_ymd(2023, 1, 1)?;
//! let deadline = engine.nth_working_day_of_month(14, MonthType::Liefermonat, january)?;
//! assert_eq!(deadline, Date::from_ymd(2023, 1, 20)?);
//!
//! // Silvester is never a working day
//! assert!(!engine.is_working_day(Date::from_ymd(2023, 12, 31)?));
//!
//! // The Stromtag starts at midnight German local time
//! let instant = chrono::DateTime::parse_from_rfc3339("2022-12-31T23:00:00Z").unwrap();
//! assert!(is_division_boundary(&instant, Division::Strom));
//! # Ok::<(), bdew_datetimes::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and result alias.
pub use bdew_core as core;

/// Dates, calendars, Frist arithmetic and day boundaries.
pub use bdew_time as time;

/// The `chrono` version used in the public API.
pub use chrono;

pub use bdew_core::{Error, Result};
pub use bdew_time::{
    german_local_time, has_no_utc_offset, is_division_boundary, is_gastag_limit,
    is_stromtag_limit, BdewCalendar, BdewCalendarBuilder, Calendar, Clock, Date, DayType,
    Division, EndDateType, FixedClock, FristEngine, GermanHolidays, HolidaySet, HolidaySource,
    Jurisdiction, MonthType, Period, Subdivision, SystemClock, GERMAN_TIME_ZONE,
};

/// Everything needed for day-to-day period calculations.
pub mod prelude {
    pub use bdew_core::{Error, Result};
    pub use bdew_time::{
        is_division_boundary, BdewCalendar, Calendar, Date, DayType, Division, EndDateType,
        FristEngine, MonthType, Period,
    };
}
