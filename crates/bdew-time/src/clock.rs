//! Source of "today" in German local time.

use bdew_core::errors::Result;
use chrono::Utc;

use crate::date::Date;
use crate::time_zone::GERMAN_TIME_ZONE;

/// Tells the current German civil date.
pub trait Clock {
    /// Today's date in German local time.
    fn today(&self) -> Result<Date>;
}

/// The system clock, projected into German local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<Date> {
        Date::try_from(Utc::now().with_timezone(&GERMAN_TIME_ZONE).date_naive())
    }
}

/// A clock that is stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Result<Date> {
        Ok(self.0)
    }
}
