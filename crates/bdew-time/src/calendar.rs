//! `Calendar` trait — the working-day oracle.
//!
//! A calendar knows which dates are holidays. A date is a working day iff it
//! is neither a holiday nor a weekend day; everything the Frist engine does is
//! built on [`Calendar::is_working_day`].

use std::sync::Arc;

use bdew_core::errors::Result;

use crate::date::Date;

/// A holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"BDEW"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a holiday in this calendar.
    ///
    /// Weekends are not holidays unless the calendar lists them explicitly.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is neither a holiday nor a weekend day.
    fn is_working_day(&self, date: Date) -> bool {
        !self.is_holiday(date) && !self.is_weekend(date)
    }

    /// The first working day strictly after `date`.
    ///
    /// `date` itself is never returned, even if it is a working day.
    fn next_working_day(&self, date: Date) -> Result<Date> {
        let mut result = date.succ()?;
        while !self.is_working_day(result) {
            result = result.succ()?;
        }
        Ok(result)
    }

    /// The last working day strictly before `date`.
    ///
    /// `date` itself is never returned, even if it is a working day.
    fn previous_working_day(&self, date: Date) -> Result<Date> {
        let mut result = date.pred()?;
        while !self.is_working_day(result) {
            result = result.pred()?;
        }
        Ok(result)
    }

    /// All working days of `year`, in ascending order.
    fn working_days(&self, year: u16) -> Result<Vec<Date>> {
        let first = Date::first_of_year(year)?;
        let last = Date::last_of_year(year)?;
        Ok(first
            .iter_through(last)
            .filter(|d| self.is_working_day(*d))
            .collect())
    }

    /// All non-working days of `year`, in ascending order.
    ///
    /// With `include_weekends == false` only the holidays that fall on
    /// Monday–Friday are returned.
    fn non_working_days(&self, year: u16, include_weekends: bool) -> Result<Vec<Date>> {
        let first = Date::first_of_year(year)?;
        let last = Date::last_of_year(year)?;
        Ok(first
            .iter_through(last)
            .filter(|d| !self.is_working_day(*d))
            .filter(|d| include_weekends || !self.is_weekend(*d))
            .collect())
    }
}

impl<C: Calendar + ?Sized> Calendar for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_holiday(&self, date: Date) -> bool {
        (**self).is_holiday(date)
    }

    fn is_weekend(&self, date: Date) -> bool {
        (**self).is_weekend(date)
    }
}

impl<C: Calendar + ?Sized> Calendar for Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_holiday(&self, date: Date) -> bool {
        (**self).is_holiday(date)
    }

    fn is_weekend(&self, date: Date) -> bool {
        (**self).is_weekend(date)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-working days,
/// with no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}
