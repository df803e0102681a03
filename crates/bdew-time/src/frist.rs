//! Statutory period arithmetic ("Fristenberechnung") as described in the
//! GPKE / GeLi Gas process documents.
//!
//! All calculations are done by a [`FristEngine`] that owns the calendar it
//! counts working days with.

use std::str::FromStr;

use bdew_core::errors::{Error, Result};
use tracing::trace;

use crate::calendar::Calendar;
use crate::calendars::bdew::BdewCalendar;
use crate::clock::Clock;
use crate::date::Date;
use crate::period::{DayType, EndDateType, Period};

/// The month a "n-th working day" is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthType {
    /// The delivery month itself ("n-ter Werktag des Liefermonats").
    #[default]
    Liefermonat,
    /// The month before the delivery month ("n-ter Werktag des
    /// Fristenmonats"). Counted via the Liefermonat of the following month.
    Fristenmonat,
}

impl FromStr for MonthType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("liefermonat") {
            Ok(MonthType::Liefermonat)
        } else if s.eq_ignore_ascii_case("fristenmonat") {
            Ok(MonthType::Fristenmonat)
        } else {
            Err(Error::UnhandledMonthType(s.to_owned()))
        }
    }
}

impl std::fmt::Display for MonthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthType::Liefermonat => write!(f, "Liefermonat"),
            MonthType::Fristenmonat => write!(f, "Fristenmonat"),
        }
    }
}

/// Period calculator bound to a working-day calendar.
///
/// # Example
/// ```
/// use bdew_time::{BdewCalendar, Date, DayType, EndDateType, FristEngine, Period};
///
/// let calendar = BdewCalendar::builder().years(2016..=2016).build().unwrap();
/// let engine = FristEngine::new(calendar);
/// let abmeldung = Date::from_ymd(2016, 7, 4).unwrap();
/// let period = Period::new(6, DayType::WorkingDay, EndDateType::Inclusive);
/// assert_eq!(
///     engine.add_frist(abmeldung, period).unwrap(),
///     Date::from_ymd(2016, 7, 12).unwrap()
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FristEngine<C: Calendar = BdewCalendar> {
    calendar: C,
}

impl<C: Calendar> FristEngine<C> {
    /// Create an engine counting working days with `calendar`.
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    /// The calendar used for counting.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Return `true` if `date` counts for period calculations.
    pub fn is_working_day(&self, date: Date) -> bool {
        self.calendar.is_working_day(date)
    }

    /// The first working day strictly after `date`.
    pub fn next_working_day(&self, date: Date) -> Result<Date> {
        self.calendar.next_working_day(date)
    }

    /// The last working day strictly before `date`.
    pub fn previous_working_day(&self, date: Date) -> Result<Date> {
        self.calendar.previous_working_day(date)
    }

    /// The date that is `period` after `start`.
    ///
    /// A non-negative period is counted from the next working day after
    /// `start`, even for zero days. Calendar-day periods are then plain day
    /// offsets. Working-day periods step one day at a time and only count
    /// working days.
    ///
    /// A negative working-day period of `n` days counts `|n| + 1` working days
    /// backwards from `start`, so `-7WT` reverts `7WT` for the GPKE examples.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the result leaves the supported date range.
    pub fn add_frist(&self, start: Date, period: Period) -> Result<Date> {
        let n = period.number_of_days();
        let anchor = if n >= 0 {
            self.calendar.next_working_day(start)?
        } else {
            start
        };

        let result = match period.day_type() {
            DayType::CalendarDay => anchor.add_days(n)?,
            DayType::WorkingDay if n == 0 => anchor,
            DayType::WorkingDay if n > 0 => {
                let mut result = anchor;
                let mut counted = 0;
                while counted < n {
                    result = result.succ()?;
                    if self.calendar.is_working_day(result) {
                        counted += 1;
                    }
                }
                result
            }
            DayType::WorkingDay => {
                let mut result = anchor;
                let mut counted = 0u32;
                while counted <= n.unsigned_abs() {
                    result = result.pred()?;
                    if self.calendar.is_working_day(result) {
                        counted += 1;
                    }
                }
                result
            }
        };

        trace!(%start, %period, %anchor, %result, "add_frist");
        Ok(result)
    }

    /// The `n`-th working day of the month of `reference`.
    ///
    /// Only year and month of `reference` are used. With
    /// [`MonthType::Fristenmonat`] the reference names the Fristenmonat and the
    /// working day is counted in the Liefermonat that follows it.
    ///
    /// ```
    /// use bdew_time::{BdewCalendar, Date, FristEngine, MonthType};
    ///
    /// let engine = FristEngine::new(BdewCalendar::builder().years(2023..=2023).build().unwrap());
    /// let january = Date::from_ymd(2023, 1, 1).unwrap();
    /// assert_eq!(
    ///     engine.nth_working_day_of_month(14, MonthType::Liefermonat, january).unwrap(),
    ///     Date::from_ymd(2023, 1, 20).unwrap()
    /// );
    /// ```
    pub fn nth_working_day_of_month(
        &self,
        n: i32,
        month_type: MonthType,
        reference: Date,
    ) -> Result<Date> {
        let first = reference.first_of_month();
        match month_type {
            MonthType::Liefermonat => {
                let start = self.calendar.previous_working_day(first)?;
                let period = Period::new(n, DayType::WorkingDay, EndDateType::Inclusive);
                let result = self.add_frist(start, period)?;
                trace!(n, %month_type, %first, %result, "nth working day of month");
                Ok(result)
            }
            MonthType::Fristenmonat => {
                self.nth_working_day_of_month(n, MonthType::Liefermonat, first.first_of_next_month()?)
            }
        }
    }

    /// The `n`-th working day of the current German month, as told by `clock`.
    pub fn nth_working_day_of_current_month(
        &self,
        n: i32,
        month_type: MonthType,
        clock: &dyn Clock,
    ) -> Result<Date> {
        self.nth_working_day_of_month(n, month_type, clock.today()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekendsOnly;
    use crate::clock::FixedClock;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn bdew() -> FristEngine {
        FristEngine::new(BdewCalendar::builder().years(2022..=2023).build().unwrap())
    }

    #[test]
    fn month_type_from_str() {
        assert_eq!("Liefermonat".parse::<MonthType>().unwrap(), MonthType::Liefermonat);
        assert_eq!("FRISTENMONAT".parse::<MonthType>().unwrap(), MonthType::Fristenmonat);
        assert_eq!(
            "Abrechnungsmonat".parse::<MonthType>(),
            Err(Error::UnhandledMonthType("Abrechnungsmonat".into()))
        );
    }

    #[test]
    fn zero_days_is_the_next_working_day() {
        let engine = bdew();
        let zero_kt = Period::exclusive(0, DayType::CalendarDay);
        let zero_wt = Period::exclusive(0, DayType::WorkingDay);
        assert_eq!(engine.add_frist(date(2023, 1, 1), zero_kt).unwrap(), date(2023, 1, 2));
        assert_eq!(engine.add_frist(date(2023, 1, 2), zero_kt).unwrap(), date(2023, 1, 3));
        assert_eq!(engine.add_frist(date(2023, 1, 1), zero_wt).unwrap(), date(2023, 1, 2));
    }

    #[test]
    fn calendar_days() {
        let engine = bdew();
        let plus_one = Period::exclusive(1, DayType::CalendarDay);
        let minus_one = Period::exclusive(-1, DayType::CalendarDay);
        assert_eq!(engine.add_frist(date(2023, 1, 1), plus_one).unwrap(), date(2023, 1, 3));
        assert_eq!(engine.add_frist(date(2023, 1, 2), plus_one).unwrap(), date(2023, 1, 4));
        // negative periods are not anchored
        assert_eq!(engine.add_frist(date(2023, 1, 3), minus_one).unwrap(), date(2023, 1, 2));
    }

    #[test]
    fn working_days_skip_weekends_only_calendar() {
        let engine = FristEngine::new(WeekendsOnly);
        // Friday + 1WT: anchor Monday, then Tuesday
        let result = engine
            .add_frist(date(2023, 3, 3), Period::exclusive(1, DayType::WorkingDay))
            .unwrap();
        assert_eq!(result, date(2023, 3, 7));
        // Friday - 1WT counts two working days backwards
        let result = engine
            .add_frist(date(2023, 3, 3), Period::exclusive(-1, DayType::WorkingDay))
            .unwrap();
        assert_eq!(result, date(2023, 3, 1));
    }

    #[test]
    fn fristenmonat_is_the_following_month() {
        let engine = bdew();
        assert_eq!(
            engine
                .nth_working_day_of_month(21, MonthType::Fristenmonat, date(2023, 1, 17))
                .unwrap(),
            date(2023, 3, 1)
        );
        assert_eq!(
            engine
                .nth_working_day_of_month(1, MonthType::Liefermonat, date(2023, 1, 31))
                .unwrap(),
            date(2023, 1, 2)
        );
    }

    #[test]
    fn current_month_uses_the_clock() {
        let engine = bdew();
        let clock = FixedClock(date(2023, 11, 15));
        assert_eq!(
            engine
                .nth_working_day_of_current_month(18, MonthType::Liefermonat, &clock)
                .unwrap(),
            date(2023, 11, 28)
        );
    }

    #[test]
    fn leaving_the_date_range_fails() {
        let engine = FristEngine::new(WeekendsOnly);
        let far = Period::exclusive(i32::MAX / 2, DayType::CalendarDay);
        assert!(matches!(engine.add_frist(date(2199, 12, 1), far), Err(Error::Date(_))));
        let back = Period::exclusive(-10, DayType::WorkingDay);
        assert!(matches!(engine.add_frist(Date::MIN, back), Err(Error::Date(_))));
    }
}
