//! BDEW calendar: the union of every holiday relevant for GPKE / GeLi Gas
//! period calculations.
//!
//! "Nach GPKE und GeLi Gas sind alle jene Tage Werktage, die weder
//! Sonnabend, Sonntag oder gesetzlicher Feiertag sind. Generell gelten der
//! 24.12. und der 31.12. als Feiertage."
//!
//! A date is a BDEW holiday if it is a holiday in *any* German federal state.
//! On top of that, December 24 and December 31 count as holidays although
//! they are not statutory ones.

use std::ops::RangeInclusive;

use bdew_core::ensure;
use bdew_core::errors::{Error, Result};
use tracing::{debug, warn};

use super::germany::{GermanHolidays, FIRST_YEAR};
use crate::calendar::Calendar;
use crate::date::Date;
use crate::holiday_set::HolidaySet;
use crate::holiday_source::{HolidaySource, Jurisdiction, Subdivision};

/// The subdivisions whose holidays are BDEW relevant.
///
/// Maintained explicitly: a subdivision the holiday source adds later (e.g.
/// [`Subdivision::Augsburg`]) does not become BDEW relevant by accident.
pub const BDEW_SUBDIVISIONS: [Subdivision; 16] = [
    Subdivision::Bb,
    Subdivision::Be,
    Subdivision::Bw,
    Subdivision::By,
    Subdivision::Hb,
    Subdivision::He,
    Subdivision::Hh,
    Subdivision::Mv,
    Subdivision::Ni,
    Subdivision::Nw,
    Subdivision::Rp,
    Subdivision::Sh,
    Subdivision::Sl,
    Subdivision::Sn,
    Subdivision::St,
    Subdivision::Th,
];

/// Postponed introduction of the 24h supplier switch.
const SONDERFEIERTAG_2025: (Date, &str) = (Date::from_ymd_unchecked(2025, 6, 6), "Sonderfeiertag");

/// Holidays defined by the BDEW itself, excluding statutory ones.
///
/// Every year contains Heiligabend (Dec 24) and Silvester (Dec 31). One-off
/// exceptions are exactly dated and only apply to their own year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BdewDefinedHolidays {
    exceptions: Vec<(Date, String)>,
}

impl Default for BdewDefinedHolidays {
    fn default() -> Self {
        Self::new()
    }
}

impl BdewDefinedHolidays {
    /// The BDEW-defined holidays including all published exceptions.
    pub fn new() -> Self {
        let (date, label) = SONDERFEIERTAG_2025;
        Self {
            exceptions: vec![(date, label.to_owned())],
        }
    }

    /// Add a one-off holiday on exactly `date`.
    pub fn with_exception(mut self, date: Date, label: impl Into<String>) -> Self {
        self.exceptions.push((date, label.into()));
        self
    }

    /// Label of the BDEW-defined holiday on `date`, if any.
    ///
    /// Needs no loaded data: the rule holds for every year.
    pub fn label(&self, date: Date) -> Option<&str> {
        match (date.month(), date.day_of_month()) {
            (12, 24) => Some("Heiligabend"),
            (12, 31) => Some("Silvester"),
            _ => self
                .exceptions
                .iter()
                .find(|(exception, _)| *exception == date)
                .map(|(_, label)| label.as_str()),
        }
    }

    /// Return `true` if `date` is a BDEW-defined holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.label(date).is_some()
    }

    /// The BDEW-defined holidays of `year`.
    pub fn for_year(&self, year: u16) -> Result<HolidaySet> {
        let recurring = HolidaySet::new()
            .with(Date::from_ymd(year, 12, 24)?, "Heiligabend")
            .with(Date::from_ymd(year, 12, 31)?, "Silvester");
        Ok(self
            .exceptions
            .iter()
            .filter(|(date, _)| date.year() == year)
            .fold(recurring, |set, (date, label)| set.with(*date, label.as_str())))
    }
}

/// The BDEW holiday calendar.
///
/// Built once from a [`HolidaySource`] and immutable afterwards. Share it
/// between threads through an `Arc`.
///
/// Statutory holidays are only known for the configured years. The
/// BDEW-defined dates (Dec 24, Dec 31 and the one-off exceptions) hold for
/// every year.
///
/// # Example
/// ```
/// use bdew_time::{BdewCalendar, Calendar, Date};
///
/// let calendar = BdewCalendar::builder().years(2023..=2023).build().unwrap();
/// let heiligabend = Date::from_ymd(2023, 12, 24).unwrap();
/// assert!(calendar.is_holiday(heiligabend));
/// assert_eq!(calendar.holiday_name(heiligabend), Some("Heiligabend"));
/// ```
#[derive(Debug, Clone)]
pub struct BdewCalendar {
    holidays: HolidaySet,
    defined: BdewDefinedHolidays,
    years: RangeInclusive<u16>,
}

impl BdewCalendar {
    /// Build the calendar with the default configuration (every year from
    /// 1990 to 2199, statutory German holidays).
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start configuring a calendar.
    pub fn builder() -> BdewCalendarBuilder {
        BdewCalendarBuilder::default()
    }

    /// Label of the holiday on `date`, if any.
    pub fn holiday_name(&self, date: Date) -> Option<&str> {
        self.defined.label(date).or_else(|| self.holidays.label(date))
    }

    /// Every holiday of the covered years, in ascending date order.
    pub fn holidays(&self) -> impl Iterator<Item = (Date, &str)> + '_ {
        self.holidays.iter()
    }

    /// The years the calendar was built for.
    pub fn years(&self) -> RangeInclusive<u16> {
        self.years.clone()
    }

    /// Return `true` if statutory holidays of `year` were loaded.
    ///
    /// Outside the covered years only the BDEW-defined dates are holidays.
    pub fn covers(&self, year: u16) -> bool {
        self.years.contains(&year)
    }
}

impl Calendar for BdewCalendar {
    fn name(&self) -> &str {
        "BDEW"
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.defined.contains(date) || self.holidays.contains(date)
    }
}

/// Configuration for a [`BdewCalendar`].
///
/// The list of subdivisions and the recurring BDEW dates are fixed; only the
/// year range, the holiday source, and additional one-off exceptions can be
/// configured.
#[derive(Debug)]
pub struct BdewCalendarBuilder {
    years: RangeInclusive<u16>,
    source: Box<dyn HolidaySource>,
    defined: BdewDefinedHolidays,
}

impl Default for BdewCalendarBuilder {
    fn default() -> Self {
        Self {
            years: FIRST_YEAR..=Date::MAX.year(),
            source: Box::new(GermanHolidays),
            defined: BdewDefinedHolidays::new(),
        }
    }
}

impl BdewCalendarBuilder {
    /// Years for which holidays are loaded.
    pub fn years(mut self, years: RangeInclusive<u16>) -> Self {
        self.years = years;
        self
    }

    /// Source of the statutory holidays.
    pub fn source(mut self, source: impl HolidaySource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Add a one-off BDEW holiday on exactly `date`.
    pub fn exception(mut self, date: Date, label: impl Into<String>) -> Self {
        self.defined = self.defined.with_exception(date, label);
        self
    }

    /// Query the source for every year and jurisdiction and fold the results
    /// into one calendar.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for an empty or unsupported year
    /// range, and propagates [`Error::HolidaySourceUnavailable`] without
    /// retrying.
    pub fn build(self) -> Result<BdewCalendar> {
        let (first, last) = (*self.years.start(), *self.years.end());
        ensure!(first <= last, "empty year range {first}..={last}");
        ensure!(
            first >= Date::MIN.year() && last <= Date::MAX.year(),
            "year range {first}..={last} outside [{}, {}]",
            Date::MIN.year(),
            Date::MAX.year()
        );

        let jurisdictions: Vec<Jurisdiction> = std::iter::once(Jurisdiction::Nationwide)
            .chain(BDEW_SUBDIVISIONS.into_iter().map(Jurisdiction::Subdivision))
            .collect();

        let holidays = self.years.clone().try_fold(HolidaySet::new(), |acc, year| {
            let acc = acc.union(self.defined.for_year(year)?);
            jurisdictions.iter().try_fold(acc, |acc, &jurisdiction| {
                let set = self.source.holidays(jurisdiction, year).map_err(|e| {
                    warn!(source = self.source.name(), %jurisdiction, year, error = %e, "holiday source failed");
                    e
                })?;
                Ok::<_, Error>(acc.union(set))
            })
        })?;

        debug!(
            source = self.source.name(),
            first_year = first,
            last_year = last,
            jurisdictions = jurisdictions.len(),
            holidays = holidays.len(),
            "built BDEW calendar"
        );
        Ok(BdewCalendar {
            holidays,
            defined: self.defined,
            years: self.years,
        })
    }
}
