//! `Period`, a German "Frist": a signed number of days plus the kind of days
//! being counted.

use std::str::FromStr;

use bdew_core::errors::{Error, Result};

/// Whether a period counts working days or calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    /// Working day, German "Werktag" (`"WT"`).
    WorkingDay,
    /// Calendar day, German "Kalendertag" (`"KT"`).
    CalendarDay,
}

impl DayType {
    /// The German abbreviation (`"WT"` or `"KT"`).
    pub fn code(&self) -> &'static str {
        match self {
            DayType::WorkingDay => "WT",
            DayType::CalendarDay => "KT",
        }
    }
}

impl FromStr for DayType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "WT" => Ok(DayType::WorkingDay),
            "KT" => Ok(DayType::CalendarDay),
            other => Err(Error::InvalidDayType(other.to_owned())),
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How the end date of a period is meant.
///
/// Only consumed when a [`Period`] is constructed; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndDateType {
    /// The end date belongs to the period. A contract for 2022 ends on
    /// "2022-12-31". Most dates in spoken communication are inclusive.
    Inclusive,
    /// The end date is the first date after the period. A contract for 2022
    /// ends on "2023-01-01". Most technical systems use exclusive end dates.
    #[default]
    Exclusive,
}

/// A statutory period ("Frist").
///
/// The stored `number_of_days` always has exclusive end date semantics: an
/// inclusive non-zero count is moved one day towards zero on construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    number_of_days: i32,
    day_type: DayType,
}

impl Period {
    /// Create a period.
    ///
    /// ```
    /// use bdew_time::{DayType, EndDateType, Period};
    ///
    /// let period = Period::new(42, DayType::WorkingDay, EndDateType::Inclusive);
    /// assert_eq!(period.number_of_days(), 41);
    /// ```
    pub fn new(number_of_days: i32, day_type: DayType, end_date_type: EndDateType) -> Self {
        let number_of_days = match end_date_type {
            EndDateType::Inclusive if number_of_days > 0 => number_of_days - 1,
            EndDateType::Inclusive if number_of_days < 0 => number_of_days + 1,
            _ => number_of_days,
        };
        Self {
            number_of_days,
            day_type,
        }
    }

    /// Create a period with an exclusive end date.
    pub fn exclusive(number_of_days: i32, day_type: DayType) -> Self {
        Self::new(number_of_days, day_type, EndDateType::Exclusive)
    }

    /// Create a period from a raw day-type code (`"WT"` or `"KT"`).
    ///
    /// # Errors
    /// Returns [`Error::InvalidDayType`] for any other code.
    pub fn from_code(number_of_days: i32, code: &str, end_date_type: EndDateType) -> Result<Self> {
        Ok(Self::new(number_of_days, code.parse()?, end_date_type))
    }

    /// Number of days, in exclusive end date semantics.
    pub fn number_of_days(&self) -> i32 {
        self.number_of_days
    }

    /// The kind of days counted.
    pub fn day_type(&self) -> DayType {
        self.day_type
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.number_of_days, self.day_type)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}
