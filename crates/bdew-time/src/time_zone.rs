//! German local time and the boundaries of the balancing days.
//!
//! The "Stromtag" (electricity) starts and ends at midnight German local time,
//! the "Gastag" (gas) at 06:00 German local time. In UTC both move by one hour
//! with daylight saving time.

use std::str::FromStr;

use bdew_core::errors::{Error, Result};
use chrono::{DateTime, NaiveTime, Offset, TimeZone, Timelike};
use chrono_tz::Tz;

/// The time zone of the German energy market.
pub const GERMAN_TIME_ZONE: Tz = chrono_tz::Europe::Berlin;

/// A division ("Sparte") of German utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    /// Electricity ("Strom").
    Strom,
    /// Gas.
    Gas,
}

impl Division {
    /// German local hour at which the balancing day of this division starts.
    pub fn day_start_hour(&self) -> u32 {
        match self {
            Division::Strom => 0,
            Division::Gas => 6,
        }
    }
}

impl FromStr for Division {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strom" | "electricity" => Ok(Division::Strom),
            "gas" => Ok(Division::Gas),
            _ => Err(Error::UnsupportedDivision(s.to_owned())),
        }
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Division::Strom => write!(f, "Strom"),
            Division::Gas => write!(f, "Gas"),
        }
    }
}

/// Wall-clock time in Germany at the instant `date_time`.
pub fn german_local_time<Z: TimeZone>(date_time: &DateTime<Z>) -> NaiveTime {
    date_time.with_timezone(&GERMAN_TIME_ZONE).time()
}

fn is_local_full_hour<Z: TimeZone>(date_time: &DateTime<Z>, hour: u32) -> bool {
    let local = german_local_time(date_time);
    local.hour() == hour && local.minute() == 0 && local.second() == 0
}

/// Return `true` if `date_time` is the inclusive start or exclusive end of a
/// German "Stromtag", i.e. midnight in German local time.
///
/// ```
/// use bdew_time::is_stromtag_limit;
/// use chrono::DateTime;
///
/// let winter = DateTime::parse_from_rfc3339("2022-03-27T00:00:00+01:00").unwrap();
/// let summer = DateTime::parse_from_rfc3339("2022-03-27T00:00:00+02:00").unwrap();
/// assert!(is_stromtag_limit(&winter));
/// assert!(!is_stromtag_limit(&summer));
/// ```
pub fn is_stromtag_limit<Z: TimeZone>(date_time: &DateTime<Z>) -> bool {
    is_local_full_hour(date_time, Division::Strom.day_start_hour())
}

/// Return `true` if `date_time` is the inclusive start or exclusive end of a
/// German "Gastag", i.e. 06:00 in German local time.
pub fn is_gastag_limit<Z: TimeZone>(date_time: &DateTime<Z>) -> bool {
    is_local_full_hour(date_time, Division::Gas.day_start_hour())
}

/// Return `true` if `date_time` is a day boundary of `division`.
pub fn is_division_boundary<Z: TimeZone>(date_time: &DateTime<Z>, division: Division) -> bool {
    match division {
        Division::Strom => is_stromtag_limit(date_time),
        Division::Gas => is_gastag_limit(date_time),
    }
}

/// Return `true` if `date_time` carries a UTC offset of zero and is exactly
/// midnight.
///
/// Market communication often requires timestamps like
/// `2020-01-01T00:00:00+00:00`.
pub fn has_no_utc_offset<Z: TimeZone>(date_time: &DateTime<Z>) -> bool {
    let offset = date_time.offset().fix().local_minus_utc();
    let time = date_time.time();
    offset == 0 && time.hour() == 0 && time.minute() == 0 && time.second() == 0
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    fn parse(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn local_time_follows_dst() {
        let winter = Utc.with_ymd_and_hms(2022, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2022, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(german_local_time(&winter), NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert_eq!(german_local_time(&summer), NaiveTime::from_hms_opt(14, 0, 0).unwrap());
    }

    #[test]
    fn stromtag_ignores_sub_seconds() {
        let dt = parse("2022-03-28T00:00:00.250+02:00");
        assert!(is_stromtag_limit(&dt));
        assert!(!is_stromtag_limit(&parse("2022-03-28T00:00:01+02:00")));
    }

    #[test]
    fn division_from_str() {
        assert_eq!("Strom".parse::<Division>().unwrap(), Division::Strom);
        assert_eq!("electricity".parse::<Division>().unwrap(), Division::Strom);
        assert_eq!("GAS".parse::<Division>().unwrap(), Division::Gas);
        assert_eq!(
            "Wasser".parse::<Division>(),
            Err(Error::UnsupportedDivision("Wasser".into()))
        );
    }

    #[test]
    fn utc_midnight() {
        assert!(has_no_utc_offset(&Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()));
        assert!(has_no_utc_offset(&parse("2020-01-01T00:00:00+00:00")));
        assert!(!has_no_utc_offset(&parse("2022-03-26T06:00:00+01:00")));
        assert!(!has_no_utc_offset(&parse("2022-03-27T04:00:00+02:00")));
        assert!(!has_no_utc_offset(&parse("2020-01-01T00:00:00+01:00")));
        assert!(!has_no_utc_offset(&Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap()));
    }
}
