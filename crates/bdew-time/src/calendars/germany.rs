//! Statutory German holidays, nationwide and per subdivision.
//!
//! Holidays are never "observed" in Germany: a holiday that falls on a Sunday
//! is not moved to the next working day.

use bdew_core::errors::Result;

use crate::date::Date;
use crate::holiday_set::HolidaySet;
use crate::holiday_source::{HolidaySource, Jurisdiction, Subdivision};

/// First year with statutory data (reunification).
pub const FIRST_YEAR: u16 = 1990;

/// Statutory German public holidays.
///
/// Nationwide:
/// * Neujahr (Jan 1)
/// * Karfreitag (Easter − 2)
/// * Ostermontag (Easter + 1)
/// * Erster Mai (May 1)
/// * Christi Himmelfahrt (Easter + 39)
/// * Pfingstmontag (Easter + 50)
/// * Tag der Deutschen Einheit (Oct 3)
/// * Erster / Zweiter Weihnachtstag (Dec 25, Dec 26)
/// * Reformationstag (Oct 31) in 2017 only
/// * Buß- und Bettag until 1994
///
/// Each subdivision adds its own holidays on top of the nationwide ones.
/// Years before [`FIRST_YEAR`] have no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanHolidays;

impl HolidaySource for GermanHolidays {
    fn name(&self) -> &str {
        "Germany (statutory)"
    }

    fn holidays(&self, jurisdiction: Jurisdiction, year: u16) -> Result<HolidaySet> {
        if year < FIRST_YEAR {
            return Ok(HolidaySet::new());
        }
        let nationwide = nationwide(year)?;
        match jurisdiction {
            Jurisdiction::Nationwide => Ok(nationwide),
            Jurisdiction::Subdivision(sub) => Ok(nationwide.union(regional(sub, year)?)),
        }
    }
}

fn nationwide(year: u16) -> Result<HolidaySet> {
    let easter = easter_sunday(year)?;
    let mut holidays = vec![
        (Date::from_ymd(year, 1, 1)?, "Neujahr"),
        (easter.add_days(-2)?, "Karfreitag"),
        (easter.add_days(1)?, "Ostermontag"),
        (Date::from_ymd(year, 5, 1)?, "Erster Mai"),
        (easter.add_days(39)?, "Christi Himmelfahrt"),
        (easter.add_days(50)?, "Pfingstmontag"),
        (Date::from_ymd(year, 10, 3)?, "Tag der Deutschen Einheit"),
        (Date::from_ymd(year, 12, 25)?, "Erster Weihnachtstag"),
        (Date::from_ymd(year, 12, 26)?, "Zweiter Weihnachtstag"),
    ];
    if year == 2017 {
        // 500th anniversary of the Reformation
        holidays.push((reformationstag(year)?, "Reformationstag"));
    }
    if year <= 1994 {
        holidays.push((buss_und_bettag(year)?, "Buß- und Bettag"));
    }
    Ok(holidays.into_iter().collect())
}

fn regional(sub: Subdivision, year: u16) -> Result<HolidaySet> {
    let easter = easter_sunday(year)?;
    let heilige_drei_koenige = (Date::from_ymd(year, 1, 6)?, "Heilige Drei Könige");
    let fronleichnam = (easter.add_days(60)?, "Fronleichnam");
    let allerheiligen = (Date::from_ymd(year, 11, 1)?, "Allerheiligen");
    let reformation = (reformationstag(year)?, "Reformationstag");
    let frauentag = (Date::from_ymd(year, 3, 8)?, "Internationaler Frauentag");

    let mut holidays = Vec::new();
    match sub {
        Subdivision::Bb => holidays.extend([
            (easter, "Ostersonntag"),
            (easter.add_days(49)?, "Pfingstsonntag"),
            reformation,
        ]),
        Subdivision::Be => {
            if year >= 2019 {
                holidays.push(frauentag);
            }
            if year == 2020 || year == 2025 {
                holidays.push((Date::from_ymd(year, 5, 8)?, "Tag der Befreiung"));
            }
        }
        Subdivision::Bw | Subdivision::By => {
            holidays.extend([heilige_drei_koenige, fronleichnam, allerheiligen]);
        }
        Subdivision::Augsburg => {
            holidays.extend([heilige_drei_koenige, fronleichnam, allerheiligen]);
            holidays.push((Date::from_ymd(year, 8, 8)?, "Augsburger Friedensfest"));
        }
        Subdivision::Hb | Subdivision::Hh | Subdivision::Ni | Subdivision::Sh => {
            if year >= 2018 {
                holidays.push(reformation);
            }
        }
        Subdivision::He => holidays.push(fronleichnam),
        Subdivision::Mv => {
            holidays.push(reformation);
            if year >= 2023 {
                holidays.push(frauentag);
            }
        }
        Subdivision::Nw | Subdivision::Rp => holidays.extend([fronleichnam, allerheiligen]),
        Subdivision::Sl => holidays.extend([
            fronleichnam,
            (Date::from_ymd(year, 8, 15)?, "Mariä Himmelfahrt"),
            allerheiligen,
        ]),
        Subdivision::Sn => {
            holidays.push(reformation);
            if year >= 1995 {
                holidays.push((buss_und_bettag(year)?, "Buß- und Bettag"));
            }
        }
        Subdivision::St => holidays.extend([heilige_drei_koenige, reformation]),
        Subdivision::Th => {
            holidays.push(reformation);
            if year >= 2019 {
                holidays.push((Date::from_ymd(year, 9, 20)?, "Weltkindertag"));
            }
        }
    }
    Ok(holidays.into_iter().collect())
}

fn reformationstag(year: u16) -> Result<Date> {
    Date::from_ymd(year, 10, 31)
}

/// The Wednesday before November 23.
fn buss_und_bettag(year: u16) -> Result<Date> {
    let nov_22 = Date::from_ymd(year, 11, 22)?;
    let back = (nov_22.weekday().ordinal() as i32 - 3).rem_euclid(7);
    nov_22.add_days(-back)
}

/// Easter Sunday of `year` (Gregorian computus, Oudin's algorithm).
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    Date::from_ymd(year, month as u8, day as u8)
}
