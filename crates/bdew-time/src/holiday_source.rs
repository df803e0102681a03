//! Holiday sources and the jurisdictions they are queried for.
//!
//! A [`HolidaySource`] answers "which dates are holidays in this
//! jurisdiction in this year". It is treated as authoritative: labels are not
//! validated, only date membership is used.

use std::str::FromStr;

use bdew_core::errors::{Error, Result};

use crate::holiday_set::HolidaySet;

/// A German subdivision known to the holiday source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subdivision {
    /// Brandenburg.
    Bb,
    /// Berlin.
    Be,
    /// Baden-Württemberg.
    Bw,
    /// Bayern.
    By,
    /// Bremen.
    Hb,
    /// Hessen.
    He,
    /// Hamburg.
    Hh,
    /// Mecklenburg-Vorpommern.
    Mv,
    /// Niedersachsen.
    Ni,
    /// Nordrhein-Westfalen.
    Nw,
    /// Rheinland-Pfalz.
    Rp,
    /// Schleswig-Holstein.
    Sh,
    /// Saarland.
    Sl,
    /// Sachsen.
    Sn,
    /// Sachsen-Anhalt.
    St,
    /// Thüringen.
    Th,
    /// City of Augsburg (Bayern plus the Augsburger Friedensfest).
    ///
    /// Known to the holiday source but not part of the BDEW calendar.
    Augsburg,
}

impl Subdivision {
    /// Every subdivision the holiday source knows about.
    pub const ALL: [Subdivision; 17] = [
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
        Subdivision::Augsburg,
    ];

    /// Subdivision code (`"BB"`, `"BE"`, …, `"AUGSBURG"`).
    pub fn code(&self) -> &'static str {
        match self {
            Subdivision::Bb => "BB",
            Subdivision::Be => "BE",
            Subdivision::Bw => "BW",
            Subdivision::By => "BY",
            Subdivision::Hb => "HB",
            Subdivision::He => "HE",
            Subdivision::Hh => "HH",
            Subdivision::Mv => "MV",
            Subdivision::Ni => "NI",
            Subdivision::Nw => "NW",
            Subdivision::Rp => "RP",
            Subdivision::Sh => "SH",
            Subdivision::Sl => "SL",
            Subdivision::Sn => "SN",
            Subdivision::St => "ST",
            Subdivision::Th => "TH",
            Subdivision::Augsburg => "AUGSBURG",
        }
    }

    /// German name of the subdivision.
    pub fn name(&self) -> &'static str {
        match self {
            Subdivision::Bb => "Brandenburg",
            Subdivision::Be => "Berlin",
            Subdivision::Bw => "Baden-Württemberg",
            Subdivision::By => "Bayern",
            Subdivision::Hb => "Bremen",
            Subdivision::He => "Hessen",
            Subdivision::Hh => "Hamburg",
            Subdivision::Mv => "Mecklenburg-Vorpommern",
            Subdivision::Ni => "Niedersachsen",
            Subdivision::Nw => "Nordrhein-Westfalen",
            Subdivision::Rp => "Rheinland-Pfalz",
            Subdivision::Sh => "Schleswig-Holstein",
            Subdivision::Sl => "Saarland",
            Subdivision::Sn => "Sachsen",
            Subdivision::St => "Sachsen-Anhalt",
            Subdivision::Th => "Thüringen",
            Subdivision::Augsburg => "Augsburg",
        }
    }
}

impl std::fmt::Display for Subdivision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Subdivision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Subdivision::ALL
            .into_iter()
            .find(|sub| sub.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown German subdivision '{s}'")))
    }
}

/// The authority a holiday set is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Jurisdiction {
    /// Holidays observed in all of Germany.
    Nationwide,
    /// Holidays of one subdivision, including the nationwide ones.
    Subdivision(Subdivision),
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Jurisdiction::Nationwide => write!(f, "DE"),
            Jurisdiction::Subdivision(sub) => write!(f, "DE-{sub}"),
        }
    }
}

/// Supplier of holiday data per jurisdiction and year.
pub trait HolidaySource: std::fmt::Debug + Send + Sync {
    /// Human-readable name of the source.
    fn name(&self) -> &str;

    /// All holidays of `jurisdiction` in `year`.
    ///
    /// # Errors
    /// Returns [`Error::HolidaySourceUnavailable`] if the source cannot answer
    /// for this pair.
    fn holidays(&self, jurisdiction: Jurisdiction, year: u16) -> Result<HolidaySet>;
}
