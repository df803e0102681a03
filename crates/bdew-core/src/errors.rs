//! Error types for bdew-datetimes.
//!
//! Every failure in the workspace is a validation or data error detected at
//! an API boundary. There is nothing transient to retry against, so callers
//! receive these immediately.

use thiserror::Error;

/// The top-level error type used throughout bdew-datetimes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date construction, parsing, or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// A day-type code did not map to a known day type.
    #[error("invalid day type '{0}': expected \"WT\" (Werktag) or \"KT\" (Kalendertag)")]
    InvalidDayType(String),

    /// A month-type value did not map to a known month type.
    #[error("unhandled month type '{0}': expected \"Liefermonat\" or \"Fristenmonat\"")]
    UnhandledMonthType(String),

    /// A division value did not map to a known division.
    #[error("unsupported division '{0}': the division must either be 'Strom' or 'Gas'")]
    UnsupportedDivision(String),

    /// The holiday source could not answer for a jurisdiction/year pair.
    #[error("holiday source unavailable for {jurisdiction} in {year}: {reason}")]
    HolidaySourceUnavailable {
        /// Code of the jurisdiction that was queried (e.g. `"DE-SN"`).
        jurisdiction: String,
        /// The year that was queried.
        year: u16,
        /// Why the source could not answer.
        reason: String,
    },

    /// Invalid argument (maps to a failed [`ensure!`](crate::ensure)).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout bdew-datetimes.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bdew_core::{ensure, errors::Error};
/// fn first_year(from: u16, to: u16) -> bdew_core::errors::Result<u16> {
///     ensure!(from <= to, "empty year range {from}..={to}");
///     Ok(from)
/// }
/// assert!(first_year(2020, 2030).is_ok());
/// assert!(matches!(first_year(2030, 2020), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holiday_source_message_names_jurisdiction_and_year() {
        let err = Error::HolidaySourceUnavailable {
            jurisdiction: "DE-SN".into(),
            year: 2031,
            reason: "no data".into(),
        };
        assert_eq!(
            err.to_string(),
            "holiday source unavailable for DE-SN in 2031: no data"
        );
    }

    #[test]
    fn invalid_day_type_echoes_input() {
        let err = Error::InvalidDayType("Foo".into());
        assert!(err.to_string().contains("'Foo'"));
    }

    fn checked(x: i32) -> Result<i32> {
        ensure!(x >= 0, "x must be non-negative, got {x}");
        Ok(x)
    }

    #[test]
    fn ensure_macro() {
        assert_eq!(checked(3), Ok(3));
        assert_eq!(
            checked(-1),
            Err(Error::InvalidArgument("x must be non-negative, got -1".into()))
        );
    }
}
