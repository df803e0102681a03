//! Concrete calendars and holiday sources.

/// The BDEW calendar and its builder.
pub mod bdew;

/// Statutory German holidays.
pub mod germany;
