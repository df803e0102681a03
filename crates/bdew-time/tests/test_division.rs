//! Stromtag and Gastag boundaries for instants given in various time zones.

use bdew_time::{
    has_no_utc_offset, is_division_boundary, is_gastag_limit, is_stromtag_limit, Division,
    GERMAN_TIME_ZONE,
};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

fn parse(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap().fixed_offset()
}

#[test]
fn stromtag() {
    let cases = [
        (utc(2020, 1, 1, 0), false, "UTC midnight"),
        (utc(2019, 12, 31, 23), true, "German midnight in winter"),
        (utc(2019, 12, 31, 22), false, "one hour early"),
        (parse("2010-01-01T00:00:00+01:00"), true, "explicit +01:00"),
        (utc(2022, 3, 26, 23), true, "before the switch to DST"),
        (parse("2022-03-27T00:00:00+01:00"), true, "CET midnight"),
        (parse("2022-03-27T00:00:00+02:00"), false, "no CEST midnight on that day"),
        (utc(2022, 3, 27, 22), true, "first DST midnight"),
        (parse("2022-03-28T00:00:00+02:00"), true, "CEST midnight"),
        (utc(2022, 10, 29, 22), true, "last DST midnight"),
        (parse("2022-10-30T00:00:00+02:00"), true, "CEST midnight"),
        (utc(2022, 10, 30, 23), true, "first CET midnight"),
        (parse("2022-10-31T00:00:00+01:00"), true, "CET midnight"),
        (parse("2022-10-31T00:00:00+02:00"), false, "CEST offset after the switch"),
        (parse("2022-10-29T12:00:00-10:00"), true, "Hawaii, German DST"),
        (parse("2022-10-30T13:00:00-10:00"), true, "Hawaii, German standard time"),
        (parse("2022-10-30T07:00:00+09:00"), true, "Tokyo, German DST"),
        (parse("2022-10-31T08:00:00+09:00"), true, "Tokyo, German standard time"),
    ];
    for (dt, expected, what) in cases {
        assert_eq!(is_stromtag_limit(&dt), expected, "{what}: {dt}");
    }
}

#[test]
fn stromtag_in_german_time_zone() {
    let dt = GERMAN_TIME_ZONE.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
    assert!(is_stromtag_limit(&dt));
    assert!(!is_gastag_limit(&dt));
}

#[test]
fn gastag() {
    let cases = [
        (utc(2020, 1, 1, 0), false, "UTC midnight"),
        (utc(2020, 1, 1, 5), true, "German 06:00 in winter"),
        (utc(2020, 1, 1, 4), false, "one hour early"),
        (utc(2022, 3, 26, 5), true, "before the switch to DST"),
        (parse("2022-03-26T06:00:00+01:00"), true, "CET 06:00"),
        (parse("2022-03-27T04:00:00+02:00"), false, "CEST 04:00"),
        (utc(2022, 3, 27, 4), true, "first DST Gastag"),
        (parse("2022-03-27T06:00:00+02:00"), true, "CEST 06:00"),
        (utc(2022, 10, 29, 4), true, "last DST Gastag"),
        (parse("2022-10-30T06:00:00+01:00"), true, "CET 06:00"),
        (parse("2022-10-30T06:00:00+02:00"), false, "CEST offset after the switch"),
        (parse("2022-10-29T19:00:00-10:00"), true, "Hawaii, German DST"),
        (parse("2022-10-30T19:00:00-10:00"), true, "Hawaii, German standard time"),
        (parse("2022-10-29T09:45:00+05:45"), true, "Nepal, German DST"),
        (parse("2022-10-30T10:45:00+05:45"), true, "Nepal, German standard time"),
        (parse("2022-10-31T10:45:00+05:45"), true, "Nepal, German standard time"),
    ];
    for (dt, expected, what) in cases {
        assert_eq!(is_gastag_limit(&dt), expected, "{what}: {dt}");
    }
}

#[test]
fn division_boundary_dispatch() {
    let cases = [
        (utc(2020, 1, 1, 0), Division::Gas, false),
        (utc(2020, 1, 1, 5), Division::Gas, true),
        (utc(2020, 1, 1, 4), Division::Gas, false),
        (utc(2022, 3, 26, 5), Division::Gas, true),
        (utc(2020, 1, 1, 0), Division::Strom, false),
        (utc(2019, 12, 31, 23), Division::Strom, true),
        (utc(2019, 12, 31, 22), Division::Strom, false),
    ];
    for (dt, division, expected) in cases {
        assert_eq!(is_division_boundary(&dt, division), expected, "{division}: {dt}");
    }
    assert!("Wasser".parse::<Division>().is_err());
}

#[test]
fn no_utc_offset() {
    assert!(has_no_utc_offset(&utc(2020, 1, 1, 0)));
    assert!(!has_no_utc_offset(&parse("2022-03-26T06:00:00+01:00")));
    assert!(!has_no_utc_offset(&parse("2022-03-27T04:00:00+02:00")));
}
