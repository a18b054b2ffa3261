use chrono::{Offset, TimeZone};
use chrono_tz::Tz;
use proptest::prelude::*;
use rstest::rstest;

use tms_timezone::config::TimeZoneConfig;
use tms_timezone::domain_types::TimeZoneDescriptor;
use tms_timezone::timezone::{format_offset, parse_offset, OffsetCalculator};

mod common;
use common::{config_with_kyiv_alias, instant, new_york, unknown_with_dst};

proptest! {
    // Formatting truncates to whole minutes, so the round trip is exact
    // over the whole-minute domain [-16h, +16h].
    #[test]
    fn prop_readable_offset_round_trip(minutes in -16i32 * 60..=16 * 60) {
        let seconds = minutes * 60;
        prop_assert_eq!(parse_offset(&format_offset(seconds)), Some(seconds));
    }
}

#[rstest]
#[case("2024-01-01T00:00:00+00:00")]
#[case("2024-03-20T03:00:00+00:00")]
#[case("2024-07-15T12:00:00+00:00")]
#[case("2024-12-31T23:59:59+00:00")]
fn no_dst_zone_is_constant_all_year(#[case] when: &str) {
    let mut calc = OffsetCalculator::new(TimeZoneConfig::default());
    let descriptor = TimeZoneDescriptor::fixed("Vendor/Fixed+2", 7200);

    assert_eq!(
        calc.offset_seconds(Some(&descriptor), instant(when)).unwrap(),
        7200
    );
}

#[test]
fn authoritative_dst_matches_system_database_at_2024_transitions() {
    let mut calc = OffsetCalculator::new(TimeZoneConfig::default());
    let descriptor = new_york();
    let tz: Tz = "America/New_York".parse().unwrap();

    // Spring forward 2024-03-10 07:00 UTC, fall back 2024-11-03 06:00 UTC.
    for when in [
        "2024-03-10T06:59:59+00:00",
        "2024-03-10T07:00:00+00:00",
        "2024-11-03T05:59:59+00:00",
        "2024-11-03T06:00:00+00:00",
    ] {
        let at = instant(when);
        let expected = tz
            .offset_from_utc_datetime(&at.naive_utc())
            .fix()
            .local_minus_utc();

        let got = calc.offset_seconds(Some(&descriptor), at).unwrap();
        assert_eq!(got, expected, "offset mismatch at {when}");
    }
}

#[test]
fn heuristic_dst_window_boundaries() {
    let mut calc = OffsetCalculator::new(TimeZoneConfig::default());
    let descriptor = unknown_with_dst();

    // Window opens at 03:00 standard time on the approximate start date.
    assert_eq!(
        calc.offset_seconds(Some(&descriptor), instant("2024-03-20T03:00:00+00:00"))
            .unwrap(),
        3600
    );
    assert_eq!(
        calc.offset_seconds(Some(&descriptor), instant("2024-03-20T02:59:59+00:00"))
            .unwrap(),
        0
    );
}

#[test]
fn alias_resolution_yields_identical_offsets() {
    let winter = instant("2024-01-15T12:00:00+00:00");
    let summer = instant("2024-06-15T12:00:00+00:00");

    // A vendor name only the alias table knows must behave exactly like
    // the IANA name the database knows.
    let vendor = TimeZoneDescriptor::with_dst("Ukraine Standard Time", 7200, 10800);
    let iana = TimeZoneDescriptor::with_dst("Europe/Kyiv", 7200, 10800);

    for at in [winter, summer] {
        let mut by_vendor = OffsetCalculator::new(config_with_kyiv_alias());
        let mut by_iana = OffsetCalculator::new(config_with_kyiv_alias());

        assert_eq!(
            by_vendor.offset_seconds(Some(&vendor), at).unwrap(),
            by_iana.offset_seconds(Some(&iana), at).unwrap()
        );
    }
}

#[test]
fn deprecated_spelling_matches_current_one() {
    // "Europe/Kiev" survives as a database link; both spellings must agree.
    let summer = instant("2024-06-15T12:00:00+00:00");
    let kyiv = TimeZoneDescriptor::with_dst("Europe/Kyiv", 7200, 10800);
    let kiev = TimeZoneDescriptor::with_dst("Europe/Kiev", 7200, 10800);

    let mut calc = OffsetCalculator::new(TimeZoneConfig::default());
    let a = calc.offset_seconds(Some(&kyiv), summer).unwrap();
    let b = calc.offset_seconds(Some(&kiev), summer).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, 10800);
}

#[test]
fn memoization_is_observationally_pure() {
    let descriptor = new_york();
    let instants = [
        instant("2024-01-15T12:00:00+00:00"),
        instant("2024-07-15T12:00:00+00:00"),
        instant("2024-03-10T07:00:00+00:00"),
    ];

    let mut shared = OffsetCalculator::new(TimeZoneConfig::default());
    for at in instants {
        let memoized = shared.offset_seconds(Some(&descriptor), at).unwrap();
        let fresh = OffsetCalculator::new(TimeZoneConfig::default())
            .offset_seconds(Some(&descriptor), at)
            .unwrap();
        assert_eq!(memoized, fresh);
    }
}

#[test]
fn null_descriptor_returns_embedded_offset() {
    let mut calc = OffsetCalculator::new(TimeZoneConfig::default());

    assert_eq!(
        calc.offset_seconds(None, instant("2024-06-01T10:00:00+05:30"))
            .unwrap(),
        19800
    );
    assert_eq!(
        calc.offset_seconds(None, instant("2024-06-01T10:00:00-09:30"))
            .unwrap(),
        -34200
    );
}
