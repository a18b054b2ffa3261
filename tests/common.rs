// Shared across integration test binaries; not every binary uses every helper.
#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};
use tms_timezone::config::TimeZoneConfig;
use tms_timezone::domain_types::{MonthDay, TimeZoneDescriptor};

/// Parse an RFC 3339 timestamp into a fixed-offset instant.
pub fn instant(s: &str) -> DateTime<FixedOffset> {
    s.parse().expect("test instant must be valid RFC 3339")
}

/// Descriptor for a real zone with DST observed by the embedded database.
pub fn new_york() -> TimeZoneDescriptor {
    TimeZoneDescriptor::with_dst("America/New_York", -18000, -14400)
}

/// Descriptor for a zone name no database knows, forcing the heuristic.
pub fn unknown_with_dst() -> TimeZoneDescriptor {
    TimeZoneDescriptor::with_dst("Mars/Olympus_Mons", 0, 3600)
        .with_transition_dates(MonthDay { month: 3, day: 20 }, MonthDay { month: 10, day: 20 })
}

/// Config with a vendor-name alias entry pointing at a real IANA zone.
pub fn config_with_kyiv_alias() -> TimeZoneConfig {
    let mut config = TimeZoneConfig::default();
    config
        .aliases
        .insert("Ukraine Standard Time".to_string(), "Europe/Kyiv".to_string());
    config
}
