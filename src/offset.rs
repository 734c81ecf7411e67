// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Offset resolution against the zone database.

use std::fmt;

use chrono::Offset;
use chrono_tz::Tz;

use crate::error::Error;
use crate::instant::Instant;
use crate::zone::ZoneSpecifier;

/// A signed UTC offset in whole minutes.
///
/// Positive values are ahead of UTC (e.g. +60 for UTC+1) and negative
/// values behind (e.g. -300 for UTC-5). For IANA zones the offset is a
/// function of both zone and instant, so values are recomputed per call
/// rather than cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneOffset {
    minutes: i32,
}

impl ZoneOffset {
    /// The zero offset.
    pub const UTC: ZoneOffset = ZoneOffset { minutes: 0 };

    /// Create an offset from whole minutes.
    pub const fn from_minutes(minutes: i32) -> Self {
        Self { minutes }
    }

    /// Create an offset from seconds, truncating sub-minute precision.
    pub const fn from_seconds(seconds: i32) -> Self {
        Self {
            minutes: seconds / 60,
        }
    }

    /// The offset in minutes (positive = ahead of UTC).
    pub const fn minutes(&self) -> i32 {
        self.minutes
    }

    /// The offset in milliseconds.
    pub const fn millis(&self) -> i64 {
        self.minutes as i64 * 60_000
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sign is rendered separately so sub-hour negative offsets such
        // as -00:59 keep it
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.unsigned_abs();
        write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
    }
}

/// A read-only, instant-aware zone database.
///
/// The resolver queries this for IANA identifiers only; `UTC` and fixed
/// offsets never touch the database. Implementations must answer with the
/// offset in effect at the queried instant, not a current or cached one.
pub trait ZoneDb {
    /// The signed UTC offset in effect at `at` for zone `id`, or `None`
    /// when the identifier is unknown.
    fn offset_at(&self, id: &str, at: Instant) -> Option<ZoneOffset>;
}

/// The IANA time zone database, backed by chrono-tz's compiled-in table.
///
/// The table is static immutable data: no initialization step, no
/// mutation, safe to query from concurrent calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaDb;

impl ZoneDb for IanaDb {
    fn offset_at(&self, id: &str, at: Instant) -> Option<ZoneOffset> {
        let tz: Tz = id.parse().ok()?;
        let utc = at.to_utc_datetime()?;
        let offset_secs = utc.with_timezone(&tz).offset().fix().local_minus_utc();
        tracing::trace!(zone = %id, offset_secs, "resolved zone offset");
        Some(ZoneOffset::from_seconds(offset_secs))
    }
}

/// List all IANA zone identifiers known to the compiled-in database.
pub fn list_zone_names() -> impl Iterator<Item = &'static str> {
    chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name())
}

impl ZoneSpecifier {
    /// Resolve the UTC offset in effect at `at` for this specifier.
    ///
    /// Unknown IANA identifiers fail with [`Error::InvalidZone`].
    pub fn offset_at<D: ZoneDb>(&self, at: Instant, db: &D) -> Result<ZoneOffset, Error> {
        match self {
            ZoneSpecifier::Utc => Ok(ZoneOffset::UTC),
            ZoneSpecifier::Fixed(offset) => Ok(*offset),
            ZoneSpecifier::Iana(id) => db
                .offset_at(id, at)
                .ok_or_else(|| Error::invalid_zone(id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_display() {
        assert_eq!(ZoneOffset::from_minutes(0).to_string(), "+00:00");
        assert_eq!(ZoneOffset::from_minutes(120).to_string(), "+02:00");
        assert_eq!(ZoneOffset::from_minutes(-240).to_string(), "-04:00");
        assert_eq!(ZoneOffset::from_minutes(330).to_string(), "+05:30");
        assert_eq!(ZoneOffset::from_minutes(-570).to_string(), "-09:30");
        assert_eq!(ZoneOffset::from_minutes(-59).to_string(), "-00:59");
    }

    #[test]
    fn test_from_seconds() {
        assert_eq!(ZoneOffset::from_seconds(-18000).minutes(), -300);
        assert_eq!(ZoneOffset::from_seconds(7200).minutes(), 120);
    }

    #[test]
    fn test_iana_db_winter_summer() {
        let jan_2024 = Instant::from_epoch_millis(1704067200000); // 2024-01-01 00:00:00 UTC
        let offset = IanaDb.offset_at("America/New_York", jan_2024).unwrap();
        assert_eq!(offset.minutes(), -300); // EST = UTC-5

        let jul_2024 = Instant::from_epoch_millis(1720000000000); // July 3, 2024
        let offset = IanaDb.offset_at("America/New_York", jul_2024).unwrap();
        assert_eq!(offset.minutes(), -240); // EDT = UTC-4
    }

    #[test]
    fn test_iana_db_unknown_zone() {
        let at = Instant::from_epoch_millis(0);
        assert!(IanaDb.offset_at("Invalid/Timezone", at).is_none());
    }

    #[test]
    fn test_list_zone_names() {
        let names: Vec<&str> = list_zone_names().collect();
        assert!(!names.is_empty());
        assert!(names.contains(&"UTC"));
        assert!(names.contains(&"America/New_York"));
        assert!(names.contains(&"Europe/Paris"));
    }
}
