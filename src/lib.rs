// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Zoned wall-clock conversion for LLRT.
//!
//! This library converts a point in time expressed in UTC into a
//! representation whose calendar fields (year, month, day, hour, minute,
//! second, millisecond) read as the local civil time of a time zone,
//! while the underlying value stays representable as a plain epoch-based
//! container.
//!
//! # Architecture
//!
//! Three components composed linearly:
//!
//! 1. **Input normalization** - an instant-like value or ISO-8601 string
//!    becomes an [`Instant`] (UTC epoch milliseconds).
//! 2. **Offset resolution** - the zone specifier is classified once into
//!    a [`ZoneSpecifier`] (`UTC`/`Z`, fixed offset, or IANA identifier)
//!    and resolved to the [`ZoneOffset`] in effect at that instant. IANA
//!    lookups go through the [`ZoneDb`] capability (backed by chrono-tz's
//!    compiled-in table by default) and are instant-aware:
//!    daylight-saving and historical rule changes are honored, never a
//!    cached "current" offset.
//! 3. **Instant shifting** - the epoch value is shifted by the offset and
//!    the wall-clock fields are re-derived from the raw millisecond count
//!    through UTC accessors, so the host machine's own timezone can never
//!    contaminate the result.
//!
//! Converting a zoned wall-clock time back to a true UTC instant is a
//! separate problem (local times can be ambiguous or nonexistent around
//! transitions) and is out of scope here.
//!
//! # Example
//!
//! ```
//! use llrt_zoned::utc_to_zoned_time;
//!
//! let zoned = utc_to_zoned_time("2014-06-25T10:00:00.123Z", "America/New_York").unwrap();
//! assert_eq!(zoned.to_iso_string(), "2014-06-25T06:00:00.123");
//!
//! let zoned = utc_to_zoned_time("2014-06-25T10:00:00.123Z", "+02:00").unwrap();
//! assert_eq!(zoned.to_iso_string(), "2014-06-25T12:00:00.123");
//! ```

mod error;
mod instant;
mod offset;
mod zone;
mod zoned;

pub use error::Error;
pub use instant::{Instant, IntoInstant};
pub use offset::{list_zone_names, IanaDb, ZoneDb, ZoneOffset};
pub use zone::ZoneSpecifier;
pub use zoned::ZonedInstant;

/// Convert a UTC instant (or date/time string) to the wall-clock time of
/// `zone`, using the compiled-in IANA database for zone lookups.
///
/// `zone` is `"UTC"`, `"Z"`, a fixed offset (`"+02:00"`, `"-0400"`), or
/// an IANA identifier (`"America/New_York"`).
pub fn utc_to_zoned_time(input: impl IntoInstant, zone: &str) -> Result<ZonedInstant, Error> {
    utc_to_zoned_time_in(&IanaDb, input, zone)
}

/// Convert against a caller-provided zone database.
pub fn utc_to_zoned_time_in<D: ZoneDb>(
    db: &D,
    input: impl IntoInstant,
    zone: &str,
) -> Result<ZonedInstant, Error> {
    let instant = input.into_instant()?;
    let specifier: ZoneSpecifier = zone.parse()?;
    let offset = specifier.offset_at(instant, db)?;
    ZonedInstant::shift(instant, offset)
}

/// The UTC offset of `zone` in effect at `input`.
///
/// Returns a positive value for zones ahead of UTC (e.g. +60 for UTC+1)
/// and a negative value for zones behind (e.g. -420 for UTC-7).
pub fn get_zone_offset(zone: &str, input: impl IntoInstant) -> Result<ZoneOffset, Error> {
    let instant = input.into_instant()?;
    let specifier: ZoneSpecifier = zone.parse()?;
    specifier.offset_at(instant, &IanaDb)
}
