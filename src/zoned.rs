// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Shifted wall-clock output values.

use std::fmt;

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::Error;
use crate::instant::Instant;
use crate::offset::ZoneOffset;

/// A wall-clock view of an instant in some zone.
///
/// The UTC-read calendar fields of a `ZonedInstant` equal the source
/// instant's UTC fields shifted by the resolved offset, with full
/// minute/hour/day/month/year carry. It is *not* a new true instant:
/// [`epoch_millis`](Self::epoch_millis) is the container encoding of the
/// local fields, and feeding it back through UTC-aware instant semantics
/// is meaningless. The value exists so that plain field reads (and
/// formatters that read UTC fields) display the correct local wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedInstant {
    wall: DateTime<Utc>,
    offset: ZoneOffset,
}

impl ZonedInstant {
    /// Shift `instant` by `offset` minutes.
    ///
    /// The arithmetic runs on the raw millisecond count and every field is
    /// re-derived from the shifted count afterwards. Fields are never
    /// adjusted in place, so a result landing exactly on midnight keeps
    /// the correct date, and the host machine's configured timezone never
    /// enters the computation.
    pub fn shift(instant: Instant, offset: ZoneOffset) -> Result<Self, Error> {
        let shifted = instant
            .epoch_millis()
            .checked_add(offset.millis())
            .ok_or_else(|| Error::invalid_input(instant.epoch_millis().to_string()))?;
        let wall = Instant::from_epoch_millis(shifted)
            .to_utc_datetime()
            .ok_or_else(|| Error::invalid_input(shifted.to_string()))?;
        Ok(Self { wall, offset })
    }

    /// Milliseconds since the epoch of the shifted wall-clock value.
    pub fn epoch_millis(&self) -> i64 {
        self.wall.timestamp_millis()
    }

    /// The offset that produced this value.
    pub const fn offset(&self) -> ZoneOffset {
        self.offset
    }

    pub fn year(&self) -> i32 {
        self.wall.year()
    }

    pub fn month(&self) -> u32 {
        self.wall.month()
    }

    pub fn day(&self) -> u32 {
        self.wall.day()
    }

    pub fn hour(&self) -> u32 {
        self.wall.hour()
    }

    pub fn minute(&self) -> u32 {
        self.wall.minute()
    }

    pub fn second(&self) -> u32 {
        self.wall.second()
    }

    pub fn millisecond(&self) -> u32 {
        self.wall.timestamp_subsec_millis()
    }

    /// Render as `yyyy-MM-ddTHH:mm:ss.SSS` wall-clock text.
    pub fn to_iso_string(&self) -> String {
        let mut buf = itoa::Buffer::new();
        let mut out = String::with_capacity(23);

        push_year(&mut out, &mut buf, self.year());
        out.push('-');
        push_two_digits(&mut out, &mut buf, self.month());
        out.push('-');
        push_two_digits(&mut out, &mut buf, self.day());
        out.push('T');
        push_two_digits(&mut out, &mut buf, self.hour());
        out.push(':');
        push_two_digits(&mut out, &mut buf, self.minute());
        out.push(':');
        push_two_digits(&mut out, &mut buf, self.second());
        out.push('.');
        push_millis(&mut out, &mut buf, self.millisecond());

        out
    }
}

impl fmt::Display for ZonedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

fn push_two_digits(out: &mut String, buf: &mut itoa::Buffer, value: u32) {
    if value < 10 {
        out.push('0');
    }
    out.push_str(buf.format(value));
}

fn push_millis(out: &mut String, buf: &mut itoa::Buffer, value: u32) {
    if value < 100 {
        out.push('0');
    }
    if value < 10 {
        out.push('0');
    }
    out.push_str(buf.format(value));
}

fn push_year(out: &mut String, buf: &mut itoa::Buffer, year: i32) {
    if year < 0 {
        out.push('-');
    }
    let year = year.unsigned_abs();
    if year < 1000 {
        out.push('0');
    }
    if year < 100 {
        out.push('0');
    }
    if year < 10 {
        out.push('0');
    }
    out.push_str(buf.format(year));
}
