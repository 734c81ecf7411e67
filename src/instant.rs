// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Input normalization to a canonical UTC epoch value.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::Error;

/// A UTC point in time, counted in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    epoch_millis: i64,
}

impl Instant {
    /// Create an instant from milliseconds since the Unix epoch.
    pub const fn from_epoch_millis(epoch_millis: i64) -> Self {
        Self { epoch_millis }
    }

    /// Milliseconds since the Unix epoch.
    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    /// The UTC calendar view of this instant, or `None` when the epoch
    /// value falls outside the representable calendar range.
    pub(crate) fn to_utc_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.epoch_millis).single()
    }
}

impl FromStr for Instant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instant(s)
    }
}

/// Conversion of instant-like values and date/time strings into [`Instant`].
///
/// Implementations read UTC epoch milliseconds directly and never
/// reinterpret values through host-local calendar fields.
pub trait IntoInstant {
    fn into_instant(self) -> Result<Instant, Error>;
}

impl IntoInstant for Instant {
    fn into_instant(self) -> Result<Instant, Error> {
        Ok(self)
    }
}

impl IntoInstant for i64 {
    fn into_instant(self) -> Result<Instant, Error> {
        let instant = Instant::from_epoch_millis(self);
        if instant.to_utc_datetime().is_none() {
            return Err(Error::invalid_input(self.to_string()));
        }
        Ok(instant)
    }
}

impl IntoInstant for f64 {
    // JS-style epoch milliseconds, fractional part truncated
    fn into_instant(self) -> Result<Instant, Error> {
        if !self.is_finite() || self < i64::MIN as f64 || self > i64::MAX as f64 {
            return Err(Error::invalid_input(self.to_string()));
        }
        (self as i64).into_instant()
    }
}

impl<Tz: TimeZone> IntoInstant for DateTime<Tz> {
    fn into_instant(self) -> Result<Instant, Error> {
        Ok(Instant::from_epoch_millis(self.timestamp_millis()))
    }
}

impl IntoInstant for SystemTime {
    fn into_instant(self) -> Result<Instant, Error> {
        let epoch_millis = match self.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as i64,
            Err(err) => -(err.duration().as_millis() as i64),
        };
        epoch_millis.into_instant()
    }
}

impl IntoInstant for &str {
    fn into_instant(self) -> Result<Instant, Error> {
        parse_instant(self)
    }
}

impl IntoInstant for String {
    fn into_instant(self) -> Result<Instant, Error> {
        parse_instant(&self)
    }
}

fn parse_instant(input: &str) -> Result<Instant, Error> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Instant::from_epoch_millis(dt.timestamp_millis()));
    }
    // A date/time without zone designator is read as UTC, never host-local
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Instant::from_epoch_millis(naive.and_utc().timestamp_millis()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Instant::from_epoch_millis(
                midnight.and_utc().timestamp_millis(),
            ));
        }
    }
    Err(Error::invalid_input(input))
}
