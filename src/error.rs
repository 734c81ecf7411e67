// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Error returned when a conversion input or zone specifier is rejected.
///
/// Both kinds are terminal: no retry, no fallback zone, no silent
/// defaulting to UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The date/time input is unparsable or not date/time-shaped.
    InvalidInput(String),
    /// The zone specifier is malformed as a fixed offset or is not a
    /// recognized IANA identifier.
    InvalidZone(String),
}

impl Error {
    pub(crate) fn invalid_input(input: impl Into<String>) -> Self {
        Self::InvalidInput(input.into())
    }

    pub(crate) fn invalid_zone(zone: impl Into<String>) -> Self {
        Self::InvalidZone(zone.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(input) => write!(f, "Invalid date/time input: {}", input),
            Error::InvalidZone(zone) => write!(f, "Invalid timezone: {}", zone),
        }
    }
}

impl std::error::Error for Error {}
