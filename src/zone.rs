// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Zone specifier classification.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::offset::ZoneOffset;

/// A classified time zone specifier.
///
/// Classification happens once, by shape, and is total: every specifier
/// string maps to exactly one variant or is rejected. A fixed offset is
/// constant while an IANA identifier resolves to a different offset
/// depending on the instant, so the resolver matches this union
/// exhaustively instead of re-inspecting the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneSpecifier {
    /// The literal `"UTC"` (any ASCII case) or the ISO designator `"Z"`.
    Utc,
    /// A fixed offset such as `"+02:00"` or `"-0400"`.
    Fixed(ZoneOffset),
    /// An IANA zone identifier such as `"America/New_York"`, validated
    /// against the zone database at resolution time.
    Iana(String),
}

impl FromStr for ZoneSpecifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(Error::invalid_zone(s));
        }
        if s == "Z" || s.eq_ignore_ascii_case("UTC") {
            return Ok(ZoneSpecifier::Utc);
        }
        if let Some(offset) = parse_fixed_offset(s)? {
            return Ok(ZoneSpecifier::Fixed(offset));
        }
        Ok(ZoneSpecifier::Iana(s.to_string()))
    }
}

impl fmt::Display for ZoneSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneSpecifier::Utc => f.write_str("UTC"),
            ZoneSpecifier::Fixed(offset) => write!(f, "{}", offset),
            ZoneSpecifier::Iana(id) => f.write_str(id),
        }
    }
}

/// Parse a `[+-]HH:MM` or `[+-]HHMM` offset specifier.
///
/// Returns `Ok(None)` when the string does not lead with a sign and is
/// therefore not offset-shaped. IANA identifiers never start with a sign,
/// so a sign-leading string that fails the shape check is an error rather
/// than a database candidate.
fn parse_fixed_offset(s: &str) -> Result<Option<ZoneOffset>, Error> {
    let bytes = s.as_bytes();
    let sign = match bytes.first() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return Ok(None),
    };
    let (h1, h2, m1, m2) = match &bytes[1..] {
        [h1, h2, m1, m2] => (*h1, *h2, *m1, *m2),
        [h1, h2, b':', m1, m2] => (*h1, *h2, *m1, *m2),
        _ => return Err(Error::invalid_zone(s)),
    };
    if ![h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_zone(s));
    }
    let hours = ((h1 - b'0') * 10 + (h2 - b'0')) as i32;
    let minutes = ((m1 - b'0') * 10 + (m2 - b'0')) as i32;
    if hours > 23 || minutes > 59 {
        return Err(Error::invalid_zone(s));
    }
    Ok(Some(ZoneOffset::from_minutes(sign * (hours * 60 + minutes))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_utc() {
        assert_eq!("UTC".parse::<ZoneSpecifier>().unwrap(), ZoneSpecifier::Utc);
        assert_eq!("utc".parse::<ZoneSpecifier>().unwrap(), ZoneSpecifier::Utc);
        assert_eq!("Z".parse::<ZoneSpecifier>().unwrap(), ZoneSpecifier::Utc);
    }

    #[test]
    fn test_classify_fixed_offset() {
        assert_eq!(
            "+02:00".parse::<ZoneSpecifier>().unwrap(),
            ZoneSpecifier::Fixed(ZoneOffset::from_minutes(120))
        );
        assert_eq!(
            "-04:00".parse::<ZoneSpecifier>().unwrap(),
            ZoneSpecifier::Fixed(ZoneOffset::from_minutes(-240))
        );
        assert_eq!(
            "+0200".parse::<ZoneSpecifier>().unwrap(),
            ZoneSpecifier::Fixed(ZoneOffset::from_minutes(120))
        );
        assert_eq!(
            "+05:30".parse::<ZoneSpecifier>().unwrap(),
            ZoneSpecifier::Fixed(ZoneOffset::from_minutes(330))
        );
        assert_eq!(
            "-00:00".parse::<ZoneSpecifier>().unwrap(),
            ZoneSpecifier::Fixed(ZoneOffset::from_minutes(0))
        );
    }

    #[test]
    fn test_classify_iana() {
        assert_eq!(
            "America/New_York".parse::<ZoneSpecifier>().unwrap(),
            ZoneSpecifier::Iana("America/New_York".to_string())
        );
        // Unsigned digits are not offset-shaped, so they classify as IANA
        // and fail later at the database
        assert_eq!(
            "0200".parse::<ZoneSpecifier>().unwrap(),
            ZoneSpecifier::Iana("0200".to_string())
        );
    }

    #[test]
    fn test_malformed_fixed_offset() {
        assert!("+2:00".parse::<ZoneSpecifier>().is_err());
        assert!("+02:0".parse::<ZoneSpecifier>().is_err());
        assert!("+02:000".parse::<ZoneSpecifier>().is_err());
        assert!("+0a:00".parse::<ZoneSpecifier>().is_err());
        assert!("+24:00".parse::<ZoneSpecifier>().is_err());
        assert!("+02:60".parse::<ZoneSpecifier>().is_err());
        assert!("-".parse::<ZoneSpecifier>().is_err());
    }

    #[test]
    fn test_empty_specifier() {
        assert!("".parse::<ZoneSpecifier>().is_err());
        assert!("   ".parse::<ZoneSpecifier>().is_err());
    }
}
