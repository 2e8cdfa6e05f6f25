//! TimeBasedIdentifier - a UUID read for its embedded timestamp
//!
//! Identifiers reach the extractors either as structured `Uuid` values or
//! as hex strings. `IntoIdentifier` is the seam that lets both forms flow
//! into the same conversion, so equal identifiers always give equal
//! results regardless of how they were written.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::epoch::TIMESTAMP_MASK;
use super::errors::{TimestampError, TimestampResult};

const HEX_DIGITS: usize = 32;
const URN_PREFIX: &str = "urn:uuid:";

/// A 128-bit identifier in the UUID version 1 layout.
///
/// Only the timestamp field is consumed by the extractors. The version is
/// not checked: identifiers of other versions yield whatever their
/// timestamp bits encode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeBasedIdentifier(Uuid);

impl TimeBasedIdentifier {
    /// Wraps an existing UUID.
    #[inline]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses the hexadecimal string form.
    ///
    /// Accepts 32 hex digits in either case. Dashes are ignored, and an
    /// optional `urn:uuid:` prefix or enclosing braces are stripped.
    pub fn parse(input: &str) -> TimestampResult<Self> {
        let mut body = input.trim();
        // Byte offset of `body` within `input`, so errors point into the original text.
        let mut offset = input.len() - input.trim_start().len();

        if body.len() >= URN_PREFIX.len()
            && body.is_char_boundary(URN_PREFIX.len())
            && body[..URN_PREFIX.len()].eq_ignore_ascii_case(URN_PREFIX)
        {
            body = &body[URN_PREFIX.len()..];
            offset += URN_PREFIX.len();
        }
        if let Some(inner) = body.strip_prefix('{').and_then(|b| b.strip_suffix('}')) {
            body = inner;
            offset += 1;
        }

        let mut digits = String::with_capacity(HEX_DIGITS);
        for (index, c) in body.char_indices() {
            if c == '-' {
                continue;
            }
            if !c.is_ascii_hexdigit() {
                let position = input[..offset + index].chars().count();
                return Err(TimestampError::invalid_identifier(
                    input,
                    format!("invalid character '{}' at position {}", c, position),
                ));
            }
            digits.push(c);
        }

        if digits.len() != HEX_DIGITS {
            return Err(TimestampError::invalid_identifier(
                input,
                format!("expected {} hex digits, found {}", HEX_DIGITS, digits.len()),
            ));
        }

        Uuid::parse_str(&digits)
            .map(Self)
            .map_err(|e| TimestampError::invalid_identifier(input, e.to_string()))
    }

    /// Returns the raw 60-bit timestamp field in ticks since 1582-10-15.
    pub fn ticks(&self) -> u64 {
        let (time_low, time_mid, time_hi_and_version, _) = self.0.as_fields();
        ((time_hi_and_version as u64 & 0x0FFF) << 48
            | (time_mid as u64) << 32
            | time_low as u64)
            & TIMESTAMP_MASK
    }

    /// Returns the version nibble.
    pub fn version(&self) -> u8 {
        (self.0.as_fields().2 >> 12) as u8
    }

    /// Returns the 14-bit clock sequence.
    pub fn clock_sequence(&self) -> u16 {
        let d4 = self.0.as_fields().3;
        ((d4[0] & 0x3F) as u16) << 8 | d4[1] as u16
    }

    /// Returns the 48-bit node identifier.
    pub fn node(&self) -> [u8; 6] {
        let d4 = self.0.as_fields().3;
        let mut node = [0u8; 6];
        node.copy_from_slice(&d4[2..]);
        node
    }

    /// Returns the wrapped UUID.
    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the 32-character lowercase hex form.
    pub fn to_hex(&self) -> String {
        self.0.simple().to_string()
    }
}

impl fmt::Display for TimeBasedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for TimeBasedIdentifier {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for TimeBasedIdentifier {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<TimeBasedIdentifier> for Uuid {
    fn from(id: TimeBasedIdentifier) -> Self {
        id.0
    }
}

impl Serialize for TimeBasedIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TimeBasedIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Anything the extractors accept as an identifier.
pub trait IntoIdentifier {
    fn into_identifier(self) -> TimestampResult<TimeBasedIdentifier>;
}

impl IntoIdentifier for TimeBasedIdentifier {
    fn into_identifier(self) -> TimestampResult<TimeBasedIdentifier> {
        Ok(self)
    }
}

impl IntoIdentifier for &TimeBasedIdentifier {
    fn into_identifier(self) -> TimestampResult<TimeBasedIdentifier> {
        Ok(*self)
    }
}

impl IntoIdentifier for Uuid {
    fn into_identifier(self) -> TimestampResult<TimeBasedIdentifier> {
        Ok(TimeBasedIdentifier(self))
    }
}

impl IntoIdentifier for &Uuid {
    fn into_identifier(self) -> TimestampResult<TimeBasedIdentifier> {
        Ok(TimeBasedIdentifier(*self))
    }
}

impl IntoIdentifier for &str {
    fn into_identifier(self) -> TimestampResult<TimeBasedIdentifier> {
        TimeBasedIdentifier::parse(self)
    }
}

impl IntoIdentifier for String {
    fn into_identifier(self) -> TimestampResult<TimeBasedIdentifier> {
        TimeBasedIdentifier::parse(&self)
    }
}

impl IntoIdentifier for &String {
    fn into_identifier(self) -> TimestampResult<TimeBasedIdentifier> {
        TimeBasedIdentifier::parse(self)
    }
}
