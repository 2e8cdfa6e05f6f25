//! Decimal timestamps
//!
//! Unix seconds carried with exactly six fractional digits. Stored as a
//! microsecond count so that ordering and arithmetic stay exact, which
//! matters when timestamps are used as sequence positions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::epoch::TICKS_PER_MICRO;
use super::errors::{TimestampError, TimestampResult};

const MICROS_PER_SECOND: i64 = 1_000_000;
const FRACTION_DIGITS: usize = 6;

/// Unix seconds with microsecond precision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecimalTimestamp(i64);

impl DecimalTimestamp {
    /// Reads the system clock.
    pub fn now() -> Self {
        Self(Utc::now().timestamp_micros())
    }

    #[inline]
    pub fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// Truncates Unix-relative ticks toward negative infinity.
    #[inline]
    pub fn from_ticks(ticks: i64) -> Self {
        Self(ticks.div_euclid(TICKS_PER_MICRO))
    }

    /// Rounds floating point seconds to six places.
    pub fn from_seconds(seconds: f64) -> TimestampResult<Self> {
        if !seconds.is_finite() {
            return Err(TimestampError::TimestampOutOfRange(seconds.to_string()));
        }
        let micros = (seconds * MICROS_PER_SECOND as f64).round();
        if micros < i64::MIN as f64 || micros >= i64::MAX as f64 {
            return Err(TimestampError::TimestampOutOfRange(seconds.to_string()));
        }
        Ok(Self(micros as i64))
    }

    #[inline]
    pub fn as_micros(&self) -> i64 {
        self.0
    }

    pub fn as_seconds(&self) -> f64 {
        self.0 as f64 / MICROS_PER_SECOND as f64
    }

    /// Returns `None` on overflow.
    pub fn checked_add_micros(&self, micros: i64) -> Option<Self> {
        self.0.checked_add(micros).map(Self)
    }

    pub fn to_datetime(&self) -> TimestampResult<DateTime<Utc>> {
        let secs = self.0.div_euclid(MICROS_PER_SECOND);
        let nanos = (self.0.rem_euclid(MICROS_PER_SECOND) * 1_000) as u32;
        Utc.timestamp_opt(secs, nanos)
            .single()
            .ok_or_else(|| TimestampError::TimestampOutOfRange(self.to_string()))
    }
}

impl fmt::Display for DecimalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_second = MICROS_PER_SECOND as u64;
        write!(f, "{}{}.{:06}", sign, abs / per_second, abs % per_second)
    }
}

impl FromStr for DecimalTimestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimestampError::invalid_decimal(s, "expected decimal seconds"));
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimestampError::invalid_decimal(s, "expected decimal fraction"));
        }
        if fraction.len() > FRACTION_DIGITS {
            return Err(TimestampError::invalid_decimal(
                s,
                format!("more than {} fractional digits", FRACTION_DIGITS),
            ));
        }

        let out_of_range = || TimestampError::invalid_decimal(s, "out of range");
        let whole: i64 = whole.parse().map_err(|_| out_of_range())?;
        let padded = format!("{:0<width$}", fraction, width = FRACTION_DIGITS);
        let fraction: i64 = padded.parse().map_err(|_| out_of_range())?;

        let micros = whole
            .checked_mul(MICROS_PER_SECOND)
            .and_then(|m| m.checked_add(fraction))
            .ok_or_else(out_of_range)?;
        Ok(Self(if negative { -micros } else { micros }))
    }
}

impl Serialize for DecimalTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DecimalTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Converts floating point Unix seconds into a UTC date-time.
pub fn datetime_from_timestamp(seconds: f64) -> TimestampResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(TimestampError::TimestampOutOfRange(seconds.to_string()));
    }
    let whole = seconds.floor();
    let mut secs = whole as i64;
    let mut nanos = ((seconds - whole) * 1e9).round() as u32;
    if nanos >= 1_000_000_000 {
        secs += 1;
        nanos -= 1_000_000_000;
    }
    Utc.timestamp_opt(secs, nanos)
        .single()
        .ok_or_else(|| TimestampError::TimestampOutOfRange(seconds.to_string()))
}
