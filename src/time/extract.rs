//! Timestamp extraction from time-based identifiers
//!
//! All functions here are pure: they read the identifier and nothing else.
//! Structured and string inputs go through `IntoIdentifier` first, so the
//! two encodings of one identifier always produce identical results.

use chrono::{DateTime, TimeZone, Utc};

use super::decimal::DecimalTimestamp;
use super::epoch::{ticks_to_seconds, unix_ticks, TICKS_PER_SECOND};
use super::errors::{TimestampError, TimestampResult};
use super::identifier::IntoIdentifier;

/// Returns the Unix epoch timestamp, in seconds, embedded in a version 1
/// identifier.
///
/// Accepts a `Uuid`, a `TimeBasedIdentifier` or the identifier's hex
/// string. Strings that are not 32 hex digits (dashes ignored) fail with
/// `TimestampError::InvalidIdentifierFormat`.
pub fn extract_timestamp<I: IntoIdentifier>(identifier: I) -> TimestampResult<f64> {
    timestamp_ticks_from_uuid(identifier).map(ticks_to_seconds)
}

/// Returns the embedded timestamp as 100 ns ticks since the Unix epoch.
pub fn timestamp_ticks_from_uuid<I: IntoIdentifier>(identifier: I) -> TimestampResult<i64> {
    let id = identifier.into_identifier()?;
    Ok(unix_ticks(id.ticks()))
}

/// Returns the embedded timestamp with microsecond precision.
pub fn decimal_timestamp_from_uuid<I: IntoIdentifier>(
    identifier: I,
) -> TimestampResult<DecimalTimestamp> {
    timestamp_ticks_from_uuid(identifier).map(DecimalTimestamp::from_ticks)
}

/// Returns the embedded timestamp as a UTC date-time, exact to 100 ns.
pub fn datetime_from_uuid<I: IntoIdentifier>(identifier: I) -> TimestampResult<DateTime<Utc>> {
    let ticks = timestamp_ticks_from_uuid(identifier)?;
    let per_second = TICKS_PER_SECOND as i64;
    let secs = ticks.div_euclid(per_second);
    let nanos = (ticks.rem_euclid(per_second) * 100) as u32;
    Utc.timestamp_opt(secs, nanos)
        .single()
        .ok_or_else(|| TimestampError::TimestampOutOfRange(ticks.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::epoch::EPOCH_OFFSET_TICKS;
    use chrono::Datelike;
    use uuid::Uuid;

    fn uuid_with_ticks(ticks: u64) -> Uuid {
        Uuid::from_fields(
            (ticks & 0xFFFF_FFFF) as u32,
            ((ticks >> 32) & 0xFFFF) as u16,
            ((ticks >> 48) & 0x0FFF) as u16 | 0x1000,
            &[0x80, 0x01, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
        )
    }

    #[test]
    fn test_unix_epoch_identifier() {
        let uuid = uuid_with_ticks(EPOCH_OFFSET_TICKS);
        assert_eq!(extract_timestamp(uuid).unwrap(), 0.0);
        assert_eq!(timestamp_ticks_from_uuid(uuid).unwrap(), 0);
    }

    #[test]
    fn test_known_instant() {
        // 2023-11-14T22:13:20.5Z
        let ticks = EPOCH_OFFSET_TICKS + 1_700_000_000 * TICKS_PER_SECOND + 5_000_000;
        let uuid = uuid_with_ticks(ticks);

        assert_eq!(extract_timestamp(uuid).unwrap(), 1_700_000_000.5);
        assert_eq!(
            decimal_timestamp_from_uuid(uuid).unwrap().to_string(),
            "1700000000.500000"
        );
        assert_eq!(
            datetime_from_uuid(uuid).unwrap().to_rfc3339(),
            "2023-11-14T22:13:20.500+00:00"
        );
    }

    #[test]
    fn test_before_unix_epoch() {
        let uuid = uuid_with_ticks(EPOCH_OFFSET_TICKS - 5);
        assert_eq!(timestamp_ticks_from_uuid(uuid).unwrap(), -5);
        assert_eq!(decimal_timestamp_from_uuid(uuid).unwrap().as_micros(), -1);

        let gregorian = datetime_from_uuid(uuid_with_ticks(0)).unwrap();
        assert_eq!(gregorian.year(), 1582);
        assert_eq!(gregorian.month(), 10);
        assert_eq!(gregorian.day(), 15);
    }

    #[test]
    fn test_string_and_uuid_agree() {
        let uuid = uuid_with_ticks(EPOCH_OFFSET_TICKS + 17_000_000_000_123_457);
        let hex = uuid.simple().to_string();
        let hyphenated = uuid.hyphenated().to_string();

        let expected = extract_timestamp(uuid).unwrap();
        assert_eq!(extract_timestamp(hex.as_str()).unwrap(), expected);
        assert_eq!(extract_timestamp(&hyphenated).unwrap(), expected);
        assert_eq!(extract_timestamp(hex.to_uppercase()).unwrap(), expected);
    }

    #[test]
    fn test_malformed_string() {
        let err = extract_timestamp("abc123").unwrap_err();
        assert!(matches!(err, TimestampError::InvalidIdentifierFormat { .. }));
        assert!(decimal_timestamp_from_uuid("abc123").is_err());
        assert!(datetime_from_uuid("abc123").is_err());
    }

    #[test]
    fn test_version_is_not_checked() {
        let v4 = Uuid::from_fields(0x0000_0001, 0, 0x4000, &[0x80, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            timestamp_ticks_from_uuid(v4).unwrap(),
            1 - EPOCH_OFFSET_TICKS as i64
        );
    }
}
