//! uuidstamp - timestamps from time-based identifiers
//!
//! Reads the 60-bit timestamp embedded in version 1 UUIDs and converts it
//! to Unix time. Structured `Uuid` values and their hex strings are
//! interchangeable inputs and always give equal results.
//!
//! ```
//! use uuidstamp::extract_timestamp;
//!
//! let seconds = extract_timestamp("13814000-1dd2-11b2-8000-000000000000").unwrap();
//! assert_eq!(seconds, 0.0);
//! ```

pub mod cli;
pub mod config;
pub mod observability;
pub mod time;

pub use time::{
    datetime_from_timestamp, datetime_from_uuid, decimal_timestamp_from_uuid, extract_timestamp,
    timestamp_ticks_from_uuid, DecimalTimestamp, IntoIdentifier, TimeBasedIdentifier,
    TimestampError, TimestampResult,
};
