//! Time utilities for time-based identifiers
//!
//! Converts UUID version 1 identifiers into the Unix time they embed:
//! - `extract_timestamp` returns floating point seconds
//! - `timestamp_ticks_from_uuid` returns exact 100 ns ticks
//! - `decimal_timestamp_from_uuid` returns microsecond decimal seconds
//! - `datetime_from_uuid` returns a UTC date-time
//!
//! Every function in this module is pure except `DecimalTimestamp::now`.

mod decimal;
mod epoch;
mod errors;
mod extract;
mod identifier;

pub use decimal::{datetime_from_timestamp, DecimalTimestamp};
pub use epoch::{EPOCH_OFFSET_TICKS, TICKS_PER_SECOND};
pub use errors::{TimestampError, TimestampResult};
pub use extract::{
    datetime_from_uuid, decimal_timestamp_from_uuid, extract_timestamp, timestamp_ticks_from_uuid,
};
pub use identifier::{IntoIdentifier, TimeBasedIdentifier};
