//! UUID epoch constants
//!
//! Version 1 identifiers count 100 ns ticks from 1582-10-15T00:00:00Z,
//! the start of the Gregorian calendar. Everything else in this crate
//! speaks Unix time.

/// Number of 100 ns ticks between 1582-10-15 and 1970-01-01
pub const EPOCH_OFFSET_TICKS: u64 = 0x01B2_1DD2_1381_4000;

/// Ticks per second
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// Ticks per microsecond
pub const TICKS_PER_MICRO: i64 = 10;

/// Mask for the 60-bit timestamp field
pub const TIMESTAMP_MASK: u64 = 0x0FFF_FFFF_FFFF_FFFF;

/// Converts raw UUID ticks into ticks relative to the Unix epoch.
///
/// Identifiers stamped before 1970 give negative values.
#[inline]
pub fn unix_ticks(uuid_ticks: u64) -> i64 {
    // Both operands fit in 60 bits, so the i64 subtraction cannot overflow.
    (uuid_ticks & TIMESTAMP_MASK) as i64 - EPOCH_OFFSET_TICKS as i64
}

/// Converts Unix-relative ticks into floating point seconds.
#[inline]
pub fn ticks_to_seconds(ticks: i64) -> f64 {
    ticks as f64 / TICKS_PER_SECOND as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_offset_value() {
        assert_eq!(EPOCH_OFFSET_TICKS, 122_192_928_000_000_000);
        // 141427 days between the two epochs
        assert_eq!(EPOCH_OFFSET_TICKS / TICKS_PER_SECOND, 141_427 * 86_400);
    }

    #[test]
    fn test_unix_ticks_at_epochs() {
        assert_eq!(unix_ticks(EPOCH_OFFSET_TICKS), 0);
        assert_eq!(unix_ticks(0), -(EPOCH_OFFSET_TICKS as i64));
        assert_eq!(unix_ticks(EPOCH_OFFSET_TICKS + 15), 15);
    }

    #[test]
    fn test_unix_ticks_ignores_bits_above_field() {
        assert_eq!(unix_ticks(EPOCH_OFFSET_TICKS | 0xF000_0000_0000_0000), 0);
    }

    #[test]
    fn test_ticks_to_seconds() {
        assert_eq!(ticks_to_seconds(0), 0.0);
        assert_eq!(ticks_to_seconds(15_000_000), 1.5);
        assert_eq!(ticks_to_seconds(-10_000_000), -1.0);
    }
}
