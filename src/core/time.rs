//! Time representation using epoch milliseconds for the temporal display.
//! All time values throughout the crate are milliseconds since the Unix epoch.

use chrono::{TimeZone, Utc};

/// Time in milliseconds since the Unix epoch.
/// This is the core time representation throughout the crate.
pub type Time = i64;

/// Time constants for conversions and display limits.
pub mod constants {
    use super::Time;

    pub const MILLIS_PER_SECOND: Time = 1_000;
    pub const MILLIS_PER_MINUTE: Time = 60_000;
    pub const MILLIS_PER_HOUR: Time = 3_600_000;
    pub const MILLIS_PER_DAY: Time = 86_400_000;

    /// Smallest visible window the display allows (2 hours).
    pub const MIN_VISIBLE_RANGE: Time = 2 * MILLIS_PER_HOUR;

    /// Largest visible window the display allows (8 days).
    pub const MAX_VISIBLE_RANGE: Time = 8 * MILLIS_PER_DAY;

    /// Grid interval that dragged thumbs snap to (1 minute).
    pub const SNAP_INTERVAL: Time = MILLIS_PER_MINUTE;
}

/// Convert hours to milliseconds
#[inline]
pub fn from_hours(hours: i64) -> Time {
    hours * constants::MILLIS_PER_HOUR
}

/// Convert days to milliseconds
#[inline]
pub fn from_days(days: i64) -> Time {
    days * constants::MILLIS_PER_DAY
}

/// Convert minutes to milliseconds
#[inline]
pub fn from_minutes(minutes: i64) -> Time {
    minutes * constants::MILLIS_PER_MINUTE
}

/// Absolute bounds of the time domain a display operates over.
///
/// Every committed viewport window, thumb value, and event time stays inside
/// these bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDomain {
    pub min: Time,
    pub max: Time,
}

impl TimeDomain {
    pub fn new(min: Time, max: Time) -> Self {
        Self { min, max }
    }

    /// Width of the domain in milliseconds, inclusive of both endpoints.
    pub fn span(&self) -> Time {
        self.max - self.min + 1
    }

    pub fn contains(&self, t: Time) -> bool {
        t >= self.min && t <= self.max
    }
}

/// Format a time for thumb tooltips and date cells, e.g. "14:05Z 03-Mar-24".
pub fn format_time(millis: Time) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%H:%MZ %d-%b-%y").to_string(),
        None => format!("{}", millis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversions() {
        assert_eq!(from_minutes(1), 60_000);
        assert_eq!(from_hours(2), constants::MIN_VISIBLE_RANGE);
        assert_eq!(from_days(8), constants::MAX_VISIBLE_RANGE);
    }

    #[test]
    fn test_domain_contains() {
        let domain = TimeDomain::new(0, 1_000_000);
        assert!(domain.contains(0));
        assert!(domain.contains(1_000_000));
        assert!(!domain.contains(-1));
        assert!(!domain.contains(1_000_001));
        assert_eq!(domain.span(), 1_000_001);
    }

    #[test]
    fn test_format_time() {
        // 2024-03-03 14:05:00 UTC
        let t = 1_709_474_700_000;
        assert_eq!(format_time(t), "14:05Z 03-Mar-24");
    }

    #[test]
    fn test_format_time_epoch() {
        assert_eq!(format_time(0), "00:00Z 01-Jan-70");
    }
}
