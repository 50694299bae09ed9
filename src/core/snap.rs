//! Snap-to-grid quantization for dragged thumb values.

use crate::core::time::constants::SNAP_INTERVAL;
use crate::core::time::Time;

/// Round `value` to the nearest grid interval, then bring it inside
/// `[minimum, maximum]` by stepping in whole grid intervals.
///
/// Rounding is to the nearest minute boundary: remainders under half an
/// interval round down, the rest round up. The clamp steps by whole
/// intervals rather than pinning to the bound, so the result stays
/// grid-aligned.
pub fn snap(value: Time, minimum: Time, maximum: Time) -> Time {
    let remainder = value.rem_euclid(SNAP_INTERVAL);
    let mut snapped = if remainder < SNAP_INTERVAL / 2 {
        value - remainder
    } else {
        value - remainder + SNAP_INTERVAL
    };
    while snapped < minimum {
        snapped += SNAP_INTERVAL;
    }
    while snapped > maximum {
        snapped -= SNAP_INTERVAL;
    }
    snapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_nearest_minute() {
        // 29.999s past the minute rounds down
        assert_eq!(snap(120_000 + 29_999, 0, 1_000_000), 120_000);
        // exactly half rounds up
        assert_eq!(snap(120_000 + 30_000, 0, 1_000_000), 180_000);
        assert_eq!(snap(120_000 + 45_000, 0, 1_000_000), 180_000);
        // already on the grid is unchanged
        assert_eq!(snap(300_000, 0, 1_000_000), 300_000);
    }

    #[test]
    fn test_clamp_steps_by_whole_intervals() {
        // Below the minimum: stepped up to the first grid value >= minimum
        assert_eq!(snap(0, 90_000, 1_000_000), 120_000);
        // Above the maximum: stepped down to the last grid value <= maximum
        assert_eq!(snap(1_000_000, 0, 930_000), 900_000);
    }

    #[test]
    fn test_result_is_grid_aligned_and_bounded() {
        let cases = [-123_456, 0, 59_999, 60_001, 314_159, 999_999];
        for value in cases {
            let snapped = snap(value, 60_000, 900_000);
            assert_eq!(snapped % SNAP_INTERVAL, 0, "value {value} not aligned");
            assert!(snapped >= 60_000 && snapped <= 900_000, "value {value} out of bounds");
        }
    }

    #[test]
    fn test_negative_values() {
        // rem_euclid keeps rounding well-defined below epoch zero
        assert_eq!(snap(-29_999, -1_000_000, 1_000_000), 0);
        assert_eq!(snap(-31_000, -1_000_000, 1_000_000), -60_000);
    }
}
