//! Per-event miniature of the time ruler.
//!
//! Each table row carries one of these: a constrained thumb pair bound to
//! the event's start and end, over the same absolute domain as the ruler.
//! The visible window is mirrored from the ruler by the display; the scale
//! itself only owns the pair.

use crate::core::snap::snap;
use crate::core::time::{Time, TimeDomain};
use crate::core::TimeRange;

/// A constrained thumb pair bound to one event's (start, end).
#[derive(Debug, Clone)]
pub struct RowScale {
    event_id: String,
    range: TimeRange,
}

impl RowScale {
    pub fn new(event_id: impl Into<String>, start: Time, end: Time) -> Self {
        Self {
            event_id: event_id.into(),
            range: TimeRange::new(start, end),
        }
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Programmatic update from a merged event record (no snapping).
    pub fn set_range(&mut self, start: Time, end: Time) {
        self.range = TimeRange::new(start, end);
    }

    /// User drag of the lower thumb. The value snaps to the grid and may not
    /// pass the upper thumb. Returns the new range if it changed.
    pub fn drag_start(&mut self, raw: Time, domain: TimeDomain) -> Option<TimeRange> {
        let snapped = snap(raw, domain.min, self.range.upper);
        if snapped == self.range.lower {
            return None;
        }
        self.range = TimeRange::new(snapped, self.range.upper);
        Some(self.range)
    }

    /// User drag of the upper thumb. The value snaps to the grid and may not
    /// pass the lower thumb. Returns the new range if it changed.
    pub fn drag_end(&mut self, raw: Time, domain: TimeDomain) -> Option<TimeRange> {
        let snapped = snap(raw, self.range.lower, domain.max);
        if snapped == self.range.upper {
            return None;
        }
        self.range = TimeRange::new(self.range.lower, snapped);
        Some(self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::constants::SNAP_INTERVAL;

    fn domain() -> TimeDomain {
        TimeDomain::new(0, 100_000_000)
    }

    #[test]
    fn test_drag_start_snaps() {
        let mut scale = RowScale::new("evt1", 600_000, 1_200_000);
        let range = scale.drag_start(329_000, domain()).unwrap();
        assert_eq!(range.lower % SNAP_INTERVAL, 0);
        assert_eq!(range.lower, 300_000);
        assert_eq!(range.upper, 1_200_000);
    }

    #[test]
    fn test_thumbs_cannot_cross() {
        let mut scale = RowScale::new("evt1", 600_000, 1_200_000);
        // Dragging the lower thumb past the upper pins it at the upper value
        let range = scale.drag_start(5_000_000, domain()).unwrap();
        assert_eq!(range.lower, 1_200_000);
        assert!(range.is_instant());
        // And the upper thumb cannot go below the lower
        let mut scale = RowScale::new("evt2", 600_000, 1_200_000);
        let range = scale.drag_end(0, domain()).unwrap();
        assert_eq!(range.upper, 600_000);
    }

    #[test]
    fn test_unchanged_drag_returns_none() {
        let mut scale = RowScale::new("evt1", 600_000, 1_200_000);
        assert!(scale.drag_start(600_001, domain()).is_none());
        assert!(scale.drag_end(1_200_000, domain()).is_none());
    }
}
