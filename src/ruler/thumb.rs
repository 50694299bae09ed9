//! Thumb kinds and tooltip text for the ruler and row scales.

use crate::core::time::{format_time, Time};

/// Which position indicator a tooltip or drag refers to.
///
/// Free thumbs stand alone; constrained thumbs come in ordered pairs. The
/// ruler and the per-event row scales share the same kinds so tooltip
/// captions can distinguish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbKind {
    /// Fixed marker showing the current time (not draggable).
    CurrentTime,
    /// Free thumb holding the selected instant (single mode).
    SelectedTime,
    /// Lower thumb of the selected-range pair (range mode).
    SelectedRangeStart,
    /// Upper thumb of the selected-range pair (range mode).
    SelectedRangeEnd,
    /// Lower thumb of an event's row scale.
    EventStart,
    /// Upper thumb of an event's row scale.
    EventEnd,
}

impl ThumbKind {
    pub fn caption(&self) -> &'static str {
        match self {
            ThumbKind::CurrentTime => "Current Time:",
            ThumbKind::SelectedTime => "Selected Time:",
            ThumbKind::SelectedRangeStart => "Selected Range Start:",
            ThumbKind::SelectedRangeEnd => "Selected Range End:",
            ThumbKind::EventStart => "Event Start Time:",
            ThumbKind::EventEnd => "Event End Time:",
        }
    }
}

/// Tooltip text for a thumb at `value`, e.g. "Selected Time: 14:05Z 03-Mar-24".
pub fn tooltip_text(kind: ThumbKind, value: Time) -> String {
    format!("{} {}", kind.caption(), format_time(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_text() {
        let t = 1_709_474_700_000; // 14:05Z 03-Mar-24
        assert_eq!(
            tooltip_text(ThumbKind::SelectedTime, t),
            "Selected Time: 14:05Z 03-Mar-24"
        );
        assert_eq!(
            tooltip_text(ThumbKind::EventStart, t),
            "Event Start Time: 14:05Z 03-Mar-24"
        );
    }

    #[test]
    fn test_captions_distinguish_ruler_and_row_scale() {
        assert_ne!(
            ThumbKind::SelectedRangeStart.caption(),
            ThumbKind::EventStart.caption()
        );
        assert_ne!(
            ThumbKind::SelectedRangeEnd.caption(),
            ThumbKind::EventEnd.caption()
        );
    }
}
