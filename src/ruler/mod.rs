//! The interactive time ruler and its per-event miniatures.
//!
//! The ruler owns the current-time marker and the selection: either a free
//! thumb holding a single instant, or a constrained thumb pair holding a
//! range. The two selection modes are mutually exclusive and switch
//! atomically.

pub mod row_scale;
pub mod thumb;

pub use row_scale::RowScale;
pub use thumb::{tooltip_text, ThumbKind};

use crate::core::snap::snap;
use crate::core::time::{Time, TimeDomain};
use crate::core::TimeRange;

/// Sentinel bound reported when the selected range becomes irrelevant
/// (a switch from range mode back to single-instant mode).
pub const RANGE_UNSET: Time = -1;

/// The ruler's selection: a single instant or a constrained range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Instant(Time),
    Range(TimeRange),
}

/// Outcome of an atomic mode switch, for bus notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// No switch happened (the requested mode was already active).
    Unchanged,
    /// Switched to single-instant mode; the old range is now irrelevant and
    /// the bus is told so with `RANGE_UNSET` bounds.
    RangeDropped,
    /// Switched to range mode with this newly established range.
    RangeEstablished(TimeRange),
}

/// The draggable, snap-constrained time axis.
#[derive(Debug, Clone)]
pub struct TimeRuler {
    current_time: Time,
    mode: SelectionMode,
}

impl TimeRuler {
    pub fn new(current_time: Time, selected_time: Time) -> Self {
        Self {
            current_time,
            mode: SelectionMode::Instant(selected_time),
        }
    }

    /// The free marker value (not draggable).
    pub fn current_time(&self) -> Time {
        self.current_time
    }

    pub fn set_current_time(&mut self, t: Time) {
        self.current_time = t;
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The anchor a zoom recenters around: the selected instant, or the
    /// midpoint of the selected range.
    pub fn zoom_anchor(&self) -> Time {
        match self.mode {
            SelectionMode::Instant(t) => t,
            SelectionMode::Range(r) => r.lower + (r.upper - r.lower) / 2,
        }
    }

    /// The selected instant, if in single mode.
    pub fn selected_time(&self) -> Option<Time> {
        match self.mode {
            SelectionMode::Instant(t) => Some(t),
            SelectionMode::Range(_) => None,
        }
    }

    /// The selected range, if in range mode.
    pub fn selected_range(&self) -> Option<TimeRange> {
        match self.mode {
            SelectionMode::Instant(_) => None,
            SelectionMode::Range(r) => Some(r),
        }
    }

    /// Programmatic selected-time update (no snapping). Ignored when in
    /// range mode.
    pub fn set_selected_time(&mut self, t: Time) -> bool {
        match self.mode {
            SelectionMode::Instant(old) if old != t => {
                self.mode = SelectionMode::Instant(t);
                true
            }
            _ => false,
        }
    }

    /// Programmatic selected-range update (no snapping). Ignored when in
    /// single mode.
    pub fn set_selected_range(&mut self, range: TimeRange) -> bool {
        match self.mode {
            SelectionMode::Range(old) if old != range => {
                self.mode = SelectionMode::Range(range);
                true
            }
            _ => false,
        }
    }

    /// Switch between single and range mode atomically.
    ///
    /// Entering single mode drops the range (the bus hears `RANGE_UNSET`
    /// bounds); entering range mode establishes a range spanning from the
    /// previous instant to it plus `initial_span`.
    pub fn switch_mode(&mut self, range_mode: bool, initial_span: Time) -> ModeChange {
        match (self.mode, range_mode) {
            (SelectionMode::Instant(t), true) => {
                let range = TimeRange::new(t, t + initial_span.max(0));
                self.mode = SelectionMode::Range(range);
                ModeChange::RangeEstablished(range)
            }
            (SelectionMode::Range(r), false) => {
                self.mode = SelectionMode::Instant(r.lower);
                ModeChange::RangeDropped
            }
            _ => ModeChange::Unchanged,
        }
    }

    /// User drag of the free thumb (single mode). Snaps to the grid and
    /// clamps into the domain. Returns the new value if it changed.
    pub fn drag_selected_time(&mut self, raw: Time, domain: TimeDomain) -> Option<Time> {
        let SelectionMode::Instant(old) = self.mode else {
            return None;
        };
        let snapped = snap(raw, domain.min, domain.max);
        if snapped == old {
            return None;
        }
        self.mode = SelectionMode::Instant(snapped);
        Some(snapped)
    }

    /// User drag of the range pair's lower thumb (range mode). Snaps and
    /// keeps the pair ordered. Returns the new range if it changed.
    pub fn drag_range_start(&mut self, raw: Time, domain: TimeDomain) -> Option<TimeRange> {
        let SelectionMode::Range(range) = self.mode else {
            return None;
        };
        let snapped = snap(raw, domain.min, range.upper);
        if snapped == range.lower {
            return None;
        }
        let range = TimeRange::new(snapped, range.upper);
        self.mode = SelectionMode::Range(range);
        Some(range)
    }

    /// User drag of the range pair's upper thumb (range mode). Snaps and
    /// keeps the pair ordered. Returns the new range if it changed.
    pub fn drag_range_end(&mut self, raw: Time, domain: TimeDomain) -> Option<TimeRange> {
        let SelectionMode::Range(range) = self.mode else {
            return None;
        };
        let snapped = snap(raw, range.lower, domain.max);
        if snapped == range.upper {
            return None;
        }
        let range = TimeRange::new(range.lower, snapped);
        self.mode = SelectionMode::Range(range);
        Some(range)
    }
}
