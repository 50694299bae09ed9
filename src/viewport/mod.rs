//! Viewport controller owning the currently visible time window.
//!
//! Every transition computes a new window, clamps it into the absolute time
//! domain by shifting the whole window (never truncating its width), and
//! reports whether the committed window differs from the previous one so the
//! caller can notify the synchronization bus.

use log::debug;

use crate::core::time::{Time, TimeDomain};
use crate::core::zoom;
use crate::core::TimeRange;

/// Pan button multiplier: half the visible window.
pub const PAN_MULTIPLIER: f64 = 0.5;

/// Page button multiplier: a full visible window.
pub const PAGE_MULTIPLIER: f64 = 1.0;

/// The visible time window over an absolute domain.
///
/// Invariants after every operation:
/// - `domain.min <= lower <= upper <= domain.max`
/// - `MIN_VISIBLE_RANGE <= span <= MAX_VISIBLE_RANGE` once a zoom has run
///   (explicit range sets accept caller-given widths).
#[derive(Debug, Clone)]
pub struct Viewport {
    domain: TimeDomain,
    range: TimeRange,
    parity_odd: bool,
}

impl Viewport {
    pub fn new(domain: TimeDomain, lower: Time, upper: Time) -> Self {
        Self {
            domain,
            range: TimeRange::new(lower, upper).clamped_to(domain),
            parity_odd: false,
        }
    }

    pub fn domain(&self) -> TimeDomain {
        self.domain
    }

    pub fn lower(&self) -> Time {
        self.range.lower
    }

    pub fn upper(&self) -> Time {
        self.range.upper
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Width of the visible window, inclusive of both endpoints.
    pub fn span(&self) -> Time {
        self.range.span()
    }

    fn commit(&mut self, candidate: TimeRange) -> bool {
        let clamped = candidate.clamped_to(self.domain);
        if clamped == self.range {
            return false;
        }
        debug!(
            "viewport window {}..{} -> {}..{}",
            self.range.lower, self.range.upper, clamped.lower, clamped.upper
        );
        self.range = clamped;
        true
    }

    /// Shift the window by `multiplier` times its own width. Positive values
    /// move forward in time. Returns true if the committed window changed.
    pub fn pan(&mut self, multiplier: f64) -> bool {
        let delta = (multiplier * self.span() as f64).round() as Time;
        self.commit(self.range.shifted(delta))
    }

    /// Recenter so `current_time` sits one quarter of the window in from the
    /// left edge.
    pub fn show_time_at_quarter(&mut self, current_time: Time) -> bool {
        let span = self.span();
        let lower = current_time - span / 4;
        self.commit(TimeRange::new(lower, lower + span - 1))
    }

    /// Accept caller-given bounds (external visible-range or delta update).
    pub fn set_range(&mut self, lower: Time, upper: Time) -> bool {
        self.commit(TimeRange::new(lower.min(upper), lower.max(upper)))
    }

    /// Keep the window's left edge and apply a new width.
    pub fn set_span(&mut self, span: Time) -> bool {
        let lower = self.range.lower;
        self.commit(TimeRange::new(lower, lower + span.max(1) - 1))
    }

    pub fn can_zoom_in(&self) -> bool {
        zoom::can_zoom_in(self.span(), self.parity_odd)
    }

    pub fn can_zoom_out(&self) -> bool {
        zoom::can_zoom_out(self.span(), self.parity_odd)
    }

    /// Zoom in about `center`. Rejected (no-op, returns false) if the new
    /// span would fall below the minimum. An accepted zoom toggles parity.
    pub fn zoom_in(&mut self, center: Time) -> bool {
        if !self.can_zoom_in() {
            return false;
        }
        let span = zoom::zoomed_in_span(self.span(), self.parity_odd);
        self.parity_odd = !self.parity_odd;
        self.recenter_with_span(center, span);
        true
    }

    /// Zoom out about `center`. Rejected (no-op, returns false) if the new
    /// span would exceed the maximum. An accepted zoom toggles parity.
    pub fn zoom_out(&mut self, center: Time) -> bool {
        if !self.can_zoom_out() {
            return false;
        }
        let span = zoom::zoomed_out_span(self.span(), self.parity_odd);
        self.parity_odd = !self.parity_odd;
        self.recenter_with_span(center, span);
        true
    }

    fn recenter_with_span(&mut self, center: Time, span: Time) {
        let lower = center - span / 2;
        self.commit(TimeRange::new(lower, lower + span - 1));
    }

    /// Keep a selected time away from the window edges: if `t` lands within
    /// one eighth of the span from either edge, recenter the window around
    /// it with half the width on each side. Returns true if the window moved.
    pub fn ensure_time_off_edges(&mut self, t: Time) -> bool {
        let span = self.span();
        let margin = span / 8;
        if t > self.range.lower + margin && t < self.range.upper - margin {
            return false;
        }
        self.recenter_with_span(t, span);
        true
    }
}
