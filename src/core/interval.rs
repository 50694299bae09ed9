//! Closed time interval used for the visible window, the selected range,
//! and per-event start/end pairs.

use crate::core::time::{Time, TimeDomain};

/// A closed interval of time, possibly degenerate to a single instant.
///
/// Invariant: `lower <= upper`. A single-instant selection is represented
/// as `lower == upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub lower: Time,
    pub upper: Time,
}

impl TimeRange {
    pub fn new(lower: Time, upper: Time) -> Self {
        debug_assert!(lower <= upper, "interval bounds out of order");
        Self { lower, upper }
    }

    /// Build a degenerate interval holding a single instant.
    pub fn instant(t: Time) -> Self {
        Self { lower: t, upper: t }
    }

    /// Width of the interval, inclusive of both endpoints.
    pub fn span(&self) -> Time {
        self.upper - self.lower + 1
    }

    pub fn is_instant(&self) -> bool {
        self.lower == self.upper
    }

    /// Closed-interval containment test.
    pub fn contains(&self, t: Time) -> bool {
        t >= self.lower && t <= self.upper
    }

    /// Closed-interval intersection test: ranges intersect unless one lies
    /// strictly outside the other.
    pub fn intersects(&self, lower: Time, upper: Time) -> bool {
        !(upper < self.lower || lower > self.upper)
    }

    /// Shift both endpoints by `delta`, preserving the span.
    pub fn shifted(&self, delta: Time) -> Self {
        Self {
            lower: self.lower + delta,
            upper: self.upper + delta,
        }
    }

    /// Clamp into a domain by shifting the whole interval, not by truncating
    /// its width. If the interval is wider than the domain it is pinned to
    /// the domain's lower edge.
    pub fn clamped_to(&self, domain: TimeDomain) -> Self {
        let mut range = *self;
        if range.upper > domain.max {
            range = range.shifted(domain.max - range.upper);
        }
        if range.lower < domain.min {
            range = range.shifted(domain.min - range.lower);
        }
        range
    }
}
