//! Zoom ratio policy for the visible time window.
//!
//! Successive zoom actions alternate between two ratios ("odd" and "even"
//! zoom levels) so that repeated zooming approximates a geometric
//! progression. Each accepted zoom toggles the parity.

use crate::core::time::constants::{MAX_VISIBLE_RANGE, MIN_VISIBLE_RANGE};
use crate::core::time::Time;

/// Next window span after zooming out from `current`.
pub fn zoomed_out_span(current: Time, parity_odd: bool) -> Time {
    if parity_odd {
        current * 3 / 2
    } else {
        current * 4 / 3
    }
}

/// Next window span after zooming in from `current`.
pub fn zoomed_in_span(current: Time, parity_odd: bool) -> Time {
    if parity_odd {
        current * 3 / 4
    } else {
        current * 2 / 3
    }
}

/// Whether zooming out from `current` stays within the allowed window span.
/// Also gates the enabled state of zoom-out controls.
pub fn can_zoom_out(current: Time, parity_odd: bool) -> bool {
    zoomed_out_span(current, parity_odd) <= MAX_VISIBLE_RANGE
}

/// Whether zooming in from `current` stays within the allowed window span.
/// Also gates the enabled state of zoom-in controls.
pub fn can_zoom_in(current: Time, parity_odd: bool) -> bool {
    zoomed_in_span(current, parity_odd) >= MIN_VISIBLE_RANGE
}
