//! The seam between the display core and a rendering backend.
//!
//! The core owns all state and behavior; a GUI layer implements
//! `ViewSurface` to be told what to repaint and owns no business logic.
//! User gestures flow the other way, into the public methods of
//! `TemporalDisplay`.

use crate::core::time::Time;
use crate::ruler::SelectionMode;

/// Callbacks a rendering backend implements. All methods default to no-ops
/// so a backend only overrides what it draws.
pub trait ViewSurface {
    /// The visible window moved or changed width.
    fn visible_range_changed(&mut self, _lower: Time, _upper: Time) {}

    /// The current-time marker moved.
    fn current_time_changed(&mut self, _time: Time) {}

    /// The ruler's selection thumb(s) moved or switched mode.
    fn selection_changed(&mut self, _mode: &SelectionMode) {}

    /// One row's cells or scale thumbs need repainting.
    fn row_changed(&mut self, _event_id: &str) {}

    /// The whole table (rows and row scales) was rebuilt.
    fn table_rebuilt(&mut self) {}

    /// Column order, widths, or sort indicators changed.
    fn columns_changed(&mut self) {}
}

/// Backend that draws nothing; useful headlessly and in tests.
#[derive(Debug, Default)]
pub struct NullSurface;

impl ViewSurface for NullSurface {}
