//! Temporal display core for a weather-hazard authoring workstation.
//!
//! This crate implements the state and behavior behind an interactive
//! timeline: a scrollable/zoomable time ruler with snap-to-grid thumbs, a
//! per-event time-range scale, and an event table with sortable, resizable,
//! reorderable columns. Rendering is out of scope; a GUI backend implements
//! [`view::ViewSurface`] and forwards user gestures to
//! [`display::TemporalDisplay`], which talks to the external
//! presenter/session layer through [`bus::NotificationSink`].
//!
//! All time values are epoch milliseconds (i64) and all operations run on a
//! single thread.

pub mod bus;
pub mod core;
pub mod display;
pub mod ruler;
pub mod table;
pub mod view;
pub mod viewport;

pub use crate::bus::{CollectingSink, Notification, NotificationSink};
pub use crate::core::{Time, TimeDomain, TimeRange};
pub use crate::display::{ConfigError, TemporalDisplay};
pub use crate::ruler::{RowScale, SelectionMode, ThumbKind, TimeRuler};
pub use crate::table::{
    CellValue, ColumnDef, ColumnType, EventRow, EventUpdate, SortDirection, TableCoordinator,
};
pub use crate::view::{NullSurface, ViewSurface};
pub use crate::viewport::Viewport;
