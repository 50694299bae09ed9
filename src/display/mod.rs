//! The temporal display: viewport, ruler, row scales, and event table wired
//! together behind the inbound/outbound contract with the presenter layer.
//!
//! All operations run synchronously on the caller's (single) thread. Work
//! that must not run re-entrantly during an in-progress pass, such as the
//! proportional width redistribution after the reserved column resizes or a
//! corrective column move, is pushed onto an explicit queue and drained at
//! the end of the operation that scheduled it.

use std::collections::VecDeque;

use log::warn;

use crate::bus::{Notification, NotificationSink};
use crate::core::time::{Time, TimeDomain};
use crate::core::TimeRange;
use crate::ruler::{ModeChange, RowScale, TimeRuler, RANGE_UNSET};
use crate::table::{ColumnDef, EventRow, EventUpdate, TableCoordinator, TIME_SCALE_COLUMN};
use crate::view::{NullSurface, ViewSurface};
use crate::viewport::{Viewport, PAGE_MULTIPLIER, PAN_MULTIPLIER};

/// Configuration failure raised at construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("time domain minimum {min} is not below maximum {max}")]
    InvalidDomain { min: Time, max: Time },
    #[error("initial window {lower}..{upper} is empty or inverted")]
    InvalidWindow { lower: Time, upper: Time },
}

/// Work deferred to the end of the current operation to avoid re-entrant
/// mutation during an in-progress layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Deferred {
    RedistributeWidths { delta: i64 },
    RestoreReservedLast,
    RestoreCheckboxFirst,
}

/// The forecaster-facing temporal display core.
pub struct TemporalDisplay<S: NotificationSink> {
    viewport: Viewport,
    ruler: TimeRuler,
    table: TableCoordinator,
    scales: Vec<RowScale>,
    sink: S,
    surface: Box<dyn ViewSurface>,
    deferred: VecDeque<Deferred>,
}

impl<S: NotificationSink> TemporalDisplay<S> {
    pub fn new(
        domain: TimeDomain,
        lower: Time,
        upper: Time,
        current_time: Time,
        sink: S,
    ) -> Result<Self, ConfigError> {
        if domain.min >= domain.max {
            return Err(ConfigError::InvalidDomain {
                min: domain.min,
                max: domain.max,
            });
        }
        if lower > upper {
            return Err(ConfigError::InvalidWindow { lower, upper });
        }
        Ok(Self {
            viewport: Viewport::new(domain, lower, upper),
            ruler: TimeRuler::new(current_time, current_time),
            table: TableCoordinator::new(),
            scales: Vec::new(),
            sink,
            surface: Box::new(NullSurface),
            deferred: VecDeque::new(),
        })
    }

    /// Install the rendering backend.
    pub fn set_surface(&mut self, surface: Box<dyn ViewSurface>) {
        self.surface = surface;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn ruler(&self) -> &TimeRuler {
        &self.ruler
    }

    pub fn table(&self) -> &TableCoordinator {
        &self.table
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn event_scale(&self, event_id: &str) -> Option<&RowScale> {
        self.scales.iter().find(|s| s.event_id() == event_id)
    }

    // ------------------------------------------------------------------
    // Inbound: external session/presenter updates
    // ------------------------------------------------------------------

    /// Replace the event collection and column definitions, rebuilding all
    /// rows and row scales. Previously-selected identifiers survive when
    /// present in the new collection.
    pub fn set_events(&mut self, rows: Vec<EventRow>, columns: Vec<ColumnDef>) {
        self.table.set_events(rows, columns);
        self.scales = self
            .table
            .rows()
            .iter()
            .map(|r| RowScale::new(r.id.clone(), r.start, r.end))
            .collect();
        self.surface.table_rebuilt();
        self.drain_deferred();
    }

    /// Merge a partial event record, updating only the affected widgets.
    pub fn update_event(&mut self, update: EventUpdate) {
        let Some(outcome) = self.table.update_event(update.clone()) else {
            return;
        };
        if outcome.time_changed {
            if let Some((start, end)) = self.table.row(&update.id).map(|r| (r.start, r.end)) {
                if let Some(scale) = self.scales.iter_mut().find(|s| s.event_id() == update.id) {
                    scale.set_range(start, end);
                }
            }
        }
        if outcome.time_changed
            || outcome.checked_changed.is_some()
            || outcome.selection_changed
            || !outcome.cells_changed.is_empty()
        {
            self.surface.row_changed(&update.id);
        }
        self.drain_deferred();
    }

    /// New current time from the session clock.
    pub fn update_current_time(&mut self, time: Time) {
        self.ruler.set_current_time(time);
        self.surface.current_time_changed(time);
        self.drain_deferred();
    }

    /// New selected time from the session. If the value lands within one
    /// eighth of either visible edge the window recenters around it, and
    /// the adjusted window is reported back.
    pub fn update_selected_time(&mut self, time: Time) {
        if self.ruler.set_selected_time(time) {
            self.surface.selection_changed(&self.ruler.mode());
            if self.viewport.ensure_time_off_edges(time) {
                self.notify_visible_range();
            }
        }
        self.drain_deferred();
    }

    /// New selected time range from the session (range mode only).
    pub fn update_selected_time_range(&mut self, lower: Time, upper: Time) {
        if self.ruler.set_selected_range(TimeRange::new(lower, upper)) {
            self.surface.selection_changed(&self.ruler.mode());
        }
        self.drain_deferred();
    }

    /// Explicit visible window from the session. The committed (possibly
    /// clamp-shifted) window is reported back only if it differs from the
    /// previous one.
    pub fn update_visible_time_range(&mut self, lower: Time, upper: Time) {
        if self.viewport.set_range(lower, upper) {
            self.notify_visible_range();
        }
        self.drain_deferred();
    }

    /// New visible window width from the session; the left edge stays put.
    pub fn update_visible_time_delta(&mut self, width: Time) {
        if self.viewport.set_span(width) {
            self.notify_visible_range();
        }
        self.drain_deferred();
    }

    // ------------------------------------------------------------------
    // Gestures: viewport navigation
    // ------------------------------------------------------------------

    pub fn pan_backward(&mut self) {
        self.pan(-PAN_MULTIPLIER);
    }

    pub fn pan_forward(&mut self) {
        self.pan(PAN_MULTIPLIER);
    }

    pub fn page_backward(&mut self) {
        self.pan(-PAGE_MULTIPLIER);
    }

    pub fn page_forward(&mut self) {
        self.pan(PAGE_MULTIPLIER);
    }

    fn pan(&mut self, multiplier: f64) {
        if self.viewport.pan(multiplier) {
            self.notify_visible_range();
        }
        self.drain_deferred();
    }

    /// Recenter so the current time sits a quarter of the window from the
    /// left edge.
    pub fn show_current_time(&mut self) {
        if self.viewport.show_time_at_quarter(self.ruler.current_time()) {
            self.notify_visible_range();
        }
        self.drain_deferred();
    }

    pub fn can_zoom_in(&self) -> bool {
        self.viewport.can_zoom_in()
    }

    pub fn can_zoom_out(&self) -> bool {
        self.viewport.can_zoom_out()
    }

    pub fn zoom_in(&mut self) {
        if self.viewport.zoom_in(self.ruler.zoom_anchor()) {
            self.notify_visible_range();
        }
        self.drain_deferred();
    }

    pub fn zoom_out(&mut self) {
        if self.viewport.zoom_out(self.ruler.zoom_anchor()) {
            self.notify_visible_range();
        }
        self.drain_deferred();
    }

    // ------------------------------------------------------------------
    // Gestures: ruler selection
    // ------------------------------------------------------------------

    /// Switch between single-instant and range selection atomically. The
    /// bus hears either the newly established range or sentinel bounds for
    /// the dropped one.
    pub fn set_range_mode(&mut self, range_mode: bool, initial_span: Time) {
        match self.ruler.switch_mode(range_mode, initial_span) {
            ModeChange::Unchanged => {}
            ModeChange::RangeDropped => {
                self.sink.notify(Notification::SelectedTimeRangeChanged {
                    lower: RANGE_UNSET,
                    upper: RANGE_UNSET,
                });
                self.surface.selection_changed(&self.ruler.mode());
            }
            ModeChange::RangeEstablished(range) => {
                self.sink.notify(Notification::SelectedTimeRangeChanged {
                    lower: range.lower,
                    upper: range.upper,
                });
                self.surface.selection_changed(&self.ruler.mode());
            }
        }
        self.drain_deferred();
    }

    /// Drag of the free selected-time thumb (single mode).
    pub fn drag_selected_time(&mut self, raw: Time) {
        let domain = self.viewport.domain();
        if let Some(time) = self.ruler.drag_selected_time(raw, domain) {
            self.sink.notify(Notification::SelectedTimeChanged { time });
            self.surface.selection_changed(&self.ruler.mode());
        }
        self.drain_deferred();
    }

    /// Drag of the selected-range pair's lower thumb (range mode).
    pub fn drag_selected_range_start(&mut self, raw: Time) {
        let domain = self.viewport.domain();
        if let Some(range) = self.ruler.drag_range_start(raw, domain) {
            self.sink.notify(Notification::SelectedTimeRangeChanged {
                lower: range.lower,
                upper: range.upper,
            });
            self.surface.selection_changed(&self.ruler.mode());
        }
        self.drain_deferred();
    }

    /// Drag of the selected-range pair's upper thumb (range mode).
    pub fn drag_selected_range_end(&mut self, raw: Time) {
        let domain = self.viewport.domain();
        if let Some(range) = self.ruler.drag_range_end(raw, domain) {
            self.sink.notify(Notification::SelectedTimeRangeChanged {
                lower: range.lower,
                upper: range.upper,
            });
            self.surface.selection_changed(&self.ruler.mode());
        }
        self.drain_deferred();
    }

    // ------------------------------------------------------------------
    // Gestures: row scales
    // ------------------------------------------------------------------

    /// Drag of an event's start thumb on its row scale.
    pub fn drag_event_start(&mut self, event_id: &str, raw: Time) {
        self.drag_event_thumb(event_id, raw, true);
    }

    /// Drag of an event's end thumb on its row scale.
    pub fn drag_event_end(&mut self, event_id: &str, raw: Time) {
        self.drag_event_thumb(event_id, raw, false);
    }

    fn drag_event_thumb(&mut self, event_id: &str, raw: Time, start_thumb: bool) {
        let domain = self.viewport.domain();
        let Some(scale) = self.scales.iter_mut().find(|s| s.event_id() == event_id) else {
            warn!("scale drag for unknown event '{}' ignored", event_id);
            return;
        };
        let dragged = if start_thumb {
            scale.drag_start(raw, domain)
        } else {
            scale.drag_end(raw, domain)
        };
        if let Some(range) = dragged {
            self.table.set_event_times(event_id, range.lower, range.upper);
            self.surface.row_changed(event_id);
            self.sink.notify(Notification::EventTimeRangeChanged {
                event_id: event_id.to_string(),
                start: range.lower,
                end: range.upper,
            });
        }
        self.drain_deferred();
    }

    // ------------------------------------------------------------------
    // Gestures: table
    // ------------------------------------------------------------------

    /// A row checkbox was toggled.
    pub fn row_checked(&mut self, event_id: &str, checked: bool) {
        if self.table.set_checked(event_id, checked) {
            self.surface.row_changed(event_id);
            self.sink.notify(Notification::CheckBox {
                event_id: event_id.to_string(),
                checked,
            });
        }
        self.drain_deferred();
    }

    /// The live table selection changed.
    pub fn rows_selected(&mut self, ids: Vec<String>) {
        if self.table.set_selected_ids(&ids) {
            self.sink
                .notify(Notification::SelectedEventsChanged { event_ids: ids });
        }
        self.drain_deferred();
    }

    /// A column header was clicked for sorting.
    pub fn sort_clicked(&mut self, name: &str) {
        if self.table.sort_clicked(name) {
            self.surface.columns_changed();
            self.surface.table_rebuilt();
            self.notify_settings();
        }
        self.drain_deferred();
    }

    /// A column's visibility was toggled from the column menu.
    pub fn toggle_column(&mut self, name: &str) {
        if self.table.toggle_column(name) {
            self.surface.columns_changed();
            self.notify_settings();
        }
        self.drain_deferred();
    }

    /// A column finished resizing. Resizing the reserved time-scale column
    /// schedules a proportional redistribution of the delta across the
    /// other columns; that redistribution must not run inside the resize
    /// pass that triggered it.
    pub fn column_resized(&mut self, name: &str, width: u32) {
        let Some(old) = self.table.resize_column(name, width) else {
            warn!("resize of unknown column '{}' ignored", name);
            return;
        };
        if name == TIME_SCALE_COLUMN {
            let delta = width as i64 - old as i64;
            if delta != 0 {
                self.deferred
                    .push_back(Deferred::RedistributeWidths { delta: -delta });
            }
        } else if old != width {
            self.notify_settings();
        }
        self.drain_deferred();
    }

    /// Columns finished a drag reorder. A drag past the reserved column or
    /// one that displaces the checkbox column schedules a correction after
    /// the reorder pass completes.
    pub fn columns_reordered(&mut self, order: Vec<String>) {
        let outcome = self.table.reorder_columns(&order);
        if outcome.reserved_displaced {
            self.deferred.push_back(Deferred::RestoreReservedLast);
        }
        if outcome.checkbox_displaced {
            self.deferred.push_back(Deferred::RestoreCheckboxFirst);
        }
        if !outcome.reserved_displaced && !outcome.checkbox_displaced {
            self.surface.columns_changed();
            self.notify_settings();
        }
        self.drain_deferred();
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn notify_visible_range(&mut self) {
        let range = self.viewport.range();
        self.surface.visible_range_changed(range.lower, range.upper);
        self.sink.notify(Notification::VisibleTimeRangeChanged {
            lower: range.lower,
            upper: range.upper,
        });
    }

    fn notify_settings(&mut self) {
        match serde_json::to_value(self.table.settings()) {
            Ok(settings) => self
                .sink
                .notify(Notification::DynamicSettingChanged { settings }),
            Err(e) => warn!("failed to encode table settings: {}", e),
        }
    }

    /// Drain the deferred-work queue to exhaustion. Items may enqueue
    /// further items; everything completes before the public operation that
    /// scheduled the first item returns.
    fn drain_deferred(&mut self) {
        let mut changed = false;
        while let Some(item) = self.deferred.pop_front() {
            changed |= match item {
                Deferred::RedistributeWidths { delta } => {
                    self.table.redistribute_widths(delta);
                    true
                }
                Deferred::RestoreReservedLast => self.table.restore_reserved_last(),
                Deferred::RestoreCheckboxFirst => self.table.restore_checkbox_first(),
            };
        }
        if changed {
            self.surface.columns_changed();
            self.notify_settings();
        }
    }
}
