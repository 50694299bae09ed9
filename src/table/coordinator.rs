//! The event table coordinator.
//!
//! Owns the column definitions and the event rows: set/replace of the whole
//! collection, partial merges, column visibility/order/width, tri-state
//! stable sort, and checkbox/selection bookkeeping. The reserved rightmost
//! column hosts the per-row time scale and is kept last; the leftmost
//! column carries the row checkboxes and is kept first.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::table::column::{ColumnDef, ColumnType, SortDirection, TIME_SCALE_COLUMN};
use crate::table::row::{CellValue, EventRow, EventUpdate};

/// Placeholder text for a cell whose value or column definition is missing.
pub const NOT_APPLICABLE: &str = "N/A";

/// What a partial event merge actually changed, so the display can update
/// only the affected widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub time_changed: bool,
    pub checked_changed: Option<bool>,
    pub selection_changed: bool,
    pub cells_changed: Vec<String>,
}

/// Which invariants a column reorder left violated; the display schedules a
/// deferred correction for each rather than mutating mid-operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderOutcome {
    /// A column was dragged past the reserved time-scale column.
    pub reserved_displaced: bool,
    /// The checkbox-carrying column is no longer leftmost.
    pub checkbox_displaced: bool,
}

/// Serializable snapshot of the user-adjustable column settings, sent out
/// as the dynamic-setting payload and restorable via `apply_settings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSettings {
    /// Visible columns in display order, with current widths.
    pub columns: Vec<ColumnSetting>,
    pub sort_column: Option<String>,
    pub sort_direction: SortDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSetting {
    pub name: String,
    pub width: u32,
}

#[derive(Debug, Default)]
pub struct TableCoordinator {
    /// Visible columns in display order; the time-scale column is last.
    columns: Vec<ColumnDef>,
    /// Defined columns currently toggled off, kept so they can come back.
    hidden: Vec<ColumnDef>,
    rows: Vec<EventRow>,
    /// Name of the column designated to carry the row checkboxes.
    checkbox_column: Option<String>,
    column_name_by_field: HashMap<String, String>,
}

impl TableCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn rows(&self) -> &[EventRow] {
        &self.rows
    }

    pub fn row(&self, event_id: &str) -> Option<&EventRow> {
        self.rows.iter().find(|r| r.id == event_id)
    }

    fn row_mut(&mut self, event_id: &str) -> Option<&mut EventRow> {
        self.rows.iter_mut().find(|r| r.id == event_id)
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.id.clone())
            .collect()
    }

    /// Replace the whole event collection and column set.
    ///
    /// Rebuilds the field-to-name map, re-applies the active sort, appends
    /// the reserved time-scale column if the definitions did not carry it,
    /// and preserves previously-selected identifiers that survive into the
    /// new collection.
    pub fn set_events(&mut self, rows: Vec<EventRow>, mut columns: Vec<ColumnDef>) {
        let previously_selected: HashSet<String> = self
            .rows
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.id.clone())
            .collect();

        if let Some(pos) = columns.iter().position(|c| c.is_time_scale()) {
            let scale = columns.remove(pos);
            columns.push(scale);
        } else {
            columns.push(ColumnDef::time_scale());
        }
        self.checkbox_column = columns.first().filter(|c| !c.is_time_scale()).map(|c| c.name.clone());
        self.column_name_by_field = columns
            .iter()
            .filter(|c| !c.is_time_scale())
            .map(|c| (c.field.clone(), c.name.clone()))
            .collect();
        for hidden in &self.hidden {
            self.column_name_by_field
                .insert(hidden.field.clone(), hidden.name.clone());
        }
        self.columns = columns;

        self.rows = rows;
        for row in &mut self.rows {
            if previously_selected.contains(&row.id) {
                row.selected = true;
            }
            for field in row.cells.keys() {
                if !self.column_name_by_field.contains_key(field) {
                    warn!("event {} references undefined column field '{}'", row.id, field);
                }
            }
        }

        if let Some(active) = self.active_sort_column() {
            self.sort_rows(&active);
        }
    }

    /// Merge a partial event record into its cached row by identifier.
    /// Returns `None` (with a diagnostic) if no row matches.
    pub fn update_event(&mut self, update: EventUpdate) -> Option<UpdateOutcome> {
        for field in update.cells.keys() {
            if !self.column_name_by_field.contains_key(field) {
                warn!("event {} references undefined column field '{}'", update.id, field);
            }
        }
        let Some(row) = self.row_mut(&update.id) else {
            warn!("update for unknown event '{}' ignored", update.id);
            return None;
        };

        let mut outcome = UpdateOutcome::default();
        if let Some(start) = update.start {
            if row.start != start {
                row.start = start;
                outcome.time_changed = true;
            }
        }
        if let Some(end) = update.end {
            if row.end != end {
                row.end = end;
                outcome.time_changed = true;
            }
        }
        if let Some(checked) = update.checked {
            if row.checked != checked {
                row.checked = checked;
                outcome.checked_changed = Some(checked);
            }
        }
        if let Some(selected) = update.selected {
            if row.selected != selected {
                row.selected = selected;
                outcome.selection_changed = true;
            }
        }
        if let Some(color) = update.color {
            row.color = color;
        }
        for (field, value) in update.cells {
            if row.cells.get(&field) != Some(&value) {
                row.cells.insert(field.clone(), value);
                outcome.cells_changed.push(field);
            }
        }
        Some(outcome)
    }

    /// Text for one cell. A missing column definition is logged and the
    /// cell degrades to the not-applicable placeholder, as does a missing
    /// value.
    pub fn cell_text(&self, event_id: &str, field: &str) -> String {
        if !self.column_name_by_field.contains_key(field) {
            warn!("no column definition for field '{}'", field);
            return NOT_APPLICABLE.to_string();
        }
        self.row(event_id)
            .and_then(|row| row.cells.get(field))
            .map(|value| value.display_text())
            .unwrap_or_else(|| NOT_APPLICABLE.to_string())
    }

    /// Hover hint for a cell, looked up through the column's hint field.
    pub fn hint_text(&self, event_id: &str, column_name: &str) -> Option<String> {
        let column = self.columns.iter().find(|c| c.name == column_name)?;
        let hint_field = column.hint_field.as_ref()?;
        let row = self.row(event_id)?;
        row.cells.get(hint_field).map(|v| v.display_text())
    }

    /// Set one row's checked flag. Returns true if the flag changed.
    pub fn set_checked(&mut self, event_id: &str, checked: bool) -> bool {
        match self.row_mut(event_id) {
            Some(row) if row.checked != checked => {
                row.checked = checked;
                true
            }
            _ => false,
        }
    }

    /// Replace the live selection with exactly `ids`. Returns true if any
    /// row's selected flag changed.
    pub fn set_selected_ids(&mut self, ids: &[String]) -> bool {
        let wanted: HashSet<&String> = ids.iter().collect();
        let mut changed = false;
        for row in &mut self.rows {
            let selected = wanted.contains(&row.id);
            if row.selected != selected {
                row.selected = selected;
                changed = true;
            }
        }
        changed
    }

    /// Update a row's cached start/end after a row-scale drag.
    pub fn set_event_times(&mut self, event_id: &str, start: i64, end: i64) -> bool {
        match self.row_mut(event_id) {
            Some(row) if row.start != start || row.end != end => {
                row.start = start;
                row.end = end;
                true
            }
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Column operations
    // ------------------------------------------------------------------

    /// Show or hide a column by name, keeping the reserved time-scale
    /// column last. Hiding the active sort column deactivates the sort;
    /// showing a column that carries an active sort tag re-sorts.
    /// Returns true if visibility changed.
    pub fn toggle_column(&mut self, name: &str) -> bool {
        if name == TIME_SCALE_COLUMN {
            return false;
        }
        if let Some(pos) = self.columns.iter().position(|c| c.name == name) {
            let mut removed = self.columns.remove(pos);
            if removed.sort.is_active() {
                removed.sort = SortDirection::None;
            }
            self.hidden.push(removed);
            true
        } else if let Some(pos) = self.hidden.iter().position(|c| c.name == name) {
            let def = self.hidden.remove(pos);
            let resort = def.sort.is_active();
            let name = def.name.clone();
            self.column_name_by_field.insert(def.field.clone(), name.clone());
            // Insert before the reserved last column
            let at = self.columns.len().saturating_sub(1);
            self.columns.insert(at, def);
            if resort {
                self.sort_rows(&name);
            }
            true
        } else {
            warn!("toggle for unknown column '{}' ignored", name);
            false
        }
    }

    /// Persist a column's new width. Returns the previous width if the
    /// column exists.
    pub fn resize_column(&mut self, name: &str, width: u32) -> Option<u32> {
        let column = self.columns.iter_mut().find(|c| c.name == name)?;
        let old = column.width;
        column.width = width;
        Some(old)
    }

    /// Redistribute a width delta across the non-reserved visible columns,
    /// proportionally to each column's current width. The largest columns
    /// absorb the rounding remainder first. The sum of the non-reserved
    /// widths changes by exactly `delta`.
    pub fn redistribute_widths(&mut self, delta: i64) {
        let indices: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_time_scale())
            .map(|(i, _)| i)
            .collect();
        let total: i64 = indices.iter().map(|&i| self.columns[i].width as i64).sum();
        if total == 0 || indices.is_empty() {
            return;
        }

        let mut shares: Vec<(usize, i64)> = indices
            .iter()
            .map(|&i| (i, delta * self.columns[i].width as i64 / total))
            .collect();
        let mut remainder = delta - shares.iter().map(|(_, s)| s).sum::<i64>();

        // Widest columns take the leftover units first
        shares.sort_by_key(|&(i, _)| std::cmp::Reverse(self.columns[i].width));
        let step = remainder.signum();
        for share in shares.iter_mut() {
            if remainder == 0 {
                break;
            }
            share.1 += step;
            remainder -= step;
        }

        for (i, share) in shares {
            let width = (self.columns[i].width as i64 + share).max(0);
            self.columns[i].width = width as u32;
        }
    }

    /// Apply a user column reorder. `order` must be a permutation of the
    /// current visible column names; anything else is logged and ignored.
    ///
    /// The new order is accepted as-is; violations of the reserved-last and
    /// checkbox-first invariants are reported in the outcome so the caller
    /// can schedule corrections after the in-progress pass completes.
    pub fn reorder_columns(&mut self, order: &[String]) -> ReorderOutcome {
        let current: HashSet<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        let requested: HashSet<&str> = order.iter().map(|s| s.as_str()).collect();
        if current != requested || order.len() != self.columns.len() {
            warn!("column reorder is not a permutation of the visible columns; ignored");
            return ReorderOutcome::default();
        }

        let mut reordered = Vec::with_capacity(order.len());
        for name in order {
            if let Some(pos) = self.columns.iter().position(|c| &c.name == name) {
                reordered.push(self.columns.remove(pos));
            }
        }
        self.columns = reordered;

        ReorderOutcome {
            reserved_displaced: !self
                .columns
                .last()
                .map(|c| c.is_time_scale())
                .unwrap_or(true),
            checkbox_displaced: match (&self.checkbox_column, self.columns.first()) {
                (Some(wanted), Some(first)) => &first.name != wanted,
                _ => false,
            },
        }
    }

    /// Deferred correction: move the reserved time-scale column back to the
    /// last position (any column dragged past it lands before it again).
    pub fn restore_reserved_last(&mut self) -> bool {
        let Some(pos) = self.columns.iter().position(|c| c.is_time_scale()) else {
            return false;
        };
        if pos == self.columns.len() - 1 {
            return false;
        }
        let scale = self.columns.remove(pos);
        self.columns.push(scale);
        true
    }

    /// Deferred correction: recreate the checkbox-carrying column in
    /// position 0.
    pub fn restore_checkbox_first(&mut self) -> bool {
        let Some(wanted) = self.checkbox_column.clone() else {
            return false;
        };
        let Some(pos) = self.columns.iter().position(|c| c.name == wanted) else {
            return false;
        };
        if pos == 0 {
            return false;
        }
        let column = self.columns.remove(pos);
        self.columns.insert(0, column);
        true
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    fn active_sort_column(&self) -> Option<String> {
        self.columns
            .iter()
            .find(|c| c.sort.is_active())
            .map(|c| c.name.clone())
    }

    /// Handle a header click on `name`: a non-active column sorts
    /// ascending, the active column toggles direction. Returns true if the
    /// click resulted in a sort.
    pub fn sort_clicked(&mut self, name: &str) -> bool {
        let Some(column) = self.columns.iter().find(|c| c.name == name) else {
            warn!("sort click on unknown column '{}' ignored", name);
            return false;
        };
        if column.is_time_scale() {
            return false;
        }
        if column.column_type.is_none() {
            warn!("column '{}' has an unrecognized type; sort disabled", name);
            return false;
        }

        let next = match column.sort {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
            SortDirection::None => SortDirection::Ascending,
        };
        for c in &mut self.columns {
            c.sort = if c.name == name { next } else { SortDirection::None };
        }
        self.sort_rows(name);
        true
    }

    /// Stable sort of the rows by the named column's comparator. Ties keep
    /// their prior relative order in both directions.
    fn sort_rows(&mut self, name: &str) {
        let Some(column) = self.columns.iter().find(|c| c.name == name) else {
            return;
        };
        let Some(column_type) = column.column_type else {
            warn!("column '{}' has an unrecognized type; sort disabled", name);
            return;
        };
        let field = column.field.clone();
        let descending = column.sort == SortDirection::Descending;

        self.rows.sort_by(|a, b| {
            let ordering = compare_cells(a.cells.get(&field), b.cells.get(&field), column_type);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Snapshot of column order, widths, and sort state.
    pub fn settings(&self) -> TableSettings {
        let (sort_column, sort_direction) = self
            .columns
            .iter()
            .find(|c| c.sort.is_active())
            .map(|c| (Some(c.name.clone()), c.sort))
            .unwrap_or((None, SortDirection::None));
        TableSettings {
            columns: self
                .columns
                .iter()
                .map(|c| ColumnSetting {
                    name: c.name.clone(),
                    width: c.width,
                })
                .collect(),
            sort_column,
            sort_direction,
        }
    }

    /// Restore a previously captured settings snapshot: column order,
    /// widths, and sort state. Columns unknown to the snapshot keep their
    /// current position at the end (before the reserved column).
    pub fn apply_settings(&mut self, settings: &TableSettings) {
        for setting in &settings.columns {
            if let Some(column) = self.columns.iter_mut().find(|c| c.name == setting.name) {
                column.width = setting.width;
            }
        }
        let order: Vec<String> = settings
            .columns
            .iter()
            .map(|s| s.name.clone())
            .filter(|name| self.columns.iter().any(|c| &c.name == name))
            .collect();
        if order.len() == self.columns.len() {
            self.reorder_columns(&order);
        }
        self.restore_reserved_last();
        if let Some(name) = &settings.sort_column {
            let direction = settings.sort_direction;
            for c in &mut self.columns {
                c.sort = if &c.name == name { direction } else { SortDirection::None };
            }
            if direction.is_active() {
                let name = name.clone();
                self.sort_rows(&name);
            }
        }
    }
}

/// Compare two cells under a column type. Missing values order before
/// present ones; values that cannot produce a key compare as missing.
fn compare_cells(a: Option<&CellValue>, b: Option<&CellValue>, ty: ColumnType) -> Ordering {
    match ty {
        ColumnType::Text => text_key(a).cmp(&text_key(b)),
        ColumnType::Number | ColumnType::Date => numeric_key(a).cmp(&numeric_key(b)),
    }
}

fn text_key(cell: Option<&CellValue>) -> Option<String> {
    cell.map(|v| v.display_text().to_lowercase())
}

fn numeric_key(cell: Option<&CellValue>) -> Option<i64> {
    match cell {
        Some(CellValue::Number(n)) => Some(*n),
        Some(CellValue::Date(t)) => Some(*t),
        Some(CellValue::Text(s)) => s.parse().ok(),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("Event ID", "id", ColumnType::Text).with_width(100),
            ColumnDef::new("Hazard", "hazard", ColumnType::Text)
                .with_width(60)
                .with_hint_field("headline"),
            ColumnDef::new("End Time", "endTime", ColumnType::Date).with_width(140),
            ColumnDef::new("Severity", "severity", ColumnType::Number).with_width(40),
        ]
    }

    fn rows() -> Vec<EventRow> {
        vec![
            EventRow::new("A", 1000, 2000)
                .with_cell("endTime", CellValue::Date(2000))
                .with_cell("hazard", CellValue::Text("FF.W".into()))
                .with_cell("severity", CellValue::Number(2)),
            EventRow::new("B", 1000, 1500)
                .with_cell("endTime", CellValue::Date(1500))
                .with_cell("hazard", CellValue::Text("TO.A".into()))
                .with_cell("severity", CellValue::Number(2)),
        ]
    }

    fn coordinator() -> TableCoordinator {
        let mut table = TableCoordinator::new();
        table.set_events(rows(), columns());
        table
    }

    fn names(table: &TableCoordinator) -> Vec<&str> {
        table.columns().iter().map(|c| c.name.as_str()).collect()
    }

    fn row_ids(table: &TableCoordinator) -> Vec<&str> {
        table.rows().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_reserved_column_appended_last() {
        let table = coordinator();
        assert_eq!(
            names(&table),
            vec!["Event ID", "Hazard", "End Time", "Severity", TIME_SCALE_COLUMN]
        );
    }

    #[test]
    fn test_sort_by_end_time_both_directions() {
        let mut table = coordinator();
        assert!(table.sort_clicked("End Time"));
        assert_eq!(row_ids(&table), vec!["B", "A"]);
        // Second click on the active column toggles to descending
        assert!(table.sort_clicked("End Time"));
        assert_eq!(row_ids(&table), vec!["A", "B"]);
        // Third click toggles back
        assert!(table.sort_clicked("End Time"));
        assert_eq!(row_ids(&table), vec!["B", "A"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut table = TableCoordinator::new();
        let mut many = Vec::new();
        // Severity ties everywhere; ids give the original order
        for (id, severity) in [("e1", 2), ("e2", 1), ("e3", 2), ("e4", 1), ("e5", 2)] {
            many.push(
                EventRow::new(id, 0, 100).with_cell("severity", CellValue::Number(severity)),
            );
        }
        table.set_events(many, columns());
        table.sort_clicked("Severity");
        assert_eq!(row_ids(&table), vec!["e2", "e4", "e1", "e3", "e5"]);
        // Descending keeps the tied runs in prior relative order too
        table.sort_clicked("Severity");
        assert_eq!(row_ids(&table), vec!["e1", "e3", "e5", "e2", "e4"]);
    }

    #[test]
    fn test_at_most_one_active_sort_column() {
        let mut table = coordinator();
        table.sort_clicked("End Time");
        table.sort_clicked("Hazard");
        let active: Vec<&str> = table
            .columns()
            .iter()
            .filter(|c| c.sort.is_active())
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(active, vec!["Hazard"]);
    }

    #[test]
    fn test_unknown_column_type_disables_sort() {
        let mut cols = columns();
        cols.push(ColumnDef {
            name: "Phen".into(),
            field: "phen".into(),
            column_type: ColumnType::from_tag("phensig"),
            width: 50,
            sort: SortDirection::None,
            hint_field: None,
            filter_menu: None,
        });
        let mut table = TableCoordinator::new();
        table.set_events(rows(), cols);
        let before: Vec<String> = row_ids(&table).iter().map(|s| s.to_string()).collect();
        assert!(!table.sort_clicked("Phen"));
        assert_eq!(row_ids(&table), before);
    }

    #[test]
    fn test_selection_preserved_across_rebuild() {
        let mut table = coordinator();
        table.set_selected_ids(&["A".to_string()]);
        // New collection still contains A plus a newcomer
        let mut new_rows = rows();
        new_rows.push(EventRow::new("C", 0, 10));
        table.set_events(new_rows, columns());
        assert_eq!(table.selected_ids(), vec!["A".to_string()]);
    }

    #[test]
    fn test_partial_update_merges_in_place() {
        let mut table = coordinator();
        let outcome = table
            .update_event(
                EventUpdate::new("A")
                    .times(1200, 2400)
                    .checked(true)
                    .cell("severity", CellValue::Number(3)),
            )
            .unwrap();
        assert!(outcome.time_changed);
        assert_eq!(outcome.checked_changed, Some(true));
        assert_eq!(outcome.cells_changed, vec!["severity".to_string()]);
        let row = table.row("A").unwrap();
        assert_eq!((row.start, row.end), (1200, 2400));
        assert!(row.checked);
    }

    #[test]
    fn test_update_unknown_event_ignored() {
        let mut table = coordinator();
        assert!(table.update_event(EventUpdate::new("nope")).is_none());
    }

    #[test]
    fn test_cell_text_missing_definition_degrades() {
        let table = coordinator();
        assert_eq!(table.cell_text("A", "unknownField"), NOT_APPLICABLE);
        // Known column but no value for this row
        assert_eq!(table.cell_text("B", "id"), NOT_APPLICABLE);
        assert_eq!(table.cell_text("A", "severity"), "2");
    }

    #[test]
    fn test_hint_text_via_hint_field() {
        let mut table = TableCoordinator::new();
        let rows = vec![EventRow::new("A", 0, 10)
            .with_cell("hazard", CellValue::Text("FF.W".into()))
            .with_cell("headline", CellValue::Text("Flash Flood Warning".into()))];
        table.set_events(rows, columns());
        assert_eq!(
            table.hint_text("A", "Hazard"),
            Some("Flash Flood Warning".to_string())
        );
        assert_eq!(table.hint_text("A", "Event ID"), None);
    }

    #[test]
    fn test_toggle_column_inserts_before_reserved() {
        let mut table = coordinator();
        assert!(table.toggle_column("Hazard"));
        assert_eq!(
            names(&table),
            vec!["Event ID", "End Time", "Severity", TIME_SCALE_COLUMN]
        );
        assert!(table.toggle_column("Hazard"));
        assert_eq!(
            names(&table),
            vec!["Event ID", "End Time", "Severity", "Hazard", TIME_SCALE_COLUMN]
        );
    }

    #[test]
    fn test_hiding_active_sort_column_deactivates_sort() {
        let mut table = coordinator();
        table.sort_clicked("End Time");
        table.toggle_column("End Time");
        assert!(table.columns().iter().all(|c| !c.sort.is_active()));
    }

    #[test]
    fn test_redistribute_widths_preserves_total_plus_delta() {
        let mut table = coordinator();
        let before: i64 = table
            .columns()
            .iter()
            .filter(|c| !c.is_time_scale())
            .map(|c| c.width as i64)
            .sum();
        table.redistribute_widths(-37);
        let after: i64 = table
            .columns()
            .iter()
            .filter(|c| !c.is_time_scale())
            .map(|c| c.width as i64)
            .sum();
        assert_eq!(after, before - 37);
        table.redistribute_widths(37);
        let restored: i64 = table
            .columns()
            .iter()
            .filter(|c| !c.is_time_scale())
            .map(|c| c.width as i64)
            .sum();
        assert_eq!(restored, before);
    }

    #[test]
    fn test_redistribute_is_proportional() {
        let mut table = coordinator();
        // Widths 100, 60, 140, 40 (total 340): the 140 column must absorb
        // the most, the 40 column the least.
        table.redistribute_widths(-34);
        let widths: HashMap<&str, u32> = table
            .columns()
            .iter()
            .map(|c| (c.name.as_str(), c.width))
            .collect();
        assert!(widths["End Time"] < 140 && 140 - widths["End Time"] >= 10);
        assert!(40 - widths["Severity"] <= 4);
    }

    #[test]
    fn test_reorder_accepts_permutation() {
        let mut table = coordinator();
        let order: Vec<String> = ["Severity", "Event ID", "Hazard", "End Time", TIME_SCALE_COLUMN]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let outcome = table.reorder_columns(&order);
        assert!(!outcome.reserved_displaced);
        // Checkbox column ("Event ID") is no longer first
        assert!(outcome.checkbox_displaced);
        assert_eq!(
            names(&table),
            vec!["Severity", "Event ID", "Hazard", "End Time", TIME_SCALE_COLUMN]
        );
    }

    #[test]
    fn test_reorder_past_reserved_is_flagged_and_corrected() {
        let mut table = coordinator();
        let order: Vec<String> = ["Event ID", "Hazard", "Severity", TIME_SCALE_COLUMN, "End Time"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let outcome = table.reorder_columns(&order);
        assert!(outcome.reserved_displaced);
        assert!(table.restore_reserved_last());
        assert_eq!(
            names(&table),
            vec!["Event ID", "Hazard", "Severity", "End Time", TIME_SCALE_COLUMN]
        );
    }

    #[test]
    fn test_restore_checkbox_first() {
        let mut table = coordinator();
        let order: Vec<String> = ["Hazard", "Event ID", "End Time", "Severity", TIME_SCALE_COLUMN]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let outcome = table.reorder_columns(&order);
        assert!(outcome.checkbox_displaced);
        assert!(table.restore_checkbox_first());
        assert_eq!(names(&table)[0], "Event ID");
    }

    #[test]
    fn test_invalid_reorder_ignored() {
        let mut table = coordinator();
        let before = names(&table).join(",");
        let outcome = table.reorder_columns(&["Hazard".to_string()]);
        assert_eq!(outcome, ReorderOutcome::default());
        assert_eq!(names(&table).join(","), before);
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut table = coordinator();
        table.sort_clicked("End Time");
        table.resize_column("Hazard", 99);
        let settings = table.settings();
        assert_eq!(settings.sort_column.as_deref(), Some("End Time"));
        assert_eq!(settings.sort_direction, SortDirection::Ascending);

        // A fresh coordinator restored from the snapshot matches
        let mut fresh = coordinator();
        fresh.apply_settings(&settings);
        assert_eq!(fresh.settings(), settings);
        assert_eq!(row_ids(&fresh), vec!["B", "A"]);
    }

    #[test]
    fn test_settings_serialize_to_json() {
        let table = coordinator();
        let blob = serde_json::to_value(table.settings()).unwrap();
        assert!(blob.get("columns").is_some());
        let restored: TableSettings = serde_json::from_value(blob).unwrap();
        assert_eq!(restored, table.settings());
    }
}
