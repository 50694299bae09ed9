//! Typed event rows backing the table.

use std::collections::HashMap;

use crate::core::time::{format_time, Time};
use crate::table::column::ColumnType;

/// Error raised when a trusted record carries a malformed cell value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CellError {
    #[error("malformed number '{value}' for field '{field}'")]
    MalformedNumber { field: String, value: String },
    #[error("malformed date '{value}' for field '{field}'")]
    MalformedDate { field: String, value: String },
}

/// A dynamically-typed cell value, tagged by the owning column's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Number(i64),
    Date(Time),
}

impl CellValue {
    /// Parse a raw string per the column type. Record values come from a
    /// trusted internal format, so a parse failure propagates as an error
    /// rather than degrading the cell.
    pub fn parse(column_type: ColumnType, field: &str, raw: &str) -> Result<Self, CellError> {
        match column_type {
            ColumnType::Text => Ok(CellValue::Text(raw.to_string())),
            ColumnType::Number => raw
                .parse::<i64>()
                .map(CellValue::Number)
                .map_err(|_| CellError::MalformedNumber {
                    field: field.to_string(),
                    value: raw.to_string(),
                }),
            ColumnType::Date => raw
                .parse::<Time>()
                .map(CellValue::Date)
                .map_err(|_| CellError::MalformedDate {
                    field: field.to_string(),
                    value: raw.to_string(),
                }),
        }
    }

    /// Text shown in the table cell.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Date(t) => format_time(*t),
        }
    }
}

/// RGB display color for an event row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One hazard event as a table row.
///
/// Created when the external event list is parsed; mutated in place by
/// partial updates or row-scale drags; replaced wholesale when the list is
/// reset. `start <= end` is enforced by the caller.
#[derive(Debug, Clone)]
pub struct EventRow {
    pub id: String,
    pub start: Time,
    pub end: Time,
    pub checked: bool,
    pub selected: bool,
    pub color: Rgb,
    /// Column field identifier -> cell value.
    pub cells: HashMap<String, CellValue>,
}

impl EventRow {
    pub fn new(id: impl Into<String>, start: Time, end: Time) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            checked: false,
            selected: false,
            color: Rgb::default(),
            cells: HashMap::new(),
        }
    }

    pub fn with_cell(mut self, field: impl Into<String>, value: CellValue) -> Self {
        self.cells.insert(field.into(), value);
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}

/// A partial event record merged into a cached row by identifier.
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub id: String,
    pub start: Option<Time>,
    pub end: Option<Time>,
    pub checked: Option<bool>,
    pub selected: Option<bool>,
    pub color: Option<Rgb>,
    pub cells: HashMap<String, CellValue>,
}

impl EventUpdate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn times(mut self, start: Time, end: Time) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn cell(mut self, field: impl Into<String>, value: CellValue) -> Self {
        self.cells.insert(field.into(), value);
        self
    }
}
