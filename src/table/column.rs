//! Column definitions for the event table.

use serde::{Deserialize, Serialize};

/// Name of the reserved rightmost column hosting each row's time scale.
/// It is always present and always last.
pub const TIME_SCALE_COLUMN: &str = "Time Scale";

/// How cells in a column are typed, which picks the sort comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Text,
    Number,
    Date,
}

impl ColumnType {
    /// Parse a type tag from an external column definition. Unknown tags
    /// yield `None`; the caller logs and installs no comparator.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(ColumnType::Text),
            "number" => Some(ColumnType::Number),
            "date" => Some(ColumnType::Date),
            _ => None,
        }
    }
}

/// Tri-state sort direction. At most one column in a table holds
/// `Ascending` or `Descending` at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_active(&self) -> bool {
        !matches!(self, SortDirection::None)
    }
}

/// One column of the event table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Display name, unique within the table.
    pub name: String,
    /// Backing field identifier in the event records.
    pub field: String,
    /// Cell type; `None` when the external definition carried an
    /// unrecognized tag, in which case sorting this column is a no-op.
    pub column_type: Option<ColumnType>,
    pub width: u32,
    pub sort: SortDirection,
    /// Field whose value supplies hover hint text for cells of this column.
    pub hint_field: Option<String>,
    /// Optional special-menu filter identifier.
    pub filter_menu: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, field: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            column_type: Some(column_type),
            width: 75,
            sort: SortDirection::None,
            hint_field: None,
            filter_menu: None,
        }
    }

    /// The reserved time-scale column; no backing field, never sorted.
    pub fn time_scale() -> Self {
        Self {
            name: TIME_SCALE_COLUMN.to_string(),
            field: String::new(),
            column_type: None,
            width: 300,
            sort: SortDirection::None,
            hint_field: None,
            filter_menu: None,
        }
    }

    pub fn is_time_scale(&self) -> bool {
        self.name == TIME_SCALE_COLUMN
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_hint_field(mut self, field: impl Into<String>) -> Self {
        self.hint_field = Some(field.into());
        self
    }
}
