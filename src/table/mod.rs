//! The event table: column definitions, typed rows, and the coordinator
//! that owns them.

pub mod column;
pub mod coordinator;
pub mod row;

pub use column::{ColumnDef, ColumnType, SortDirection, TIME_SCALE_COLUMN};
pub use coordinator::{
    ColumnSetting, ReorderOutcome, TableCoordinator, TableSettings, UpdateOutcome, NOT_APPLICABLE,
};
pub use row::{CellError, CellValue, EventRow, EventUpdate, Rgb};
