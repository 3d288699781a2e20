//! Table tool definitions.
//!
//! Tools that create tables and edit their cells and rows.

mod add;
mod add_row;
mod create;
mod fill_cell;
mod update_cell;
mod with_data;

pub use add::AddTableTool;
pub use add_row::AddTableRowTool;
pub use create::CreateTableTool;
pub use fill_cell::FillCellTool;
pub use update_cell::UpdateCellTool;
pub use with_data::TableWithDataTool;
