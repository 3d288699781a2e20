//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod document;
pub mod prompt;
pub mod resource;
pub mod table;

pub use document::{
    AddHeadingTool, AddPageBreakTool, AddParagraphTool, AddPictureTool, AddRunTool,
    AddSectionTool, CreateDocumentTool, OpenDocumentTool, SaveFileTool, SetColumnsTool,
    UpdateParagraphTool,
};
pub use prompt::{
    DeletePromptTool, GetPromptTool, ListPromptsTool, RenderPromptTool, SavePromptTool,
};
pub use resource::{DeleteResourceTool, GetResourceTool, ListResourcesTool, SaveResourceTool};
pub use table::{
    AddTableRowTool, AddTableTool, CreateTableTool, FillCellTool, TableWithDataTool,
    UpdateCellTool,
};
