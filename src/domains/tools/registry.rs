//! Tool Registry - central listing of all tools.
//!
//! The registry is the single source of truth for tool metadata; the router
//! test checks it stays in sync with the routes.

use rmcp::model::Tool;

use super::definitions::{
    AddHeadingTool, AddPageBreakTool, AddParagraphTool, AddPictureTool, AddRunTool,
    AddSectionTool, AddTableRowTool, AddTableTool, CreateDocumentTool, CreateTableTool,
    DeletePromptTool, DeleteResourceTool, FillCellTool, GetPromptTool, GetResourceTool,
    ListPromptsTool, ListResourcesTool, OpenDocumentTool, RenderPromptTool, SaveFileTool,
    SavePromptTool, SaveResourceTool, SetColumnsTool, TableWithDataTool, UpdateCellTool,
    UpdateParagraphTool,
};

/// Tool registry - lists every available tool.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            CreateDocumentTool::NAME,
            OpenDocumentTool::NAME,
            SaveFileTool::NAME,
            AddHeadingTool::NAME,
            AddParagraphTool::NAME,
            UpdateParagraphTool::NAME,
            AddRunTool::NAME,
            AddPageBreakTool::NAME,
            AddSectionTool::NAME,
            SetColumnsTool::NAME,
            AddPictureTool::NAME,
            AddTableTool::NAME,
            CreateTableTool::NAME,
            UpdateCellTool::NAME,
            FillCellTool::NAME,
            AddTableRowTool::NAME,
            TableWithDataTool::NAME,
            SaveResourceTool::NAME,
            GetResourceTool::NAME,
            ListResourcesTool::NAME,
            DeleteResourceTool::NAME,
            SavePromptTool::NAME,
            GetPromptTool::NAME,
            ListPromptsTool::NAME,
            DeletePromptTool::NAME,
            RenderPromptTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CreateDocumentTool::to_tool(),
            OpenDocumentTool::to_tool(),
            SaveFileTool::to_tool(),
            AddHeadingTool::to_tool(),
            AddParagraphTool::to_tool(),
            UpdateParagraphTool::to_tool(),
            AddRunTool::to_tool(),
            AddPageBreakTool::to_tool(),
            AddSectionTool::to_tool(),
            SetColumnsTool::to_tool(),
            AddPictureTool::to_tool(),
            AddTableTool::to_tool(),
            CreateTableTool::to_tool(),
            UpdateCellTool::to_tool(),
            FillCellTool::to_tool(),
            AddTableRowTool::to_tool(),
            TableWithDataTool::to_tool(),
            SaveResourceTool::to_tool(),
            GetResourceTool::to_tool(),
            ListResourcesTool::to_tool(),
            DeleteResourceTool::to_tool(),
            SavePromptTool::to_tool(),
            GetPromptTool::to_tool(),
            ListPromptsTool::to_tool(),
            DeletePromptTool::to_tool(),
            RenderPromptTool::to_tool(),
        ]
    }
}
