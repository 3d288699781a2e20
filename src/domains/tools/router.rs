//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route over the shared state; this
//! module only assembles them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::AppState;

use super::definitions::{
    AddHeadingTool, AddPageBreakTool, AddParagraphTool, AddPictureTool, AddRunTool,
    AddSectionTool, AddTableRowTool, AddTableTool, CreateDocumentTool, CreateTableTool,
    DeletePromptTool, DeleteResourceTool, FillCellTool, GetPromptTool, GetResourceTool,
    ListPromptsTool, ListResourcesTool, OpenDocumentTool, RenderPromptTool, SaveFileTool,
    SavePromptTool, SaveResourceTool, SetColumnsTool, TableWithDataTool, UpdateCellTool,
    UpdateParagraphTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(state: Arc<AppState>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CreateDocumentTool::create_route(state.clone()))
        .with_route(OpenDocumentTool::create_route(state.clone()))
        .with_route(SaveFileTool::create_route(state.clone()))
        .with_route(AddHeadingTool::create_route(state.clone()))
        .with_route(AddParagraphTool::create_route(state.clone()))
        .with_route(UpdateParagraphTool::create_route(state.clone()))
        .with_route(AddRunTool::create_route(state.clone()))
        .with_route(AddPageBreakTool::create_route(state.clone()))
        .with_route(AddSectionTool::create_route(state.clone()))
        .with_route(SetColumnsTool::create_route(state.clone()))
        .with_route(AddPictureTool::create_route(state.clone()))
        .with_route(AddTableTool::create_route(state.clone()))
        .with_route(CreateTableTool::create_route(state.clone()))
        .with_route(UpdateCellTool::create_route(state.clone()))
        .with_route(FillCellTool::create_route(state.clone()))
        .with_route(AddTableRowTool::create_route(state.clone()))
        .with_route(TableWithDataTool::create_route(state.clone()))
        .with_route(SaveResourceTool::create_route(state.clone()))
        .with_route(GetResourceTool::create_route(state.clone()))
        .with_route(ListResourcesTool::create_route(state.clone()))
        .with_route(DeleteResourceTool::create_route(state.clone()))
        .with_route(SavePromptTool::create_route(state.clone()))
        .with_route(GetPromptTool::create_route(state.clone()))
        .with_route(ListPromptsTool::create_route(state.clone()))
        .with_route(DeletePromptTool::create_route(state.clone()))
        .with_route(RenderPromptTool::create_route(state))
}
