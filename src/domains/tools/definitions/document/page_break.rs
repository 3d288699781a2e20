//! Page-break tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::success_result;
use crate::core::AppState;

/// Parameters for the page-break tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PageBreakParams {}

/// Page-break tool - inserts a manual page break.
pub struct AddPageBreakTool;

impl AddPageBreakTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_page_break";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Insert a page break at the end of the document.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &PageBreakParams, state: &AppState) -> CallToolResult {
        info!("Adding page break");
        state.document.with(|m| m.add_page_break());
        success_result("Page break added")
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<PageBreakParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(state: Arc<AppState>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let state = state.clone();
            async move {
                let params: PageBreakParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
