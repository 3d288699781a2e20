//! Add-section tool definition.
//!
//! Starts a new document section on a new page and returns its id so the
//! column-count tool can address it later.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::structured_result;
use crate::core::AppState;

/// Parameters for the add-section tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct AddSectionParams {}

/// Result of adding a section.
#[derive(Debug, Serialize, JsonSchema)]
struct AddSectionResult {
    /// Id of the new section.
    section_id: String,
}

/// Add-section tool - starts a new-page section.
pub struct AddSectionTool;

impl AddSectionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_section";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Start a new document section on a new page. Returns the section id.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &AddSectionParams, state: &AppState) -> CallToolResult {
        let section_id = state.document.with(|m| m.add_section());
        info!("Added section {}", section_id);
        structured_result(
            format!("Added section {}", section_id),
            &AddSectionResult { section_id },
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<AddSectionParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<AddSectionResult>().into()),
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
                let params: AddSectionParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
