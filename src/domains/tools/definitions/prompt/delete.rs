//! Delete-prompt tool definition.

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

use super::super::common::{error_result, success_result};
use crate::core::AppState;

/// Parameters for the delete-prompt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeletePromptParams {
    /// Prompt identifier.
    pub prompt_id: String,
}

/// Delete-prompt tool - removes a stored prompt.
pub struct DeletePromptTool;

impl DeletePromptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Delete a stored prompt by id. Deleting an id that does not exist is an error.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(prompt_id = %params.prompt_id))]
    pub fn execute(params: &DeletePromptParams, state: &AppState) -> CallToolResult {
        match state.prompts.delete(&params.prompt_id) {
            Ok(()) => {
                info!("Deleted prompt '{}'", params.prompt_id);
                success_result(format!("Deleted prompt '{}'", params.prompt_id))
            }
            Err(e) => error_result(e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<DeletePromptParams>().into(),
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
                let params: DeletePromptParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
