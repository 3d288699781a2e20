//! Get-prompt tool definition.

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

use super::super::common::{error_result, structured_result};
use crate::core::AppState;
use crate::domains::prompts::PromptRecord;

/// Parameters for the get-prompt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPromptParams {
    /// Prompt identifier.
    pub prompt_id: String,
}

/// Get-prompt tool - loads a stored prompt record.
pub struct GetPromptTool;

impl GetPromptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get a stored prompt record (template, description, metadata) by id.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(prompt_id = %params.prompt_id))]
    pub fn execute(params: &GetPromptParams, state: &AppState) -> CallToolResult {
        match state.prompts.get(&params.prompt_id) {
            Ok(record) => {
                info!("Fetched prompt '{}'", params.prompt_id);
                structured_result(record.template.clone(), &record)
            }
            Err(e) => error_result(e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GetPromptParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<PromptRecord>().into()),
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
                let params: GetPromptParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
