//! Save-resource tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{error_result, success_result};
use crate::core::AppState;

/// Parameters for the save-resource tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaveResourceParams {
    /// Resource identifier.
    pub resource_id: String,

    /// Content to store: any JSON value.
    pub content: Value,
}

/// Save-resource tool - persists a keyed JSON value.
pub struct SaveResourceTool;

impl SaveResourceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "save_resource";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Save a JSON value as a persistent resource under the given id, replacing any prior value.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(resource_id = %params.resource_id))]
    pub fn execute(params: &SaveResourceParams, state: &AppState) -> CallToolResult {
        match state.resources.save(&params.resource_id, &params.content) {
            Ok(()) => {
                info!("Saved resource '{}'", params.resource_id);
                success_result(format!("Saved resource '{}'", params.resource_id))
            }
            Err(e) => error_result(format!(
                "Failed to save resource '{}': {}",
                params.resource_id, e
            )),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SaveResourceParams>().into(),
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
                let params: SaveResourceParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
