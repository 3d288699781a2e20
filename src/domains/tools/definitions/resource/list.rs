//! List-resources tool definition.

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

/// Parameters for the list-resources tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListResourcesParams {}

/// Result of listing resources.
#[derive(Debug, Serialize, JsonSchema)]
struct ResourceListResult {
    /// Stored resource ids.
    resources: Vec<String>,
    /// Number of resources.
    count: usize,
}

/// List-resources tool - enumerates stored resource ids.
pub struct ListResourcesTool;

impl ListResourcesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_resources";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the ids of all stored resources.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &ListResourcesParams, state: &AppState) -> CallToolResult {
        let resources = state.resources.list();
        let count = resources.len();
        info!("Listed {} resources", count);
        structured_result(
            format!("{} resources stored", count),
            &ResourceListResult { resources, count },
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListResourcesParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<ResourceListResult>().into()),
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
                let params: ListResourcesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
