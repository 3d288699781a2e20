//! List-prompts tool definition.

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

/// Parameters for the list-prompts tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListPromptsParams {}

/// Result of listing prompts.
#[derive(Debug, Serialize, JsonSchema)]
struct PromptListResult {
    /// Stored prompt ids.
    prompts: Vec<String>,
    /// Number of prompts.
    count: usize,
}

/// List-prompts tool - enumerates stored prompt ids.
pub struct ListPromptsTool;

impl ListPromptsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_prompts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the ids of all stored prompts.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &ListPromptsParams, state: &AppState) -> CallToolResult {
        let prompts = state.prompts.list();
        let count = prompts.len();
        info!("Listed {} prompts", count);
        structured_result(
            format!("{} prompts stored", count),
            &PromptListResult { prompts, count },
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListPromptsParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<PromptListResult>().into()),
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
                let params: ListPromptsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use serde_json::Map;
    use tempfile::TempDir;

    fn test_state() -> (TempDir, Arc<AppState>) {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.stores.resources_dir = tmp.path().join("resources");
        config.stores.prompts_dir = tmp.path().join("prompts");
        let state = AppState::new(Arc::new(config)).unwrap();
        (tmp, Arc::new(state))
    }

    #[test]
    fn test_saved_prompts_are_listed() {
        let (_tmp, state) = test_state();
        state.prompts.save("a", "A", "", Map::new()).unwrap();
        state.prompts.save("b", "B", "", Map::new()).unwrap();

        let result = ListPromptsTool::execute(&ListPromptsParams {}, &state);
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["count"], 2);
    }
}
