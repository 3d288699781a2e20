//! Get-resource tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{error_result, structured_result};
use crate::core::AppState;
use crate::domains::resources::stringify;

/// Parameters for the get-resource tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetResourceParams {
    /// Resource identifier.
    pub resource_id: String,
}

/// Result of fetching a resource.
#[derive(Debug, Serialize, JsonSchema)]
struct GetResourceResult {
    /// Resource identifier.
    resource_id: String,
    /// The stored value.
    content: Value,
}

/// Get-resource tool - loads a stored value by id.
pub struct GetResourceTool;

impl GetResourceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_resource";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a stored resource by id.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(resource_id = %params.resource_id))]
    pub fn execute(params: &GetResourceParams, state: &AppState) -> CallToolResult {
        match state.resources.get(&params.resource_id) {
            Ok(content) => {
                info!("Fetched resource '{}'", params.resource_id);
                structured_result(
                    stringify(&content),
                    &GetResourceResult {
                        resource_id: params.resource_id.clone(),
                        content,
                    },
                )
            }
            Err(e) => error_result(e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GetResourceParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<GetResourceResult>().into()),
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
                let params: GetResourceParams =
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
    use serde_json::json;
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
    fn test_get_returns_stored_value() {
        let (_tmp, state) = test_state();
        state
            .resources
            .save("notes", &json!({"topic": "tables"}))
            .unwrap();

        let params = GetResourceParams {
            resource_id: "notes".to_string(),
        };
        let result = GetResourceTool::execute(&params, &state);
        assert!(!result.is_error.unwrap_or(false));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["content"]["topic"], "tables");
    }

    #[test]
    fn test_scalar_comes_back_unwrapped_in_text() {
        let (_tmp, state) = test_state();
        state.resources.save("answer", &json!(42)).unwrap();

        let params = GetResourceParams {
            resource_id: "answer".to_string(),
        };
        let result = GetResourceTool::execute(&params, &state);

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "42");
    }

    #[test]
    fn test_missing_resource_is_an_error() {
        let (_tmp, state) = test_state();
        let params = GetResourceParams {
            resource_id: "absent".to_string(),
        };
        let result = GetResourceTool::execute(&params, &state);
        assert!(result.is_error.unwrap_or(false));
    }
}
