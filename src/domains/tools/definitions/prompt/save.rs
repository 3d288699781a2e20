//! Save-prompt tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{error_result, success_result};
use crate::core::AppState;

/// Parameters for the save-prompt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SavePromptParams {
    /// Prompt identifier.
    pub prompt_id: String,

    /// Template text with `{name}` placeholders.
    pub template: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Arbitrary metadata stored alongside the template.
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

/// Save-prompt tool - persists a prompt template.
pub struct SavePromptTool;

impl SavePromptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "save_prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Save a prompt template with {name} placeholders under the given id, replacing any prior record.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(prompt_id = %params.prompt_id))]
    pub fn execute(params: &SavePromptParams, state: &AppState) -> CallToolResult {
        let metadata = params.metadata.clone().unwrap_or_default();
        match state.prompts.save(
            &params.prompt_id,
            &params.template,
            &params.description,
            metadata,
        ) {
            Ok(_) => {
                info!("Saved prompt '{}'", params.prompt_id);
                success_result(format!("Saved prompt '{}'", params.prompt_id))
            }
            Err(e) => error_result(format!(
                "Failed to save prompt '{}': {}",
                params.prompt_id, e
            )),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SavePromptParams>().into(),
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
                let params: SavePromptParams =
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
    fn test_save_persists_template_and_metadata() {
        let (_tmp, state) = test_state();
        let mut metadata = Map::new();
        metadata.insert("author".to_string(), json!("docs team"));

        let params = SavePromptParams {
            prompt_id: "greet".to_string(),
            template: "Hello {name}!".to_string(),
            description: "A greeting".to_string(),
            metadata: Some(metadata),
        };
        let result = SavePromptTool::execute(&params, &state);
        assert!(!result.is_error.unwrap_or(false));

        let record = state.prompts.get("greet").unwrap();
        assert_eq!(record.template, "Hello {name}!");
        assert_eq!(record.metadata["author"], "docs team");
        assert!(!record.created_at.is_empty());
    }
}
