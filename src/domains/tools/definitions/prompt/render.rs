//! Render-prompt tool definition.
//!
//! Substitutes caller-supplied variables into a stored template.

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

/// Parameters for the render-prompt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RenderPromptParams {
    /// Prompt identifier.
    pub prompt_id: String,

    /// Variable values substituted for `{name}` placeholders.
    #[serde(default)]
    pub variables: Option<Map<String, Value>>,
}

/// Render-prompt tool - fills a template's placeholders.
pub struct RenderPromptTool;

impl RenderPromptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "render_prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Render a stored prompt template, substituting each {name} placeholder with the matching variable. Unmatched placeholders are left as-is.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(prompt_id = %params.prompt_id))]
    pub fn execute(params: &RenderPromptParams, state: &AppState) -> CallToolResult {
        let variables = params.variables.clone().unwrap_or_default();
        match state.prompts.render(&params.prompt_id, &variables) {
            Ok(rendered) => {
                info!("Rendered prompt '{}'", params.prompt_id);
                success_result(rendered)
            }
            Err(e) => error_result(e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<RenderPromptParams>().into(),
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
                let params: RenderPromptParams =
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

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => t.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_variables_substituted() {
        let (_tmp, state) = test_state();
        state
            .prompts
            .save("greet", "Hello {name}, welcome to {place}!", "", Map::new())
            .unwrap();

        let mut variables = Map::new();
        variables.insert("name".to_string(), json!("Ann"));
        variables.insert("place".to_string(), json!("Town"));

        let params = RenderPromptParams {
            prompt_id: "greet".to_string(),
            variables: Some(variables),
        };
        let result = RenderPromptTool::execute(&params, &state);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "Hello Ann, welcome to Town!");
    }

    #[test]
    fn test_unmatched_placeholders_untouched() {
        let (_tmp, state) = test_state();
        state
            .prompts
            .save("partial", "Hi {who}", "", Map::new())
            .unwrap();

        let params = RenderPromptParams {
            prompt_id: "partial".to_string(),
            variables: None,
        };
        let result = RenderPromptTool::execute(&params, &state);
        assert_eq!(result_text(&result), "Hi {who}");
    }

    #[test]
    fn test_missing_prompt_is_an_error() {
        let (_tmp, state) = test_state();
        let params = RenderPromptParams {
            prompt_id: "absent".to_string(),
            variables: None,
        };
        let result = RenderPromptTool::execute(&params, &state);
        assert!(result.is_error.unwrap_or(false));
    }
}
