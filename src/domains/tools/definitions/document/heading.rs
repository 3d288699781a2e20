//! Add-heading tool definition.

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

use super::super::common::{error_result, structured_result};
use crate::core::AppState;

const MAX_HEADING_LEVEL: usize = 9;

fn default_level() -> usize {
    1
}

/// Parameters for the add-heading tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddHeadingParams {
    /// Heading text.
    pub content: String,

    /// Heading level: 0 for the document title, 1-9 for `Heading N`.
    #[serde(default = "default_level")]
    pub level: usize,
}

/// Result of adding a heading.
#[derive(Debug, Serialize, JsonSchema)]
struct AddHeadingResult {
    /// Id of the new paragraph.
    paragraph_id: String,
    /// Style applied to the heading.
    style: String,
}

/// Add-heading tool - appends a styled heading paragraph.
pub struct AddHeadingTool;

impl AddHeadingTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_heading";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Add a heading to the document. Level 0 produces the document title, levels 1-9 map to Heading styles.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(level = params.level))]
    pub fn execute(params: &AddHeadingParams, state: &AppState) -> CallToolResult {
        if params.level > MAX_HEADING_LEVEL {
            return error_result(format!(
                "Heading level must be between 0 and {}, got {}",
                MAX_HEADING_LEVEL, params.level
            ));
        }

        info!("Adding level {} heading", params.level);
        let paragraph_id = state
            .document
            .with(|m| m.add_heading(&params.content, params.level));

        let style = if params.level == 0 {
            "Title".to_string()
        } else {
            format!("Heading {}", params.level)
        };
        structured_result(
            format!("Added heading '{}' as {}", params.content, paragraph_id),
            &AddHeadingResult {
                paragraph_id,
                style,
            },
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<AddHeadingParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<AddHeadingResult>().into()),
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
                let params: AddHeadingParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
