//! Add-paragraph tool definition.

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
use crate::domains::document::{Alignment, ParagraphSpec, RunSpec};

fn default_style() -> String {
    "Normal".to_string()
}

fn default_font_size() -> u32 {
    12
}

/// Parameters for the add-paragraph tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParagraphParams {
    /// Paragraph text.
    pub content: String,

    /// Paragraph style name (e.g. "Normal", "Quote").
    #[serde(default = "default_style")]
    pub style: String,

    /// Font size in points.
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Render the text bold.
    #[serde(default)]
    pub bold: bool,

    /// Render the text italic.
    #[serde(default)]
    pub italic: bool,

    /// Paragraph alignment.
    #[serde(default)]
    pub alignment: Alignment,
}

/// Result of adding a paragraph.
#[derive(Debug, Serialize, JsonSchema)]
struct AddParagraphResult {
    /// Id of the new paragraph.
    paragraph_id: String,
}

/// Add-paragraph tool - appends a formatted paragraph.
pub struct AddParagraphTool;

impl AddParagraphTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_paragraph";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a paragraph to the document with optional style, font size, bold/italic formatting, and alignment. Returns the paragraph id.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &AddParagraphParams, state: &AppState) -> CallToolResult {
        info!("Adding paragraph ({} chars)", params.content.len());

        let spec = ParagraphSpec {
            style: Some(params.style.clone()),
            align: params.alignment,
            runs: vec![RunSpec {
                text: params.content.clone(),
                bold: params.bold,
                italic: params.italic,
                size: Some(params.font_size),
                ..Default::default()
            }],
        };
        let paragraph_id = state.document.with(|m| m.add_paragraph(spec));

        structured_result(
            format!("Added paragraph {}", paragraph_id),
            &AddParagraphResult { paragraph_id },
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<AddParagraphParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<AddParagraphResult>().into()),
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
                let params: AddParagraphParams =
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
    fn test_add_paragraph_returns_ordinal_id() {
        let (_tmp, state) = test_state();
        let params = AddParagraphParams {
            content: "First".to_string(),
            style: default_style(),
            font_size: default_font_size(),
            bold: false,
            italic: false,
            alignment: Alignment::Left,
        };
        let result = AddParagraphTool::execute(&params, &state);
        assert_eq!(result.structured_content.unwrap()["paragraph_id"], "p0");

        let result = AddParagraphTool::execute(&params, &state);
        assert_eq!(result.structured_content.unwrap()["paragraph_id"], "p1");
    }

    #[test]
    fn test_formatting_lands_on_the_run() {
        let (_tmp, state) = test_state();
        let params = AddParagraphParams {
            content: "Emphasis".to_string(),
            style: "Quote".to_string(),
            font_size: 16,
            bold: true,
            italic: true,
            alignment: Alignment::Center,
        };
        AddParagraphTool::execute(&params, &state);

        state.document.with(|m| {
            let p = m.paragraph_mut(None).unwrap();
            assert_eq!(p.style.as_deref(), Some("Quote"));
            assert_eq!(p.align, Alignment::Center);
            assert!(p.runs[0].bold);
            assert!(p.runs[0].italic);
            assert_eq!(p.runs[0].size, Some(16));
        });
    }

    #[test]
    fn test_defaults_from_json() {
        let params: AddParagraphParams =
            serde_json::from_value(serde_json::json!({ "content": "plain" })).unwrap();
        assert_eq!(params.style, "Normal");
        assert_eq!(params.font_size, 12);
        assert!(!params.bold);
        assert_eq!(params.alignment, Alignment::Left);
    }
}
