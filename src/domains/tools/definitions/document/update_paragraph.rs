//! Update-paragraph tool definition.
//!
//! Restyles an existing paragraph in place. The formatting applies to the
//! paragraph's first run; optional new content is appended as a run carrying
//! the same formatting.

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
use crate::domains::document::{Alignment, DocColor, RunSpec, parse_color};

/// Parameters for the update-paragraph tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateParagraphParams {
    /// Paragraph id (e.g. "p0"). Omit to target the last paragraph.
    #[serde(default)]
    pub paragraph: Option<String>,

    /// Text to append as a new run with the same formatting.
    #[serde(default)]
    pub content: Option<String>,

    /// New paragraph style name.
    #[serde(default)]
    pub style: Option<String>,

    /// Font size in points.
    #[serde(default)]
    pub font_size: Option<u32>,

    /// Render bold.
    #[serde(default)]
    pub bold: bool,

    /// Render italic.
    #[serde(default)]
    pub italic: bool,

    /// Named font color (e.g. "red", "dark blue").
    #[serde(default)]
    pub color: Option<String>,

    /// New paragraph alignment.
    #[serde(default)]
    pub alignment: Option<Alignment>,
}

/// Update-paragraph tool - restyles an existing paragraph.
pub struct UpdateParagraphTool;

impl UpdateParagraphTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_paragraph";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update an existing paragraph's style, formatting, or alignment, optionally appending new content. Omit the paragraph id to target the last paragraph.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(paragraph = ?params.paragraph))]
    pub fn execute(params: &UpdateParagraphParams, state: &AppState) -> CallToolResult {
        // Resolve the color before touching the document so an unknown name
        // cannot leave a half-applied update.
        let color: Option<DocColor> = match &params.color {
            Some(name) => match parse_color(name) {
                Ok(color) => Some(color),
                Err(e) => return error_result(e.to_string()),
            },
            None => None,
        };

        let outcome = state.document.with(|m| {
            let paragraph = m.paragraph_mut(params.paragraph.as_deref())?;

            if let Some(style) = &params.style {
                paragraph.style = Some(style.clone());
            }
            if let Some(alignment) = params.alignment {
                paragraph.align = alignment;
            }
            if let Some(run) = paragraph.runs.first_mut() {
                run.bold = params.bold;
                run.italic = params.italic;
                if let Some(size) = params.font_size {
                    run.size = Some(size);
                }
                if color.is_some() {
                    run.color = color;
                }
            }
            if let Some(content) = &params.content {
                paragraph.runs.push(RunSpec {
                    text: content.clone(),
                    bold: params.bold,
                    italic: params.italic,
                    size: params.font_size,
                    color,
                    ..Default::default()
                });
            }
            Ok::<(), crate::domains::document::DocumentError>(())
        });

        match outcome {
            Ok(()) => {
                info!("Updated paragraph {:?}", params.paragraph);
                success_result("Paragraph updated")
            }
            Err(e) => error_result(e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<UpdateParagraphParams>().into(),
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
                let params: UpdateParagraphParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
