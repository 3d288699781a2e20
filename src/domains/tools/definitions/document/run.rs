//! Add-run tool definition.
//!
//! Appends a formatted text run to an existing paragraph.

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
use crate::domains::document::{DocColor, DocumentError, RunSpec, parse_color};

/// Parameters for the add-run tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddRunParams {
    /// Paragraph id (e.g. "p0"). Omit to target the last paragraph.
    #[serde(default)]
    pub paragraph: Option<String>,

    /// Run text.
    pub content: String,

    /// Render bold.
    #[serde(default)]
    pub bold: bool,

    /// Render italic.
    #[serde(default)]
    pub italic: bool,

    /// Underline the run.
    #[serde(default)]
    pub underline: bool,

    /// Named font color (e.g. "red", "dark blue").
    #[serde(default)]
    pub color: Option<String>,

    /// Named highlight color (e.g. "yellow", "gray25").
    #[serde(default)]
    pub highlight: Option<String>,
}

/// Add-run tool - appends a run with its own character formatting.
pub struct AddRunTool;

impl AddRunTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_run_to_paragraph";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a text run with its own bold/italic/underline, color, and highlight to an existing paragraph. Omit the paragraph id to target the last paragraph.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(paragraph = ?params.paragraph))]
    pub fn execute(params: &AddRunParams, state: &AppState) -> CallToolResult {
        // Both color names must resolve before the paragraph is touched.
        let color = match Self::resolve(&params.color) {
            Ok(c) => c,
            Err(e) => return error_result(e.to_string()),
        };
        let highlight = match Self::resolve(&params.highlight) {
            Ok(c) => c,
            Err(e) => return error_result(e.to_string()),
        };

        let outcome = state.document.with(|m| {
            let paragraph = m.paragraph_mut(params.paragraph.as_deref())?;
            paragraph.runs.push(RunSpec {
                text: params.content.clone(),
                bold: params.bold,
                italic: params.italic,
                underline: params.underline,
                color,
                highlight,
                ..Default::default()
            });
            Ok::<(), DocumentError>(())
        });

        match outcome {
            Ok(()) => {
                info!("Added run to paragraph {:?}", params.paragraph);
                success_result("Run added to paragraph")
            }
            Err(e) => error_result(e.to_string()),
        }
    }

    fn resolve(name: &Option<String>) -> Result<Option<DocColor>, DocumentError> {
        match name {
            Some(name) => Ok(Some(parse_color(name)?)),
            None => Ok(None),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<AddRunParams>().into(),
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
                let params: AddRunParams =
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
    use crate::domains::document::ParagraphSpec;
    use tempfile::TempDir;

    fn test_state() -> (TempDir, Arc<AppState>) {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.stores.resources_dir = tmp.path().join("resources");
        config.stores.prompts_dir = tmp.path().join("prompts");
        let state = AppState::new(Arc::new(config)).unwrap();
        (tmp, Arc::new(state))
    }

    fn base_params() -> AddRunParams {
        AddRunParams {
            paragraph: None,
            content: "run".to_string(),
            bold: false,
            italic: false,
            underline: false,
            color: None,
            highlight: None,
        }
    }

    #[test]
    fn test_run_appended_with_formatting() {
        let (_tmp, state) = test_state();
        state
            .document
            .with(|m| m.add_paragraph(ParagraphSpec::text("intro")));

        let params = AddRunParams {
            content: " warning".to_string(),
            bold: true,
            underline: true,
            color: Some("dark red".to_string()),
            highlight: Some("yellow".to_string()),
            ..base_params()
        };
        let result = AddRunTool::execute(&params, &state);
        assert!(!result.is_error.unwrap_or(false));

        state.document.with(|m| {
            let p = m.paragraph_mut(None).unwrap();
            assert_eq!(p.runs.len(), 2);
            let run = &p.runs[1];
            assert!(run.bold && run.underline);
            assert_eq!(run.color, Some(DocColor::DarkRed));
            assert_eq!(run.highlight, Some(DocColor::Yellow));
        });
    }

    #[test]
    fn test_unknown_highlight_rejected() {
        let (_tmp, state) = test_state();
        state
            .document
            .with(|m| m.add_paragraph(ParagraphSpec::text("intro")));

        let params = AddRunParams {
            highlight: Some("neon".to_string()),
            ..base_params()
        };
        let result = AddRunTool::execute(&params, &state);
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(
            state.document.with(|m| m.paragraph_mut(None).unwrap().runs.len()),
            1
        );
    }

    #[test]
    fn test_no_paragraphs_is_an_error() {
        let (_tmp, state) = test_state();
        let result = AddRunTool::execute(&base_params(), &state);
        assert!(result.is_error.unwrap_or(false));
    }
}
