//! Update-cell tool definition.
//!
//! Replaces a cell's text at the standard 10pt table size.

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
use crate::domains::document::{DocumentError, ParagraphSpec, RunSpec};

/// Font size applied to cell text, in points.
const CELL_FONT_SIZE: u32 = 10;

/// Parameters for the update-cell tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateCellParams {
    /// Table id (e.g. "table_0"). Omit to target the last table.
    #[serde(default)]
    pub table: Option<String>,

    /// Zero-based row index.
    pub row: usize,

    /// Zero-based column index.
    pub col: usize,

    /// New cell text.
    pub content: String,
}

/// Update-cell tool - replaces a cell's content.
pub struct UpdateCellTool;

impl UpdateCellTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_cell";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Replace the text of a table cell at the given row and column. Omit the table id to target the last table.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(table = ?params.table, row = params.row, col = params.col))]
    pub fn execute(params: &UpdateCellParams, state: &AppState) -> CallToolResult {
        let outcome = state.document.with(|m| {
            let table = m.table_mut(params.table.as_deref())?;
            let cell = ParagraphSpec {
                runs: vec![RunSpec {
                    text: params.content.clone(),
                    size: Some(CELL_FONT_SIZE),
                    ..Default::default()
                }],
                ..Default::default()
            };
            table.set_cell(params.row, params.col, cell)?;
            Ok::<(), DocumentError>(())
        });

        match outcome {
            Ok(()) => {
                info!("Updated cell ({}, {})", params.row, params.col);
                success_result(format!("Updated cell ({}, {})", params.row, params.col))
            }
            Err(e) => error_result(e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<UpdateCellParams>().into(),
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
                let params: UpdateCellParams =
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
    use crate::domains::document::{DEFAULT_TABLE_STYLE, TableSpec};
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
    fn test_cell_replaced_at_table_size() {
        let (_tmp, state) = test_state();
        state
            .document
            .with(|m| m.add_table(TableSpec::new(2, 2, DEFAULT_TABLE_STYLE)));

        let params = UpdateCellParams {
            table: None,
            row: 1,
            col: 0,
            content: "cell text".to_string(),
        };
        let result = UpdateCellTool::execute(&params, &state);
        assert!(!result.is_error.unwrap_or(false));

        state.document.with(|m| {
            let table = m.table_mut(None).unwrap();
            let run = &table.rows[1][0].runs[0];
            assert_eq!(run.text, "cell text");
            assert_eq!(run.size, Some(CELL_FONT_SIZE));
        });
    }

    #[test]
    fn test_out_of_range_reports_actual_counts() {
        let (_tmp, state) = test_state();
        state
            .document
            .with(|m| m.add_table(TableSpec::new(2, 2, DEFAULT_TABLE_STYLE)));

        let params = UpdateCellParams {
            table: None,
            row: 5,
            col: 0,
            content: "x".to_string(),
        };
        let result = UpdateCellTool::execute(&params, &state);
        assert!(result.is_error.unwrap_or(false));

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.contains('5') && text.contains('2'));
    }

    #[test]
    fn test_unknown_table_id() {
        let (_tmp, state) = test_state();
        let params = UpdateCellParams {
            table: Some("table_9".to_string()),
            row: 0,
            col: 0,
            content: "x".to_string(),
        };
        let result = UpdateCellTool::execute(&params, &state);
        assert!(result.is_error.unwrap_or(false));
    }
}
