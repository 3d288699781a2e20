//! Fill-cell tool definition.
//!
//! Like update-cell but with caller-controlled formatting.

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
use crate::domains::document::{Alignment, DocumentError, ParagraphSpec, RunSpec};

/// Parameters for the fill-cell tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FillCellParams {
    /// Table id (e.g. "table_0"). Omit to target the last table.
    #[serde(default)]
    pub table: Option<String>,

    /// Zero-based row index.
    pub row: usize,

    /// Zero-based column index.
    pub col: usize,

    /// New cell text.
    pub content: String,

    /// Render the text bold.
    #[serde(default)]
    pub bold: bool,

    /// Cell paragraph alignment.
    #[serde(default)]
    pub alignment: Option<Alignment>,

    /// Font size in points.
    #[serde(default)]
    pub font_size: Option<u32>,
}

/// Fill-cell tool - writes formatted content into a cell.
pub struct FillCellTool;

impl FillCellTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fill_table_cell";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fill a table cell with formatted text: optional bold, alignment, and font size. Omit the table id to target the last table.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(table = ?params.table, row = params.row, col = params.col))]
    pub fn execute(params: &FillCellParams, state: &AppState) -> CallToolResult {
        let outcome = state.document.with(|m| {
            let table = m.table_mut(params.table.as_deref())?;
            let cell = ParagraphSpec {
                align: params.alignment.unwrap_or_default(),
                runs: vec![RunSpec {
                    text: params.content.clone(),
                    bold: params.bold,
                    size: params.font_size,
                    ..Default::default()
                }],
                ..Default::default()
            };
            table.set_cell(params.row, params.col, cell)?;
            Ok::<(), DocumentError>(())
        });

        match outcome {
            Ok(()) => {
                info!("Filled cell ({}, {})", params.row, params.col);
                success_result(format!("Filled cell ({}, {})", params.row, params.col))
            }
            Err(e) => error_result(e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<FillCellParams>().into(),
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
                let params: FillCellParams =
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
    fn test_formatting_applied_to_cell() {
        let (_tmp, state) = test_state();
        state
            .document
            .with(|m| m.add_table(TableSpec::new(1, 1, DEFAULT_TABLE_STYLE)));

        let params = FillCellParams {
            table: None,
            row: 0,
            col: 0,
            content: "Total".to_string(),
            bold: true,
            alignment: Some(Alignment::Center),
            font_size: Some(14),
        };
        let result = FillCellTool::execute(&params, &state);
        assert!(!result.is_error.unwrap_or(false));

        state.document.with(|m| {
            let cell = &m.table_mut(None).unwrap().rows[0][0];
            assert_eq!(cell.align, Alignment::Center);
            assert!(cell.runs[0].bold);
            assert_eq!(cell.runs[0].size, Some(14));
        });
    }

    #[test]
    fn test_column_out_of_range() {
        let (_tmp, state) = test_state();
        state
            .document
            .with(|m| m.add_table(TableSpec::new(1, 1, DEFAULT_TABLE_STYLE)));

        let params = FillCellParams {
            table: None,
            row: 0,
            col: 3,
            content: "x".to_string(),
            bold: false,
            alignment: None,
            font_size: None,
        };
        let result = FillCellTool::execute(&params, &state);
        assert!(result.is_error.unwrap_or(false));
    }
}
