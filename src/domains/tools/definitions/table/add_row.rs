//! Add-table-row tool definition.
//!
//! Appends a row of values. Extra values beyond the column count are
//! dropped; missing values leave their cells empty.

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
use crate::domains::document::DocumentError;

/// Parameters for the add-table-row tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddTableRowParams {
    /// Table id (e.g. "table_0"). Omit to target the last table.
    #[serde(default)]
    pub table: Option<String>,

    /// Cell values, left to right.
    #[serde(default)]
    pub data: Vec<String>,

    /// Format the row as a header (bold, centered).
    #[serde(default)]
    pub is_header: bool,
}

/// Add-table-row tool - appends a row to an existing table.
pub struct AddTableRowTool;

impl AddTableRowTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_table_row";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Append a row of values to a table. Values beyond the column count are ignored; missing values leave cells empty. Omit the table id to target the last table.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(table = ?params.table, values = params.data.len()))]
    pub fn execute(params: &AddTableRowParams, state: &AppState) -> CallToolResult {
        let outcome = state.document.with(|m| {
            let table = m.table_mut(params.table.as_deref())?;
            table.add_row(&params.data, params.is_header);
            Ok::<usize, DocumentError>(table.row_count())
        });

        match outcome {
            Ok(rows) => {
                info!("Added row ({} total)", rows);
                success_result(format!("Row added; table now has {} rows", rows))
            }
            Err(e) => error_result(e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<AddTableRowParams>().into(),
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
                let params: AddTableRowParams =
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
    use crate::domains::document::{Alignment, DEFAULT_TABLE_STYLE, TableSpec};
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
    fn test_extra_values_dropped_missing_left_empty() {
        let (_tmp, state) = test_state();
        state
            .document
            .with(|m| m.add_table(TableSpec::new(0, 2, DEFAULT_TABLE_STYLE)));

        let params = AddTableRowParams {
            table: None,
            data: vec!["a".to_string(), "b".to_string(), "dropped".to_string()],
            is_header: false,
        };
        AddTableRowTool::execute(&params, &state);

        let params = AddTableRowParams {
            table: None,
            data: vec!["only".to_string()],
            is_header: false,
        };
        AddTableRowTool::execute(&params, &state);

        state.document.with(|m| {
            let table = m.table_mut(None).unwrap();
            assert_eq!(table.rows[0].len(), 2);
            assert_eq!(table.rows[0][1].runs[0].text, "b");
            assert!(table.rows[1][1].runs.is_empty());
        });
    }

    #[test]
    fn test_header_row_is_bold_and_centered() {
        let (_tmp, state) = test_state();
        state
            .document
            .with(|m| m.add_table(TableSpec::new(0, 2, DEFAULT_TABLE_STYLE)));

        let params = AddTableRowParams {
            table: None,
            data: vec!["H1".to_string(), "H2".to_string()],
            is_header: true,
        };
        AddTableRowTool::execute(&params, &state);

        state.document.with(|m| {
            let row = &m.table_mut(None).unwrap().rows[0];
            assert!(row[0].runs[0].bold);
            assert_eq!(row[0].align, Alignment::Center);
        });
    }

    #[test]
    fn test_no_tables_is_an_error() {
        let (_tmp, state) = test_state();
        let params = AddTableRowParams {
            table: None,
            data: vec![],
            is_header: false,
        };
        let result = AddTableRowTool::execute(&params, &state);
        assert!(result.is_error.unwrap_or(false));
    }
}
