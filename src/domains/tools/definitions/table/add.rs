//! Add-table tool definition.
//!
//! Appends a bare grid with no content and returns its id.

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
use crate::domains::document::{DEFAULT_TABLE_STYLE, TableSpec};

fn default_style() -> String {
    DEFAULT_TABLE_STYLE.to_string()
}

/// Parameters for the add-table tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddTableParams {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Table style name (e.g. "Table Grid").
    #[serde(default = "default_style")]
    pub style: String,
}

/// Result of adding a table.
#[derive(Debug, Serialize, JsonSchema)]
struct AddTableResult {
    /// Id of the new table.
    table_id: String,
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
}

/// Add-table tool - appends an empty grid.
pub struct AddTableTool;

impl AddTableTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_table";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Add an empty table with the given number of rows and columns. Returns the table id.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(rows = params.rows, cols = params.cols))]
    pub fn execute(params: &AddTableParams, state: &AppState) -> CallToolResult {
        if params.rows == 0 || params.cols == 0 {
            return error_result("Table dimensions must be at least 1x1");
        }

        let table_id = state.document.with(|m| {
            m.add_table(TableSpec::new(params.rows, params.cols, params.style.clone()))
        });

        info!("Added table {}", table_id);
        structured_result(
            format!(
                "Added {}x{} table as {}",
                params.rows, params.cols, table_id
            ),
            &AddTableResult {
                table_id,
                rows: params.rows,
                cols: params.cols,
            },
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<AddTableParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<AddTableResult>().into()),
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
                let params: AddTableParams =
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
    fn test_add_table_returns_ordinal_id() {
        let (_tmp, state) = test_state();
        let params = AddTableParams {
            rows: 2,
            cols: 3,
            style: default_style(),
        };
        let result = AddTableTool::execute(&params, &state);
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["table_id"], "table_0");

        let result = AddTableTool::execute(&params, &state);
        assert_eq!(result.structured_content.unwrap()["table_id"], "table_1");
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let (_tmp, state) = test_state();
        let params = AddTableParams {
            rows: 0,
            cols: 3,
            style: default_style(),
        };
        let result = AddTableTool::execute(&params, &state);
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(state.document.with(|m| m.table_count()), 0);
    }
}
