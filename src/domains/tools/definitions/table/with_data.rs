//! Create-table-with-data tool definition.
//!
//! Builds a complete table from headers plus data rows in one call. All
//! shape validation happens before the document is touched.

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

/// Parameters for the create-table-with-data tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TableWithDataParams {
    /// Header cell texts; defines the column count.
    pub headers: Vec<String>,

    /// Data rows; every row must match the header count.
    pub data: Vec<Vec<String>>,

    /// Table style name.
    #[serde(default = "default_style")]
    pub style: String,
}

/// Result of creating a populated table.
#[derive(Debug, Serialize, JsonSchema)]
struct TableWithDataResult {
    /// Id of the new table.
    table_id: String,
    /// Total row count including the header row.
    rows: usize,
    /// Number of columns.
    cols: usize,
}

/// Create-table-with-data tool - builds a fully populated table.
pub struct TableWithDataTool;

impl TableWithDataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_simple_table_with_data";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a table from a header row and data rows in a single call. Every data row must have exactly as many values as there are headers.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(cols = params.headers.len(), data_rows = params.data.len()))]
    pub fn execute(params: &TableWithDataParams, state: &AppState) -> CallToolResult {
        if params.headers.is_empty() {
            return error_result("Headers cannot be empty");
        }
        if params.data.is_empty() {
            return error_result("Data rows cannot be empty");
        }
        let cols = params.headers.len();
        for (i, row) in params.data.iter().enumerate() {
            if row.len() != cols {
                return error_result(format!(
                    "Row {} has {} columns but expected {}",
                    i,
                    row.len(),
                    cols
                ));
            }
        }

        let table_id = state.document.with(|m| {
            let mut table = TableSpec::new(0, cols, params.style.clone());
            table.add_row(&params.headers, true);
            table.has_headers = true;
            for row in &params.data {
                table.add_row(row, false);
            }
            m.add_table(table)
        });

        let rows = params.data.len() + 1;
        info!("Created populated table {}", table_id);
        structured_result(
            format!("Created table {} with {} rows", table_id, rows),
            &TableWithDataResult {
                table_id,
                rows,
                cols,
            },
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<TableWithDataParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<TableWithDataResult>().into()),
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
                let params: TableWithDataParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
