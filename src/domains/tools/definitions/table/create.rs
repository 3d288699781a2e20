//! Create-table tool definition.
//!
//! Builds a table with an optional bold header row and records the table's
//! shape in the resource store under its id, so clients can look the table
//! up again without holding the whole document.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::super::common::{error_result, structured_result};
use crate::core::AppState;
use crate::domains::document::{DEFAULT_TABLE_STYLE, TableSpec};

fn default_style() -> String {
    DEFAULT_TABLE_STYLE.to_string()
}

/// Parameters for the create-table tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateTableParams {
    /// Number of data rows (the header row is added on top).
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Table style name.
    #[serde(default = "default_style")]
    pub style: String,

    /// Header cell texts; must match the column count when present.
    #[serde(default)]
    pub headers: Option<Vec<String>>,
}

/// Result of creating a table.
#[derive(Debug, Serialize, JsonSchema)]
struct CreateTableResult {
    /// Id of the new table.
    table_id: String,
    /// Total row count including the header row.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Whether the table carries a header row.
    has_headers: bool,
}

/// Create-table tool - builds a table with an optional header row.
pub struct CreateTableTool;

impl CreateTableTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_table";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a table with an optional bold header row. The table's shape is also saved as a resource under the table id.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(rows = params.rows, cols = params.cols))]
    pub fn execute(params: &CreateTableParams, state: &AppState) -> CallToolResult {
        if params.rows == 0 || params.cols == 0 {
            return error_result("Table dimensions must be at least 1x1");
        }
        // Mismatched headers are rejected before the document is touched.
        if let Some(headers) = &params.headers {
            if headers.len() != params.cols {
                return error_result(format!(
                    "Got {} headers but the table has {} columns",
                    headers.len(),
                    params.cols
                ));
            }
        }

        let total_rows = params.rows + usize::from(params.headers.is_some());
        let table_id = state.document.with(|m| {
            let mut table = TableSpec::new(0, params.cols, params.style.clone());
            if let Some(headers) = &params.headers {
                table.add_row(headers, true);
                table.has_headers = true;
            }
            for _ in 0..params.rows {
                table.add_row(&[], false);
            }
            m.add_table(table)
        });

        let result = CreateTableResult {
            table_id: table_id.clone(),
            rows: total_rows,
            cols: params.cols,
            has_headers: params.headers.is_some(),
        };

        // Best effort; the table itself is already in the document.
        let info = json!({
            "rows": result.rows,
            "cols": result.cols,
            "style": params.style,
            "has_headers": result.has_headers,
        });
        if let Err(e) = state.resources.save(&table_id, &info) {
            warn!("Failed to record table '{}' as a resource: {}", table_id, e);
        }

        info!("Created table {}", table_id);
        structured_result(format!("Created table {}", table_id), &result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CreateTableParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<CreateTableResult>().into()),
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
                let params: CreateTableParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
