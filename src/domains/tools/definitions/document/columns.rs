//! Column-count tool definition.
//!
//! Records a column count on a section in the in-memory model.

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

/// Parameters for the column-count tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetColumnsParams {
    /// Section id (e.g. "section_0"). Omit to target the last section.
    #[serde(default)]
    pub section: Option<String>,

    /// Number of columns (at least 1).
    pub cols: usize,
}

/// Column-count tool - sets the column layout of a section.
pub struct SetColumnsTool;

impl SetColumnsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "set_number_of_columns";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Set the number of text columns on a section. Omit the section id to target the last section.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(section = ?params.section, cols = params.cols))]
    pub fn execute(params: &SetColumnsParams, state: &AppState) -> CallToolResult {
        if params.cols == 0 {
            return error_result("Column count must be at least 1");
        }

        let outcome = state.document.with(|m| {
            let section = m.section_mut(params.section.as_deref())?;
            section.columns = params.cols;
            Ok::<(), DocumentError>(())
        });

        match outcome {
            Ok(()) => {
                info!("Set section {:?} to {} columns", params.section, params.cols);
                success_result(format!("Section set to {} columns", params.cols))
            }
            Err(e) => error_result(e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SetColumnsParams>().into(),
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
                let params: SetColumnsParams =
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
    fn test_columns_recorded_on_section() {
        let (_tmp, state) = test_state();
        state.document.with(|m| m.add_section());

        let params = SetColumnsParams {
            section: None,
            cols: 2,
        };
        let result = SetColumnsTool::execute(&params, &state);
        assert!(!result.is_error.unwrap_or(false));

        let cols = state
            .document
            .with(|m| m.section_mut(None).unwrap().columns);
        assert_eq!(cols, 2);
    }

    #[test]
    fn test_zero_columns_rejected() {
        let (_tmp, state) = test_state();
        state.document.with(|m| m.add_section());
        let params = SetColumnsParams {
            section: None,
            cols: 0,
        };
        let result = SetColumnsTool::execute(&params, &state);
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_no_sections_is_an_error() {
        let (_tmp, state) = test_state();
        let params = SetColumnsParams {
            section: None,
            cols: 2,
        };
        let result = SetColumnsTool::execute(&params, &state);
        assert!(result.is_error.unwrap_or(false));
    }
}
