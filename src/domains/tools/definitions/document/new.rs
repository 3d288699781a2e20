//! Create-document tool definition.
//!
//! Replaces the shared in-memory document with an empty one.

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

use super::super::common::success_result;
use crate::core::AppState;

/// Parameters for the create-document tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CreateDocumentParams {}

/// Create-document tool - starts a fresh empty document.
pub struct CreateDocumentTool;

impl CreateDocumentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_new_document";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a new empty Word document, discarding any in-memory document state.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &CreateDocumentParams, state: &AppState) -> CallToolResult {
        info!("Creating a new empty document");
        state
            .document
            .replace(crate::domains::document::DocumentModel::new());
        success_result("Created a new empty document")
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CreateDocumentParams>().into(),
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
                let params: CreateDocumentParams =
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

    #[test]
    fn test_create_discards_prior_content() {
        let (_tmp, state) = test_state();
        state
            .document
            .with(|m| m.add_paragraph(ParagraphSpec::text("stale")));

        let result = CreateDocumentTool::execute(&CreateDocumentParams {}, &state);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(state.document.with(|m| m.paragraph_count()), 0);
    }
}
