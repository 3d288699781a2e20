//! Open-document tool definition.
//!
//! Decodes an existing `.docx` file into the shared document handle,
//! replacing whatever was in memory.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{error_result, structured_result};
use crate::core::AppState;
use crate::domains::document::read_docx_file;

/// Parameters for the open-document tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OpenDocumentParams {
    /// Path to the .docx file to open.
    pub filepath: String,
}

/// Result of opening a document.
#[derive(Debug, Serialize, JsonSchema)]
struct OpenDocumentResult {
    /// Path the document was read from.
    filepath: String,
    /// Number of paragraphs decoded.
    paragraphs: usize,
    /// Number of tables decoded.
    tables: usize,
}

/// Open-document tool - loads a .docx file into memory.
pub struct OpenDocumentTool;

impl OpenDocumentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "open_document";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Open an existing Word document from a file path, replacing the in-memory document.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(filepath = %params.filepath))]
    pub fn execute(params: &OpenDocumentParams, state: &AppState) -> CallToolResult {
        info!("Opening document: {}", params.filepath);

        let model = match read_docx_file(Path::new(&params.filepath)) {
            Ok(model) => model,
            Err(e) => return error_result(format!("Failed to open document: {}", e)),
        };

        let result = OpenDocumentResult {
            filepath: params.filepath.clone(),
            paragraphs: model.paragraph_count(),
            tables: model.table_count(),
        };
        state.document.replace(model);

        structured_result(
            format!(
                "Opened '{}' ({} paragraphs, {} tables)",
                params.filepath, result.paragraphs, result.tables
            ),
            &result,
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<OpenDocumentParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<OpenDocumentResult>().into()),
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
                let params: OpenDocumentParams =
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
    use crate::domains::document::{DocumentModel, ParagraphSpec, write_docx};
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
    fn test_open_replaces_in_memory_document() {
        let (tmp, state) = test_state();
        let path = tmp.path().join("existing.docx");

        let mut on_disk = DocumentModel::new();
        on_disk.add_paragraph(ParagraphSpec::text("from disk"));
        on_disk.add_paragraph(ParagraphSpec::text("also from disk"));
        write_docx(&on_disk, &path).unwrap();

        state
            .document
            .with(|m| m.add_paragraph(ParagraphSpec::text("stale")));

        let params = OpenDocumentParams {
            filepath: path.to_string_lossy().to_string(),
        };
        let result = OpenDocumentTool::execute(&params, &state);
        assert!(!result.is_error.unwrap_or(false));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["paragraphs"], 2);
        assert_eq!(state.document.with(|m| m.paragraph_count()), 2);
    }

    #[test]
    fn test_open_missing_file_is_an_error() {
        let (_tmp, state) = test_state();
        let params = OpenDocumentParams {
            filepath: "/nonexistent/report.docx".to_string(),
        };
        let result = OpenDocumentTool::execute(&params, &state);
        assert!(result.is_error.unwrap_or(false));
    }
}
