//! Save-file tool definition.
//!
//! Encodes the in-memory document to `.docx`. Bare filenames land in the
//! resources directory; the written file is then registered in the resource
//! store under its file stem so clients can rediscover it later.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{error_result, structured_result};
use crate::core::AppState;
use crate::domains::document::write_docx;

const DOCX_EXT: &str = ".docx";

/// Parameters for the save-file tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaveFileParams {
    /// Target filename; `.docx` is appended if missing. A bare name (no
    /// directory component) is written into the resources directory.
    pub filename: String,
}

/// Result of saving the document.
#[derive(Debug, Serialize, JsonSchema)]
struct SaveFileResult {
    /// Absolute or relative path the document was written to.
    path: String,
    /// Resource id the file was registered under.
    resource_id: String,
}

/// Save-file tool - writes the document to disk and registers it.
pub struct SaveFileTool;

impl SaveFileTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "save_file";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Save the current document as a .docx file. Bare filenames are written into the resources directory and the file is registered as a resource.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(filename = %params.filename))]
    pub fn execute(params: &SaveFileParams, state: &AppState) -> CallToolResult {
        let path = Self::resolve_path(&params.filename, state.resources.dir());
        info!("Saving document to {}", path.display());

        if let Err(e) = state.document.with(|model| write_docx(model, &path)) {
            return error_result(format!("Failed to save document: {}", e));
        }

        let resource_id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document")
            .to_string();
        let location = path.to_string_lossy().to_string();
        if let Err(e) = state.resources.save(&resource_id, &Value::String(location.clone())) {
            return error_result(format!(
                "Document saved to '{}' but registering resource '{}' failed: {}",
                location, resource_id, e
            ));
        }

        structured_result(
            format!("Saved document to '{}'", location),
            &SaveFileResult {
                path: location,
                resource_id,
            },
        )
    }

    /// Append the `.docx` extension if missing and anchor bare filenames in
    /// the resources directory.
    fn resolve_path(filename: &str, resources_dir: &Path) -> PathBuf {
        let mut filename = filename.to_string();
        if !filename.to_lowercase().ends_with(DOCX_EXT) {
            filename.push_str(DOCX_EXT);
        }
        let path = Path::new(&filename);
        let has_dir = path
            .parent()
            .map(|p| !p.as_os_str().is_empty())
            .unwrap_or(false);
        if has_dir {
            path.to_path_buf()
        } else {
            resources_dir.join(path)
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SaveFileParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<SaveFileResult>().into()),
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
                let params: SaveFileParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
