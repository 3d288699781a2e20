//! Add-picture tool definition.
//!
//! Loads an image from disk, re-encodes it as PNG, and appends it to the
//! document scaled to the requested width with the aspect ratio preserved.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Cursor;
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{error_result, structured_result};
use crate::core::AppState;
use crate::domains::document::PictureSpec;

/// English Metric Units per inch (the .docx drawing unit).
const EMU_PER_INCH: f64 = 914_400.0;

fn default_width() -> f64 {
    5.0
}

/// Parameters for the add-picture tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddPictureParams {
    /// Path to the image file.
    pub path: String,

    /// Display width in inches. Height follows the image's aspect ratio.
    #[serde(default = "default_width")]
    pub width: f64,
}

/// Result of adding a picture.
#[derive(Debug, Serialize, JsonSchema)]
struct AddPictureResult {
    /// Source path of the image.
    path: String,
    /// Display width in inches.
    width: f64,
    /// Display height in inches.
    height: f64,
}

/// Add-picture tool - embeds an image in the document.
pub struct AddPictureTool;

impl AddPictureTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_picture";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a picture to the document from an image file, scaled to the given width in inches with the aspect ratio preserved.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &AddPictureParams, state: &AppState) -> CallToolResult {
        if params.width <= 0.0 {
            return error_result("Picture width must be positive");
        }

        let bytes = match fs::read(&params.path) {
            Ok(bytes) => bytes,
            Err(e) => return error_result(format!("Failed to read image '{}': {}", params.path, e)),
        };
        let img = match image::load_from_memory(&bytes) {
            Ok(img) => img,
            Err(e) => {
                return error_result(format!("Failed to decode image '{}': {}", params.path, e));
            }
        };

        // Normalize to PNG so the embedded format is independent of the input.
        let mut png = Vec::new();
        if let Err(e) = img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png) {
            return error_result(format!("Failed to encode image '{}': {}", params.path, e));
        }

        let height = params.width * f64::from(img.height()) / f64::from(img.width());
        let picture = PictureSpec {
            data: png,
            width_emu: (params.width * EMU_PER_INCH) as u32,
            height_emu: (height * EMU_PER_INCH) as u32,
        };
        state.document.with(|m| m.add_picture(picture));

        info!(
            "Added picture '{}' at {:.2}x{:.2} inches",
            params.path, params.width, height
        );
        structured_result(
            format!("Added picture '{}'", params.path),
            &AddPictureResult {
                path: params.path.clone(),
                width: params.width,
                height,
            },
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<AddPictureParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<AddPictureResult>().into()),
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
                let params: AddPictureParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
        })
    }
}
