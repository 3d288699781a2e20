//! Common utilities shared across tool definitions.
//!
//! This module provides the result-shaping helpers every tool uses: plain
//! text success, error results, and success results carrying structured
//! content alongside a human-readable summary.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Create an error result with a formatted message.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Create a success result with a text summary plus structured content.
pub fn structured_result(summary: impl Into<String>, value: &impl Serialize) -> CallToolResult {
    match serde_json::to_value(value) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(summary.into())],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => error_result(format!("Failed to serialize tool result: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_error_result_is_flagged() {
        let result = error_result("boom");
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "boom");
    }

    #[test]
    fn test_success_result_is_not_flagged() {
        let result = success_result("done");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "done");
    }

    #[test]
    fn test_structured_result_carries_both_channels() {
        #[derive(Serialize)]
        struct Out {
            id: &'static str,
        }
        let result = structured_result("Saved", &Out { id: "p0" });
        assert_eq!(result_text(&result), "Saved");
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["id"], "p0");
    }
}
