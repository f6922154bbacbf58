//! Common utilities shared across the Azure ML tools.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Join formatted entries under a `Found N ...` header, or return the
/// given empty-collection message.
pub fn format_listing(header: String, entries: Vec<String>, empty_message: &str) -> String {
    if entries.is_empty() {
        return empty_message.to_string();
    }
    format!("{}\n{}", header, entries.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_error_result_is_flagged() {
        let result = error_result("something broke");
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "something broke");
    }

    #[test]
    fn test_success_result() {
        let result = success_result("all good".to_string());
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "all good");
    }

    #[test]
    fn test_format_listing_empty() {
        let out = format_listing("Found 0 things:".to_string(), vec![], "No things found.");
        assert_eq!(out, "No things found.");
    }

    #[test]
    fn test_format_listing_joins_lines() {
        let out = format_listing(
            "Found 2 things:".to_string(),
            vec!["a".to_string(), "b".to_string()],
            "No things found.",
        );
        assert_eq!(out, "Found 2 things:\na\nb");
    }
}
