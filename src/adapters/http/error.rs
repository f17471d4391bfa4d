//! Error body shared by every endpoint.

use serde::{Deserialize, Serialize};

/// JSON error body.
///
/// `code` is omitted only for the bare `{"error": "Major is required"}`
/// response, which clients match on literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    /// Create an error response with a machine-readable code.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: Some(code.into()),
        }
    }

    /// Create an error response carrying only a message.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_code_when_present() {
        let json = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "missing")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "missing", "code": "NOT_FOUND"}));
    }

    #[test]
    fn omits_code_when_absent() {
        let json = serde_json::to_value(ErrorResponse::message_only("Major is required")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Major is required"}));
    }
}
