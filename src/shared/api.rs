/**
 * API Response Envelope
 *
 * Every JSON endpoint answers with the same envelope so clients can branch on
 * `success` without inspecting status codes:
 *
 * ```json
 * { "success": true, "message": "Login successful", "data": { ... } }
 * { "success": false, "message": "Registration failed", "error": "..." }
 * ```
 */
use serde::{Deserialize, Serialize};

/// JSON envelope returned by all API handlers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// Payload for successful requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Underlying failure detail, only present on server errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with no payload (logout, delete)
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    /// Failed response
    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error,
        }
    }
}
