//! Error mapping for chat-completion responses
//!
//! This module converts non-success HTTP responses from the chat endpoint
//! into our normalized ImproveError type, and pulls whatever diagnostic
//! detail the provider put in the error body.

use reqwest::StatusCode;
use serde_json::Value;

use super::ImproveError;

/// Map a non-success status to an ImproveError
pub fn map_http_error(status: StatusCode) -> ImproveError {
    ImproveError::transport(
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
    )
}

/// Extract the provider's error message from an error body, if any
///
/// Understands the OpenAI-style `{"error": {"message": ...}}` shape as well
/// as flat `{"error": "..."}` and `{"message": "..."}` bodies.
pub fn extract_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<Value>(body).ok()?;

    let message = match json.get("error") {
        Some(Value::Object(error)) => error.get("message").and_then(|m| m.as_str()),
        Some(Value::String(error)) => Some(error.as_str()),
        _ => json.get("message").and_then(|m| m.as_str()),
    };

    message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Helper function to classify HTTP errors by category
pub fn classify_http_error(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "validation",
        401 => "authentication",
        402 | 403 => "authorization",
        404 => "not_found",
        408 => "timeout",
        429 => "rate_limit",
        500..=599 => "server",
        _ => "unknown",
    }
}
