//! Request and result values exchanged with callers

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, ImproveError};

/// A single improvement request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementRequest {
    /// The user's prompt, as typed
    pub original_prompt: String,

    /// API key for the remote path
    #[serde(default, skip_serializing)]
    pub credential: Option<String>,
}

impl ImprovementRequest {
    pub fn new(original_prompt: impl Into<String>) -> Self {
        Self {
            original_prompt: original_prompt.into(),
            credential: None,
        }
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// The credential, if one is present and not blank
    pub fn credential(&self) -> Option<&str> {
        self.credential
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Normalized outcome of either improvement path
///
/// A successful result always has non-empty text and no error; a failed one
/// always has empty text and an error. Values come from `failure`, from a
/// `Result<String, ImproveError>`, or from deserializing a shape that holds
/// the same rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawImprovementResult")]
pub struct ImprovementResult {
    improved_text: String,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<ErrorKind>,
}

impl ImprovementResult {
    pub(crate) fn success(improved_text: impl Into<String>) -> Self {
        let improved_text = improved_text.into();
        debug_assert!(!improved_text.is_empty());

        Self {
            improved_text,
            success: true,
            error: None,
            error_kind: None,
        }
    }

    pub fn failure(error: &ImproveError) -> Self {
        Self {
            improved_text: String::new(),
            success: false,
            error: Some(error.to_string()),
            error_kind: Some(error.kind()),
        }
    }

    pub fn improved_text(&self) -> &str {
        &self.improved_text
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error_kind
    }
}

impl From<Result<String, ImproveError>> for ImprovementResult {
    fn from(result: Result<String, ImproveError>) -> Self {
        match result {
            Ok(text) if text.is_empty() => Self::failure(&ImproveError::EmptyResponse),
            Ok(text) => Self::success(text),
            Err(e) => Self::failure(&e),
        }
    }
}

/// Wire shape of `ImprovementResult`, checked before it becomes one
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImprovementResult {
    #[serde(default)]
    improved_text: String,
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_kind: Option<ErrorKind>,
}

impl TryFrom<RawImprovementResult> for ImprovementResult {
    type Error = String;

    fn try_from(raw: RawImprovementResult) -> Result<Self, Self::Error> {
        let consistent = if raw.success {
            !raw.improved_text.is_empty() && raw.error.is_none() && raw.error_kind.is_none()
        } else {
            raw.improved_text.is_empty() && raw.error.is_some() && raw.error_kind.is_some()
        };

        if !consistent {
            return Err(format!(
                "inconsistent improvement result: success={} with {} text and {} error",
                raw.success,
                if raw.improved_text.is_empty() { "empty" } else { "non-empty" },
                if raw.error.is_some() { "an" } else { "no" },
            ));
        }

        Ok(Self {
            improved_text: raw.improved_text,
            success: raw.success,
            error: raw.error,
            error_kind: raw.error_kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_is_trimmed_and_blank_is_absent() {
        let request = ImprovementRequest::new("p").with_credential("  key  ");
        assert_eq!(request.credential(), Some("key"));

        let request = ImprovementRequest::new("p").with_credential("   ");
        assert_eq!(request.credential(), None);

        assert_eq!(ImprovementRequest::new("p").credential(), None);
    }

    #[test]
    fn test_result_invariants() {
        let ok = ImprovementResult::success("better prompt");
        assert!(ok.is_success());
        assert_eq!(ok.improved_text(), "better prompt");
        assert!(ok.error().is_none());
        assert!(ok.error_kind().is_none());

        let failed = ImprovementResult::failure(&ImproveError::MissingCredential);
        assert!(!failed.is_success());
        assert!(failed.improved_text().is_empty());
        assert_eq!(failed.error(), Some("API key is required"));
        assert_eq!(failed.error_kind(), Some(ErrorKind::MissingCredential));
    }

    #[test]
    fn test_result_serializes_camel_case_without_absent_error() {
        let ok = serde_json::to_value(ImprovementResult::success("x")).unwrap();
        assert_eq!(ok, serde_json::json!({ "improvedText": "x", "success": true }));

        let failed = serde_json::to_value(ImprovementResult::failure(&ImproveError::EmptyResponse)).unwrap();
        assert_eq!(failed["errorKind"], "EmptyResponse");
        assert_eq!(failed["improvedText"], "");
    }

    #[test]
    fn test_request_never_serializes_credential() {
        let request = ImprovementRequest::new("p").with_credential("secret");
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_empty_ok_becomes_empty_response() {
        let result = ImprovementResult::from(Ok::<String, ImproveError>(String::new()));

        assert!(!result.is_success());
        assert!(result.improved_text().is_empty());
        assert_eq!(result.error_kind(), Some(ErrorKind::EmptyResponse));
        assert_eq!(result.error(), Some("No improved prompt received from API"));
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_results() {
        let inconsistent = [
            r#"{"improvedText":"","success":true,"error":"boom"}"#,
            r#"{"improvedText":"","success":true}"#,
            r#"{"improvedText":"text","success":true,"error":"boom","errorKind":"UnknownError"}"#,
            r#"{"improvedText":"text","success":false,"error":"boom","errorKind":"UnknownError"}"#,
            r#"{"improvedText":"","success":false}"#,
            r#"{"improvedText":"","success":false,"error":"boom"}"#,
        ];

        for json in inconsistent {
            assert!(
                serde_json::from_str::<ImprovementResult>(json).is_err(),
                "accepted: {}",
                json
            );
        }
    }

    #[test]
    fn test_deserialize_accepts_serialized_results() {
        for result in [
            ImprovementResult::success("better prompt"),
            ImprovementResult::failure(&ImproveError::transport(401, "Unauthorized")),
        ] {
            let json = serde_json::to_string(&result).unwrap();
            let parsed: ImprovementResult = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, result);
        }
    }
}
