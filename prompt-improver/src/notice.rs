//! Caller-facing notification copy for a finished dispatch

use serde::{Deserialize, Serialize};

use crate::dispatcher::{DispatchOutcome, ImprovementMode};
use crate::error::ErrorKind;

/// A short message a caller can surface after an improvement attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub is_error: bool,
}

impl Notice {
    fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            is_error: false,
        }
    }

    fn error(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            is_error: true,
        }
    }
}

impl From<&DispatchOutcome> for Notice {
    fn from(outcome: &DispatchOutcome) -> Self {
        let result = &outcome.result;

        if result.is_success() {
            return match outcome.mode {
                ImprovementMode::Local => Notice::info(
                    "Prompt improved!",
                    "Your prompt has been enhanced with demo improvements.",
                ),
                ImprovementMode::Remote => Notice::info(
                    "Prompt improved!",
                    "Your prompt has been enhanced using AI analysis.",
                ),
            };
        }

        if result.error_kind() == Some(ErrorKind::InvalidInput) {
            return Notice::error("Please enter a prompt", "The prompt field cannot be empty");
        }

        Notice::error(
            "Error improving prompt",
            result.error().unwrap_or("Failed to improve prompt"),
        )
    }
}
