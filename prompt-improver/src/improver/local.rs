//! Deterministic prompt improvement without a network call
//!
//! A fixed sequence of edits, each applied only when the prompt does not
//! already mention what the edit would add. Each check sees the prompt as
//! left by the previous edits.

use async_trait::async_trait;

use crate::core::PromptImprover;
use crate::error::Result;
use crate::types::ImprovementRequest;

enum Edit {
    Prepend(&'static str),
    Append(&'static str),
}

struct Rule {
    /// Skip the edit when the prompt already contains this
    marker: &'static str,
    /// Match the marker against the lowercased prompt
    ignore_case: bool,
    edit: Edit,
}

impl Rule {
    fn applies_to(&self, prompt: &str) -> bool {
        if self.ignore_case {
            !prompt.to_lowercase().contains(self.marker)
        } else {
            !prompt.contains(self.marker)
        }
    }

    fn apply(&self, prompt: &mut String) {
        match self.edit {
            Edit::Prepend(prefix) => prompt.insert_str(0, prefix),
            Edit::Append(suffix) => prompt.push_str(suffix),
        }
    }
}

const RULES: &[Rule] = &[
    Rule {
        marker: "detailed",
        ignore_case: false,
        edit: Edit::Prepend("Create a detailed "),
    },
    Rule {
        marker: "high quality",
        ignore_case: true,
        edit: Edit::Append(", ensuring high quality output"),
    },
    Rule {
        marker: "style",
        ignore_case: false,
        edit: Edit::Append(", maintaining a professional and engaging style"),
    },
    Rule {
        marker: "format",
        ignore_case: false,
        edit: Edit::Append(". Present the information in a clear, well-structured format"),
    },
    Rule {
        marker: "example",
        ignore_case: false,
        edit: Edit::Append(", including relevant examples where appropriate"),
    },
];

/// Improve a prompt with the fixed local heuristics
///
/// Pure and infallible. The input is trimmed once; nothing else is
/// normalized.
pub fn improve_local(text: &str) -> String {
    let mut improved = text.trim().to_string();

    for rule in RULES {
        if rule.applies_to(&improved) {
            rule.apply(&mut improved);
        }
    }

    improved
}

/// `PromptImprover` over `improve_local`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalImprover;

#[async_trait]
impl PromptImprover for LocalImprover {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn improve(&self, request: &ImprovementRequest) -> Result<String> {
        Ok(improve_local(&request.original_prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CLAUSES: &str = ", ensuring high quality output, maintaining a professional and engaging style. Present the information in a clear, well-structured format, including relevant examples where appropriate";

    #[test]
    fn test_plain_prompt_gets_every_edit() {
        assert_eq!(
            improve_local("Write a blog post about AI"),
            "Create a detailed Write a blog post about AI, ensuring high quality output, maintaining a professional and engaging style. Present the information in a clear, well-structured format, including relevant examples where appropriate"
        );
    }

    #[test]
    fn test_empty_prompt_gets_every_edit() {
        assert_eq!(improve_local(""), format!("Create a detailed {}", ALL_CLAUSES));
    }

    #[test]
    fn test_input_is_trimmed_once() {
        assert_eq!(
            improve_local("  Write a blog post about AI \n"),
            improve_local("Write a blog post about AI")
        );
    }

    #[test]
    fn test_existing_style_skips_style_clause() {
        let improved = improve_local("Write in a casual style");
        assert!(!improved.contains("professional and engaging style"));
        assert_eq!(
            improved,
            "Create a detailed Write in a casual style, ensuring high quality output. Present the information in a clear, well-structured format, including relevant examples where appropriate"
        );
    }

    #[test]
    fn test_detailed_skips_prefix() {
        let improved = improve_local("A detailed plan");
        assert!(improved.starts_with("A detailed plan,"));
    }

    #[test]
    fn test_high_quality_check_ignores_case() {
        let improved = improve_local("detailed HIGH QUALITY essay");
        assert!(!improved.contains("ensuring high quality output"));
    }

    #[test]
    fn test_other_markers_are_case_sensitive() {
        let improved = improve_local("detailed essay in my own Style");
        assert!(improved.contains("maintaining a professional and engaging style"));
    }

    #[test]
    fn test_output_contains_every_marker() {
        // A second pass has nothing left to add
        let once = improve_local("Write a haiku");
        assert_eq!(improve_local(&once), once);
    }

    #[test]
    fn test_all_markers_present_leaves_prompt_alone() {
        let prompt = "A detailed, high quality guide in a friendly style, markdown format, with an example";
        assert_eq!(improve_local(prompt), prompt);
    }

    #[test]
    fn test_deterministic() {
        let prompt = "Explain ownership in Rust";
        assert_eq!(improve_local(prompt), improve_local(prompt));
    }

    #[tokio::test]
    async fn test_local_improver_never_fails() {
        let request = ImprovementRequest::new("Write a blog post about AI");
        let improved = LocalImprover.improve(&request).await.unwrap();
        assert_eq!(improved, improve_local("Write a blog post about AI"));
    }
}
