//! Fixed instructions and generation parameters for the remote path
//!
//! Every value here is part of the reproducibility contract with the hosted
//! model. None of them are exposed to callers.

use crate::services::perplexity::{ChatCompletionRequest, ChatMessage};

/// Hosted model used for every remote improvement
pub const MODEL: &str = "llama-3.1-sonar-small-128k-online";

pub const TEMPERATURE: f64 = 0.3;
pub const TOP_P: f64 = 0.9;
pub const MAX_TOKENS: u32 = 1500;
pub const FREQUENCY_PENALTY: f64 = 0.1;
pub const PRESENCE_PENALTY: f64 = 0.0;

/// System instruction sent ahead of every prompt
pub const SYSTEM_PROMPT: &str = r#"You are an expert AI prompt engineer. Your role is to analyze and improve user prompts to make them more effective, specific, and likely to produce high-quality results from AI models.

When improving a prompt, consider these key principles:

1. **Clarity & Specificity**: Make vague requests more specific and actionable
2. **Context & Background**: Add relevant context that helps the AI understand the use case
3. **Structure & Format**: Specify desired output format, length, and structure
4. **Role Definition**: Define the AI's role or expertise area when appropriate
5. **Examples & Constraints**: Include examples or constraints to guide the response
6. **Tone & Style**: Specify the desired tone, style, or audience level

Your improvements should:
- Preserve the original intent while making it more effective
- Add specific details that enhance clarity without being overwhelming
- Include formatting instructions when the output structure matters
- Suggest relevant context or background information
- Maintain a natural, conversational flow
- Be concise but comprehensive

Return ONLY the improved prompt without any explanation or meta-commentary. The improved prompt should be ready to use immediately."#;

/// Short description of what an improvement adds, for display next to results
pub const IMPROVEMENTS_SUMMARY: &str = "Enhanced specificity, added context requirements, improved structure guidelines, and optimized for better AI comprehension.";

/// Wrap the user's prompt in the fixed request phrase
pub fn user_message(original_prompt: &str) -> String {
    format!("Please improve this prompt:\n\n\"{}\"", original_prompt)
}

/// Build the complete chat completion body for a prompt
pub fn build_request(original_prompt: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: MODEL.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_message(original_prompt)),
        ],
        temperature: TEMPERATURE,
        top_p: TOP_P,
        max_tokens: MAX_TOKENS,
        return_images: false,
        return_related_questions: false,
        frequency_penalty: FREQUENCY_PENALTY,
        presence_penalty: PRESENCE_PENALTY,
    }
}
