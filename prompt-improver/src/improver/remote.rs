//! Prompt improvement through the hosted chat model
//!
//! One request per call, no retry. Preconditions are checked before any
//! network traffic, and every failure is logged once here with the
//! credential redacted.

use async_trait::async_trait;
use log::{debug, error, info, warn};

use crate::config::RemoteConfig;
use crate::core::PromptImprover;
use crate::error::{ImproveError, Result};
use crate::improver::prompts;
use crate::services::perplexity::PerplexityClient;
use crate::types::{ImprovementRequest, ImprovementResult};
use crate::util::{generate_request_id, mask_credential, sanitize_for_logging};

/// Improves prompts by asking the hosted model to rewrite them
#[derive(Debug, Clone)]
pub struct RemoteImprover {
    client: PerplexityClient,
}

impl RemoteImprover {
    /// Create an improver configured from the environment
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(PerplexityClient::new()?))
    }

    /// Create an improver with custom configuration
    pub fn with_config(config: RemoteConfig) -> Result<Self> {
        Ok(Self::with_client(PerplexityClient::new_with_config(config)?))
    }

    /// Create an improver over an existing client
    pub fn with_client(client: PerplexityClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &PerplexityClient {
        &self.client
    }

    /// Improve a prompt, folding any failure into the result
    pub async fn improve_prompt(&self, request: &ImprovementRequest) -> ImprovementResult {
        self.improve(request).await.into()
    }

    async fn request_improvement(&self, request_id: &str, request: &ImprovementRequest) -> Result<String> {
        if request.original_prompt.trim().is_empty() {
            return Err(ImproveError::EmptyPrompt);
        }

        let credential = request.credential().ok_or(ImproveError::MissingCredential)?;

        debug!(
            "[{}] Requesting improvement with credential {}",
            request_id,
            mask_credential(credential)
        );

        let body = prompts::build_request(&request.original_prompt);
        let response = self.client.chat_completion(credential, &body).await?;

        response
            .first_content()
            .map(str::to_string)
            .ok_or(ImproveError::EmptyResponse)
    }
}

#[async_trait]
impl PromptImprover for RemoteImprover {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn improve(&self, request: &ImprovementRequest) -> Result<String> {
        let request_id = generate_request_id();

        match self.request_improvement(&request_id, request).await {
            Ok(improved) => {
                info!("[{}] Prompt improved ({} chars)", request_id, improved.chars().count());
                Ok(improved)
            }
            Err(e) if e.is_precondition() => {
                warn!("[{}] Improvement not attempted: {}", request_id, e);
                Err(e)
            }
            Err(e) => {
                error!(
                    "[{}] Error improving prompt: {}",
                    request_id,
                    sanitize_for_logging(&e.to_string())
                );
                Err(e)
            }
        }
    }
}

/// Improve a prompt remotely with a client configured from the environment
///
/// Never fails across the boundary: configuration, validation, transport,
/// and parse failures all come back as a failed `ImprovementResult`.
pub async fn improve_remote(request: &ImprovementRequest) -> ImprovementResult {
    match RemoteImprover::new() {
        Ok(improver) => improver.improve_prompt(request).await,
        Err(e) => {
            error!("Remote improver unavailable: {}", e);
            ImprovementResult::failure(&e)
        }
    }
}
