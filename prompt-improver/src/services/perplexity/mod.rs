//! Perplexity API client implementation
//!
//! This module provides a strongly-typed client for Perplexity's
//! OpenAI-compatible chat completions endpoint. The client holds the HTTP
//! connection pool and endpoint configuration; the bearer credential is
//! supplied per call, so one client can serve requests for different keys.

mod models;
pub use models::*;

use std::time::Duration;

use log::{debug, warn};
use reqwest::{header, Client};

use crate::config::{RemoteConfig, ServiceConfig};
use crate::core::ServiceClient;
use crate::error::mapping::{classify_http_error, extract_error_message, map_http_error};
use crate::error::Result;
use crate::services::common::{build_http_client, UserAgent};
use crate::util::{measure_time_async, sanitize_for_logging, truncate_string};

/// Chat completions endpoint, relative to the configured base URL
pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

/// Perplexity API client
#[derive(Debug, Clone)]
pub struct PerplexityClient {
    /// HTTP client
    http_client: Client,

    /// Configuration
    config: RemoteConfig,
}

impl PerplexityClient {
    /// Create a client configured from the environment
    pub fn new() -> Result<Self> {
        Self::new_with_config(RemoteConfig::from_env())
    }

    /// Create a client with custom configuration
    pub fn new_with_config(config: RemoteConfig) -> Result<Self> {
        config.validate()?;

        let http_client = build_http_client(
            Some(UserAgent {
                extra: Some("Perplexity-Client".to_string()),
                ..UserAgent::default()
            }),
            config.timeout,
        )?;

        Ok(Self { http_client, config })
    }

    /// Create a new builder for the client
    pub fn builder() -> PerplexityClientBuilder {
        PerplexityClientBuilder::default()
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Send a chat completion request
    ///
    /// Issues exactly one POST. Non-success statuses become
    /// `ImproveError::Transport`; a success body that is not valid JSON is
    /// treated as carrying no completion.
    pub async fn chat_completion(
        &self,
        credential: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = self.config.endpoint(CHAT_COMPLETIONS_PATH);
        debug!("Sending request to Perplexity: POST {}", url);

        let (response, elapsed) = measure_time_async(|| {
            self.http_client
                .post(&url)
                .header(header::AUTHORIZATION, format!("Bearer {}", credential))
                .header(header::CONTENT_TYPE, "application/json")
                .json(request)
                .send()
        })
        .await;

        let response = response?;
        let status = response.status();
        debug!(
            "Perplexity responded {} in {:.2}ms",
            status.as_u16(),
            elapsed.as_secs_f64() * 1000.0
        );

        if !status.is_success() {
            // Body only feeds the log line; the error itself is status based
            let body = response.text().await.unwrap_or_default();
            let detail = extract_error_message(&body).unwrap_or_else(|| truncate_string(&body, 200));
            warn!(
                "Perplexity request rejected ({}, {}): {}",
                status.as_u16(),
                classify_http_error(status),
                sanitize_for_logging(&detail)
            );
            return Err(map_http_error(status));
        }

        let body = response.text().await?;

        match serde_json::from_str::<ChatCompletionResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                warn!(
                    "Unparseable chat completion body ({}): {}",
                    e,
                    sanitize_for_logging(&truncate_string(&body, 200))
                );
                Ok(ChatCompletionResponse::default())
            }
        }
    }
}

impl ServiceClient for PerplexityClient {
    fn name(&self) -> &str {
        "perplexity"
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

/// Builder for the Perplexity client
#[derive(Debug, Default)]
pub struct PerplexityClientBuilder {
    /// Base URL for the API
    base_url: Option<String>,

    /// Request timeout
    timeout: Option<Duration>,
}

impl PerplexityClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    ///
    /// Starts from the environment configuration and overrides it with
    /// whatever was set explicitly.
    pub fn build(self) -> Result<PerplexityClient> {
        let mut config = RemoteConfig::from_env();

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        if let Some(timeout) = self.timeout {
            config.timeout = Some(timeout);
        }

        PerplexityClient::new_with_config(config)
    }
}
