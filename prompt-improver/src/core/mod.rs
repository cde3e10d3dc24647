//! Core abstractions for the prompt improver
//!
//! This module provides the trait interfaces at the seams of the crate:
//!
//! - `ServiceClient`: identity of an outbound HTTP client
//! - `PromptImprover`: one strategy for turning a prompt into a better one

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ImprovementRequest;

/// Base trait for outbound service clients
pub trait ServiceClient: Send + Sync {
    /// The client name/identifier
    fn name(&self) -> &str;

    /// The base URL for the service
    fn base_url(&self) -> &str;
}

/// A strategy that improves a prompt
///
/// Implementations return the improved text, never empty, or the reason they
/// could not produce one. Folding that into an `ImprovementResult` is the
/// caller's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PromptImprover: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Improve the request's prompt
    async fn improve(&self, request: &ImprovementRequest) -> Result<String>;
}
