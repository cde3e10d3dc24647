//! # Prompt Improver
//!
//! Turns a user-written prompt into a more effective one.
//!
//! This crate provides:
//!
//! - A remote improver that asks a hosted chat model to rewrite the prompt
//! - A deterministic local improver used when no credential is available
//! - A dispatcher that picks between them per call
//! - A single result shape for both paths, so callers never handle a raised
//!   error
//!
//! ## Architecture
//!
//! - `PromptImprover`: the trait both paths implement
//! - `Dispatcher`: routes a call by local-mode toggle and credential presence
//! - `PerplexityClient`: typed client for the chat completions endpoint
//! - `ImprovementResult`: `{ improved_text, success, error }`, with the
//!   invariant that exactly one of text and error is present
//! - `ImproveError`: every failure the remote path can report

// Core seam traits
pub mod core;
pub use core::{PromptImprover, ServiceClient};

// Request and result values
pub mod types;
pub use types::{ImprovementRequest, ImprovementResult};

// Improvement paths
pub mod improver;
pub use improver::{improve_local, improve_remote, LocalImprover, RemoteImprover, IMPROVEMENTS_SUMMARY};

// Path selection
pub mod dispatcher;
pub use dispatcher::{improve, select_mode, DispatchOutcome, Dispatcher, ImprovementMode};

// Caller notification copy
pub mod notice;
pub use notice::Notice;

// External service clients
pub mod services;
pub use services::perplexity::PerplexityClient;

// Error handling
pub mod error;
pub use error::{ErrorKind, ImproveError, Result};

// Configuration management
pub mod config;
pub use config::{ConfigProvider, RemoteConfig};

// Utility module for common functionality
mod util;

#[cfg(test)]
mod tests;
