//! Service-specific client implementations
//!
//! This module contains client implementations for specific external services.

pub mod common;
pub mod perplexity;

pub use common::UserAgent;
