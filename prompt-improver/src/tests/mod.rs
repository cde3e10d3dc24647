//! Cross-module tests for the prompt improver
//!
//! Unit tests live next to the code they cover; these exercise the paths
//! end to end against a mock chat endpoint.

pub mod config_tests;
