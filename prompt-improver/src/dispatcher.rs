//! Choosing between the remote and local improvement paths
//!
//! The dispatcher owns one improver per path and routes each call by the
//! caller's local-mode toggle and whether a usable credential was given.
//! It holds no per-call state; concurrent calls do not interact.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::PromptImprover;
use crate::error::{ImproveError, Result};
use crate::improver::{LocalImprover, RemoteImprover};
use crate::types::{ImprovementRequest, ImprovementResult};

/// Which path produced (or would produce) an improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementMode {
    Local,
    Remote,
}

impl ImprovementMode {
    /// Label for the control that triggers an improvement in this mode
    pub fn action_label(&self) -> &'static str {
        match self {
            ImprovementMode::Local => "Improve Prompt (Demo)",
            ImprovementMode::Remote => "Improve Prompt (AI)",
        }
    }

    /// Label shown while an improvement in this mode is in flight
    pub fn progress_label(&self) -> &'static str {
        match self {
            ImprovementMode::Local => "Applying demo improvements...",
            ImprovementMode::Remote => "Analyzing with AI...",
        }
    }
}

/// Pick the path for a call
///
/// Local when the caller asked for it or the credential is blank after
/// trimming; remote otherwise.
pub fn select_mode(credential: &str, use_local_mode: bool) -> ImprovementMode {
    if use_local_mode || credential.trim().is_empty() {
        ImprovementMode::Local
    } else {
        ImprovementMode::Remote
    }
}

/// What a dispatch produced, and through which path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    pub mode: ImprovementMode,
    pub result: ImprovementResult,
}

/// Routes improvement calls to the local or remote improver
pub struct Dispatcher {
    remote: Box<dyn PromptImprover>,
    local: Box<dyn PromptImprover>,
}

impl Dispatcher {
    /// Create a dispatcher whose remote path is configured from the environment
    pub fn new() -> Result<Self> {
        Ok(Self::with_remote(RemoteImprover::new()?))
    }

    /// Create a dispatcher over a specific remote improver
    pub fn with_remote(remote: impl PromptImprover + 'static) -> Self {
        Self::with_improvers(remote, LocalImprover)
    }

    /// Create a dispatcher over explicit improvers for both paths
    pub fn with_improvers(
        remote: impl PromptImprover + 'static,
        local: impl PromptImprover + 'static,
    ) -> Self {
        Self {
            remote: Box::new(remote),
            local: Box::new(local),
        }
    }

    /// Improve a prompt through whichever path the inputs select
    ///
    /// An empty prompt fails with `InvalidInput` before either improver is
    /// touched. The remote path receives the trimmed credential.
    pub async fn improve(&self, prompt: &str, credential: &str, use_local_mode: bool) -> DispatchOutcome {
        let mode = select_mode(credential, use_local_mode);

        if prompt.trim().is_empty() {
            warn!("Rejecting improvement of an empty prompt");
            return DispatchOutcome {
                mode,
                result: ImprovementResult::failure(&ImproveError::EmptyPrompt),
            };
        }

        let (improver, request) = match mode {
            ImprovementMode::Local => (&self.local, ImprovementRequest::new(prompt)),
            ImprovementMode::Remote => (
                &self.remote,
                ImprovementRequest::new(prompt).with_credential(credential.trim()),
            ),
        };

        debug!("Dispatching improvement to the {} improver", improver.name());

        DispatchOutcome {
            mode,
            result: improver.improve(&request).await.into(),
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("remote", &self.remote.name())
            .field("local", &self.local.name())
            .finish()
    }
}

/// Improve a prompt with a dispatcher configured from the environment
pub async fn improve(prompt: &str, credential: &str, use_local_mode: bool) -> ImprovementResult {
    match Dispatcher::new() {
        Ok(dispatcher) => dispatcher.improve(prompt, credential, use_local_mode).await.result,
        Err(e) => ImprovementResult::failure(&e),
    }
}
