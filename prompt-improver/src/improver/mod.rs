//! The two improvement paths
//!
//! - `remote`: rewrite by the hosted chat model, gated on a credential
//! - `local`: deterministic heuristic edits, always available
//! - `prompts`: the fixed instruction and parameters the remote path sends

pub mod local;
pub mod prompts;
pub mod remote;

pub use local::{improve_local, LocalImprover};
pub use prompts::IMPROVEMENTS_SUMMARY;
pub use remote::{improve_remote, RemoteImprover};
