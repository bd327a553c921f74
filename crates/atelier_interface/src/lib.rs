//! Trait definitions for the Atelier creative generation orchestrator.
//!
//! The orchestrator only talks to the outside world through these seams:
//! a [`GenerativeProvider`] for model calls, a [`CredentialProvider`] for
//! entitlement, and a [`ProgressReporter`] for status lines.

mod credential;
mod progress;
mod provider;

pub use credential::CredentialProvider;
pub use progress::{ProgressReporter, TracingReporter};
pub use provider::{ContentPart, GenerativeProvider, ImagePrompt, StructuredPrompt, VideoPrompt};
