//! Long-running video job state.

use crate::prompts::{STATUS_FETCHING, STATUS_POLLING, STATUS_STARTING};
use serde::{Deserialize, Serialize};

/// Provider-side handle to an in-flight video operation.
///
/// Each poll returns a fresh handle that replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct JobHandle {
    /// Opaque operation identifier
    id: String,
    /// Whether the provider reports the operation finished
    done: bool,
    /// Provider reference to the result video, once done
    result_uri: Option<String>,
    /// Provider-reported failure, once done
    error: Option<String>,
}

impl JobHandle {
    /// A handle for an operation that is still running.
    pub fn pending(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            done: false,
            result_uri: None,
            error: None,
        }
    }

    /// A handle for a finished operation, with its result reference if any.
    pub fn completed(id: impl Into<String>, result_uri: Option<String>) -> Self {
        Self {
            id: id.into(),
            done: true,
            result_uri,
            error: None,
        }
    }

    /// A handle for an operation the provider reports as failed.
    pub fn failed(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            done: true,
            result_uri: None,
            error: Some(error.into()),
        }
    }
}

/// Progress of one video generation.
///
/// `Idle → Submitting → Polling → Fetching → Complete`, with `Failed`
/// reachable from every non-terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum VideoPhase {
    /// Nothing in flight
    #[default]
    Idle,
    /// Job submission in progress
    Submitting,
    /// Waiting on the provider
    Polling {
        /// Number of the next poll, starting at 1
        attempt: u32,
    },
    /// Downloading the finished video
    Fetching,
    /// Video available
    Complete,
    /// Generation ended with an error
    Failed,
}

impl VideoPhase {
    /// True for `Complete` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, VideoPhase::Complete | VideoPhase::Failed)
    }

    /// True while a job is in flight.
    pub fn is_active(&self) -> bool {
        !self.is_terminal() && *self != VideoPhase::Idle
    }

    /// Human-readable status line for the phase, if one is shown.
    pub fn status_line(&self) -> Option<&'static str> {
        match self {
            VideoPhase::Submitting => Some(STATUS_STARTING),
            VideoPhase::Polling { .. } => Some(STATUS_POLLING),
            VideoPhase::Fetching => Some(STATUS_FETCHING),
            _ => None,
        }
    }
}
