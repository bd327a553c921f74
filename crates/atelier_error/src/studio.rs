//! Orchestrator error taxonomy.

use derive_more::{Display, Error};

/// Terminal failure conditions of a single generation invocation.
///
/// Every variant ends the invocation that raised it; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum StudioErrorKind {
    /// Empty prompt or unusable source image, rejected before any call.
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),

    /// The provider refused the credential, or no credential could be selected.
    #[display("Entitlement error: {}", _0)]
    Entitlement(String),

    /// The response did not parse into the expected structured shape.
    #[display("Response format error: {}", _0)]
    ResponseFormat(String),

    /// The response carried no usable payload.
    #[display("No content: {}", _0)]
    NoContent(String),

    /// Any other transport or provider failure.
    #[display("Generation failed: {}", _0)]
    GenerationFailed(String),

    /// A generation of the same kind is already in flight.
    #[display("A {} generation is already in progress", _0)]
    Busy(String),

    /// The caller cancelled the generation while it was polling.
    #[display("Generation cancelled")]
    Cancelled,

    /// The job did not complete within the configured number of polls.
    #[display("Job still running after {} polls", attempts)]
    PollLimitExceeded {
        /// Polls issued before giving up
        attempts: u32,
    },
}

/// Orchestrator error with location tracking.
///
/// # Examples
///
/// ```
/// use atelier_error::{StudioError, StudioErrorKind};
///
/// let err = StudioError::new(StudioErrorKind::NoContent("no image part".to_string()));
/// assert!(format!("{}", err).contains("no image part"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Studio Error: {} at line {} in {}", kind, line, file)]
pub struct StudioError {
    /// The specific error kind.
    pub kind: StudioErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl StudioError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StudioErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
