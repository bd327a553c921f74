//! Gemini-specific error types and entitlement classification.

/// Message the Gemini API returns when the selected key cannot see a model.
pub const ENTITY_NOT_FOUND: &str = "Requested entity was not found";

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// No API key is currently selected
    MissingApiKey,
    /// Failed to create the HTTP client
    ClientCreation(String),
    /// Request failed before a complete response arrived
    ApiRequest(String),
    /// HTTP error with status code and message
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Base64 decoding failed
    Base64Decode(String),
    /// Long-running operation finished with an error
    OperationFailed(String),
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::MissingApiKey => {
                write!(f, "No Gemini API key selected (set GEMINI_API_KEY)")
            }
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Gemini client: {}", msg)
            }
            GeminiErrorKind::ApiRequest(msg) => write!(f, "Gemini API request failed: {}", msg),
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GeminiErrorKind::Base64Decode(msg) => write!(f, "Base64 decode error: {}", msg),
            GeminiErrorKind::OperationFailed(msg) => {
                write!(f, "Gemini operation failed: {}", msg)
            }
        }
    }
}

impl GeminiErrorKind {
    /// Check if this error means the selected credential is unusable.
    ///
    /// Covers a missing key, authentication/permission statuses, and the
    /// "not found" response the API gives when a key lacks access to a model.
    pub fn is_entitlement(&self) -> bool {
        match self {
            GeminiErrorKind::MissingApiKey => true,
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => matches!(*status_code, 401 | 403 | 404) || message.contains(ENTITY_NOT_FOUND),
            GeminiErrorKind::ApiRequest(msg) | GeminiErrorKind::OperationFailed(msg) => {
                msg.contains(ENTITY_NOT_FOUND)
            }
            _ => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use atelier_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// assert!(err.kind.is_entitlement());
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}
