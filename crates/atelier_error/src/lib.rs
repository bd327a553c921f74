//! Error types for the Atelier creative generation orchestrator.
//!
//! Every error records the file and line where it was created. Leaf error
//! types are collected into [`AtelierErrorKind`], wrapped by [`AtelierError`].

mod config;
mod gemini;
mod http;
mod studio;

pub use config::ConfigError;
pub use gemini::{ENTITY_NOT_FOUND, GeminiError, GeminiErrorKind};
pub use http::{HttpError, JsonError};
pub use studio::{StudioError, StudioErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum AtelierErrorKind {
    /// HTTP error
    Http(HttpError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Configuration error
    Config(ConfigError),
    /// Gemini provider error
    Gemini(GeminiError),
    /// Orchestrator error
    Studio(StudioError),
}

impl std::fmt::Display for AtelierErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtelierErrorKind::Http(e) => write!(f, "{}", e),
            AtelierErrorKind::Json(e) => write!(f, "{}", e),
            AtelierErrorKind::Config(e) => write!(f, "{}", e),
            AtelierErrorKind::Gemini(e) => write!(f, "{}", e),
            AtelierErrorKind::Studio(e) => write!(f, "{}", e),
        }
    }
}

/// Atelier error with kind discrimination.
#[derive(Debug)]
pub struct AtelierError(Box<AtelierErrorKind>);

impl AtelierError {
    /// Create a new error from a kind.
    pub fn new(kind: AtelierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AtelierErrorKind {
        &self.0
    }

    /// The orchestrator error kind, if this is one.
    pub fn studio_kind(&self) -> Option<&StudioErrorKind> {
        match self.kind() {
            AtelierErrorKind::Studio(e) => Some(&e.kind),
            _ => None,
        }
    }

    /// True when the failure is due to a missing or rejected credential.
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_error::{AtelierError, GeminiError, GeminiErrorKind, HttpError};
    ///
    /// let denied: AtelierError = GeminiError::new(GeminiErrorKind::HttpError {
    ///     status_code: 404,
    ///     message: "Requested entity was not found.".to_string(),
    /// })
    /// .into();
    /// assert!(denied.is_entitlement());
    ///
    /// let offline: AtelierError = HttpError::new("connection reset").into();
    /// assert!(!offline.is_entitlement());
    /// ```
    pub fn is_entitlement(&self) -> bool {
        match self.kind() {
            AtelierErrorKind::Gemini(e) => e.kind.is_entitlement(),
            AtelierErrorKind::Studio(e) => matches!(e.kind, StudioErrorKind::Entitlement(_)),
            _ => false,
        }
    }
}

impl std::fmt::Display for AtelierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Atelier Error: {}", self.0)
    }
}

impl std::error::Error for AtelierError {}

// Generic From implementation for any type that converts to AtelierErrorKind
impl<T> From<T> for AtelierError
where
    T: Into<AtelierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Atelier operations.
pub type AtelierResult<T> = std::result::Result<T, AtelierError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status_code: u16, message: &str) -> AtelierError {
        GeminiError::new(GeminiErrorKind::HttpError {
            status_code,
            message: message.to_string(),
        })
        .into()
    }

    #[test]
    fn test_auth_statuses_are_entitlement() {
        assert!(http(401, "unauthenticated").is_entitlement());
        assert!(http(403, "permission denied").is_entitlement());
        assert!(http(404, "model missing").is_entitlement());
    }

    #[test]
    fn test_entity_not_found_message_is_entitlement_regardless_of_status() {
        assert!(http(400, "Requested entity was not found.").is_entitlement());
    }

    #[test]
    fn test_server_errors_are_not_entitlement() {
        assert!(!http(500, "internal").is_entitlement());
        assert!(!http(429, "quota").is_entitlement());
    }

    #[test]
    fn test_transport_failures_classify_by_message() {
        let lost: AtelierError =
            GeminiError::new(GeminiErrorKind::ApiRequest("connection reset".to_string())).into();
        assert!(!lost.is_entitlement());
        assert!(lost.to_string().contains("Gemini API request failed: connection reset"));

        let hidden: AtelierError = GeminiError::new(GeminiErrorKind::ApiRequest(
            "Requested entity was not found.".to_string(),
        ))
        .into();
        assert!(hidden.is_entitlement());
    }

    #[test]
    fn test_json_errors_are_not_entitlement() {
        let err: AtelierError = JsonError::new("expected value at line 1 column 1").into();
        assert!(!err.is_entitlement());
        assert!(err.studio_kind().is_none());
        assert!(err.to_string().starts_with("JSON Error: expected value"));
    }

    #[test]
    fn test_studio_kind_accessor() {
        let err: AtelierError = StudioError::new(StudioErrorKind::Cancelled).into();
        assert_eq!(err.studio_kind(), Some(&StudioErrorKind::Cancelled));

        let err: AtelierError = ConfigError::new("bad").into();
        assert!(err.studio_kind().is_none());
    }

    #[test]
    fn test_location_is_recorded() {
        let err = StudioError::new(StudioErrorKind::Busy("video".to_string()));
        assert!(err.file.ends_with("lib.rs"));
        assert!(err.line > 0);
        assert!(err.to_string().contains("video generation is already in progress"));
    }
}
