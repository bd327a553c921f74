//! Structured cake recommendation.

use atelier_error::{StudioError, StudioErrorKind};
use serde::{Deserialize, Serialize};

/// A suggested cake and the reason it suits the occasion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Recommendation {
    /// Name of the suggested creation
    name: String,
    /// Why it fits the occasion
    reason: String,
}

impl Recommendation {
    /// Creates a recommendation from its two fields.
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Parses the provider's JSON text.
    ///
    /// Fields are returned exactly as sent. Invalid JSON, a missing field, or
    /// an empty field is a [`StudioErrorKind::ResponseFormat`] error.
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_core::Recommendation;
    ///
    /// let rec = Recommendation::from_json(r#"{"name":"Surprise Étoilée","reason":"Festive"}"#).unwrap();
    /// assert_eq!(rec.name(), "Surprise Étoilée");
    ///
    /// assert!(Recommendation::from_json(r#"{"name":"Opéra"}"#).is_err());
    /// ```
    #[track_caller]
    pub fn from_json(text: &str) -> Result<Self, StudioError> {
        let parsed: Self = serde_json::from_str(text).map_err(|e| {
            StudioError::new(StudioErrorKind::ResponseFormat(format!(
                "recommendation is not valid JSON: {}",
                e
            )))
        })?;

        if parsed.name.trim().is_empty() || parsed.reason.trim().is_empty() {
            return Err(StudioError::new(StudioErrorKind::ResponseFormat(
                "recommendation has an empty field".to_string(),
            )));
        }

        Ok(parsed)
    }
}
