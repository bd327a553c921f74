//! API key storage and non-interactive credential providers.

use async_trait::async_trait;
use atelier_error::{AtelierResult, GeminiError, GeminiErrorKind};
use atelier_interface::CredentialProvider;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// The currently selected API key, shared between the client and the
/// credential provider that selects it.
#[derive(Clone, Default)]
pub struct ApiKeySlot(Arc<RwLock<Option<String>>>);

impl ApiKeySlot {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with a key.
    pub fn with_key(key: impl Into<String>) -> Self {
        let slot = Self::new();
        slot.set(key);
        slot
    }

    /// The selected key, if any.
    pub fn get(&self) -> Option<String> {
        self.0.read().clone()
    }

    /// Selects a key. Blank keys clear the slot.
    pub fn set(&self, key: impl Into<String>) {
        let key = key.into();
        let key = key.trim();
        *self.0.write() = (!key.is_empty()).then(|| key.to_string());
    }

    /// Forgets the selected key.
    pub fn clear(&self) {
        *self.0.write() = None;
    }

    /// Whether a key is selected.
    pub fn is_set(&self) -> bool {
        self.0.read().is_some()
    }
}

impl std::fmt::Debug for ApiKeySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.is_set() { "<redacted>" } else { "<empty>" };
        f.debug_tuple("ApiKeySlot").field(&state).finish()
    }
}

/// Selects the key from an environment variable.
///
/// Selection re-reads the variable, so a key exported after start-up (or
/// loaded from `.env`) is picked up by the next selection.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    slot: ApiKeySlot,
    var: String,
}

impl EnvCredentials {
    /// Reads `GEMINI_API_KEY` into the given slot.
    pub fn new(slot: ApiKeySlot) -> Self {
        Self::from_var(slot, API_KEY_VAR)
    }

    /// Reads a custom variable into the given slot.
    pub fn from_var(slot: ApiKeySlot, var: impl Into<String>) -> Self {
        let credentials = Self {
            slot,
            var: var.into(),
        };
        credentials.load();
        credentials
    }

    /// The slot this provider fills.
    pub fn slot(&self) -> &ApiKeySlot {
        &self.slot
    }

    fn load(&self) -> bool {
        match std::env::var(&self.var) {
            Ok(key) if !key.trim().is_empty() => {
                self.slot.set(key);
                true
            }
            _ => false,
        }
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentials {
    async fn has_valid_credential(&self) -> bool {
        self.slot.is_set()
    }

    #[instrument(skip(self), fields(var = %self.var))]
    async fn select_credential(&self) -> AtelierResult<()> {
        if self.load() {
            info!("API key selected from environment");
            Ok(())
        } else {
            warn!("API key variable not set");
            Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into())
        }
    }
}

/// A fixed key that selection cannot change.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    slot: ApiKeySlot,
}

impl StaticCredentials {
    /// Selects `key` into a fresh slot.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            slot: ApiKeySlot::with_key(key),
        }
    }

    /// The slot holding the key.
    pub fn slot(&self) -> &ApiKeySlot {
        &self.slot
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn has_valid_credential(&self) -> bool {
        self.slot.is_set()
    }

    async fn select_credential(&self) -> AtelierResult<()> {
        debug!("Static credentials cannot be reselected");
        if self.slot.is_set() {
            Ok(())
        } else {
            Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into())
        }
    }
}
