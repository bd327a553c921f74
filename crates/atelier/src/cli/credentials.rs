//! Interactive API key selection.

use async_trait::async_trait;
use atelier_error::{AtelierResult, ConfigError, GeminiError, GeminiErrorKind};
use atelier_interface::CredentialProvider;
use atelier_models::ApiKeySlot;
use tracing::{info, instrument, warn};

/// Asks the user for an API key on the terminal.
///
/// Stands in for a hosted key picker: selection blocks until the user
/// enters a key or gives up with an empty line.
#[derive(Debug, Clone)]
pub struct PromptCredentials {
    slot: ApiKeySlot,
}

impl PromptCredentials {
    /// Prompts into the given slot, which may already hold a key.
    pub fn new(slot: ApiKeySlot) -> Self {
        Self { slot }
    }
}

#[async_trait]
impl CredentialProvider for PromptCredentials {
    async fn has_valid_credential(&self) -> bool {
        self.slot.is_set()
    }

    #[instrument(skip(self))]
    async fn select_credential(&self) -> AtelierResult<()> {
        let entered = tokio::task::spawn_blocking(|| {
            dialoguer::Password::new()
                .with_prompt("Gemini API key (empty to cancel)")
                .allow_empty_password(true)
                .interact()
        })
        .await
        .map_err(|e| ConfigError::new(format!("Key prompt task failed: {}", e)))?
        .map_err(|e| ConfigError::new(format!("Failed to get user input: {}", e)))?;

        self.slot.set(entered);
        if self.slot.is_set() {
            info!("API key selected");
            Ok(())
        } else {
            warn!("Key selection cancelled");
            Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into())
        }
    }
}
