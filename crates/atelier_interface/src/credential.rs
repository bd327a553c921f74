//! Credential selection seam.

use async_trait::async_trait;
use atelier_error::AtelierResult;

/// Holder of the entitlement needed to call the provider.
///
/// The orchestrator checks [`has_valid_credential`](Self::has_valid_credential)
/// before every provider call and runs [`select_credential`](Self::select_credential)
/// when it is false or when the provider rejects the credential.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Whether a usable credential is currently selected.
    async fn has_valid_credential(&self) -> bool;

    /// Runs the selection flow, waiting on the user if it is interactive.
    ///
    /// Returns an error if the user abandons the flow or no credential can be found.
    async fn select_credential(&self) -> AtelierResult<()>;
}
