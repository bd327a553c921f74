//! Generative provider integrations for Atelier.
//!
//! [`GeminiClient`] implements [`GenerativeProvider`](atelier_interface::GenerativeProvider)
//! against the Gemini REST API. The credential providers in this crate fill an
//! [`ApiKeySlot`] that the client reads on every request.

mod credentials;
pub mod gemini;

pub use credentials::{API_KEY_VAR, ApiKeySlot, EnvCredentials, StaticCredentials};
pub use gemini::{DEFAULT_BASE_URL, GeminiClient, GeminiModels};
