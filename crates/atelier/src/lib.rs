//! Creative generation orchestrator.
//!
//! [`CreativeStudio`] turns user intent into calls against a
//! [`GenerativeProvider`](atelier_interface::GenerativeProvider): a cake
//! recommendation for an occasion, a concept image at a chosen resolution
//! tier, or a short video animated from an image.
//!
//! # Example
//!
//! ```no_run
//! use atelier::{CreativeStudio, StudioConfig};
//! use atelier_core::ResolutionTier;
//! use atelier_models::{ApiKeySlot, EnvCredentials, GeminiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let slot = ApiKeySlot::new();
//! let credentials = EnvCredentials::new(slot.clone());
//! let studio = CreativeStudio::new(GeminiClient::new(slot)?, credentials, StudioConfig::default());
//!
//! if let Some(idea) = studio.recommend("les 80 ans de ma grand-mère").await? {
//!     let image = studio.generate_image(idea.name(), ResolutionTier::TwoK).await?;
//!     println!("{} bytes", image.payload().data().len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod config;
mod guard;
mod studio;

pub use config::{PollingConfig, StudioConfig};
pub use studio::{CreativeStudio, GenerationOutcome};
