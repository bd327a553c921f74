//! Core data types for the Atelier creative generation orchestrator.
//!
//! This crate provides the request, result, and job types shared by the
//! provider integrations and the orchestrator.

mod asset;
mod job;
mod kind;
mod media;
mod observability;
mod prompts;
mod recommendation;
mod request;
mod settings;

pub use asset::{AssetParameters, GeneratedAsset};
pub use job::{JobHandle, VideoPhase};
pub use kind::GenerationKind;
pub use media::{MediaPayload, SourceImage};
pub use observability::init_tracing;
pub use prompts::{
    ANIMATION_PROMPT, STATUS_FETCHING, STATUS_POLLING, STATUS_STARTING, image_prompt,
    recommendation_prompt, recommendation_schema,
};
pub use recommendation::Recommendation;
pub use request::GenerationRequest;
pub use settings::{AspectRatio, ResolutionTier};
