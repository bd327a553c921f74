//! Generative provider trait and its request shapes.

use async_trait::async_trait;
use atelier_core::{AspectRatio, JobHandle, MediaPayload, ResolutionTier, SourceImage};
use atelier_error::AtelierResult;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One part of a provider response, in the order the provider sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ContentPart {
    /// Text part.
    Text(String),
    /// Inline binary part.
    InlineData {
        /// MIME type of the data
        mime: String,
        /// Decoded bytes
        data: Vec<u8>,
    },
}

impl ContentPart {
    /// Text of a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(text) => Some(text),
            ContentPart::InlineData { .. } => None,
        }
    }
}

/// Text generation constrained by a response schema.
///
/// The schema travels with the request; the provider is expected to reject
/// or coerce output that does not conform.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct StructuredPrompt {
    /// Instruction text
    prompt: String,
    /// JSON schema of the expected response
    schema: Value,
    /// Reasoning token budget, if the model supports one
    thinking_budget: Option<u32>,
}

impl StructuredPrompt {
    /// Creates a structured prompt.
    pub fn new(prompt: impl Into<String>, schema: Value, thinking_budget: Option<u32>) -> Self {
        Self {
            prompt: prompt.into(),
            schema,
            thinking_budget,
        }
    }
}

/// Single image generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ImagePrompt {
    /// Full prompt sent to the model
    prompt: String,
    /// Requested resolution tier
    resolution_tier: ResolutionTier,
    /// Image aspect ratio, e.g. "1:1"
    aspect_ratio: String,
}

impl ImagePrompt {
    /// Creates an image prompt.
    pub fn new(
        prompt: impl Into<String>,
        resolution_tier: ResolutionTier,
        aspect_ratio: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            resolution_tier,
            aspect_ratio: aspect_ratio.into(),
        }
    }
}

/// Image-to-video animation job.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct VideoPrompt {
    /// Motion direction for the model
    prompt: String,
    /// Image to animate
    source_image: SourceImage,
    /// Frame shape
    aspect_ratio: AspectRatio,
    /// Output resolution, e.g. "720p"
    resolution: String,
}

impl VideoPrompt {
    /// Creates a video prompt.
    pub fn new(
        prompt: impl Into<String>,
        source_image: SourceImage,
        aspect_ratio: AspectRatio,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            source_image,
            aspect_ratio,
            resolution: resolution.into(),
        }
    }
}

/// External generative-AI service.
///
/// Implementations issue exactly one remote call per method and never retry.
/// Errors carry enough detail for
/// [`AtelierError::is_entitlement`](atelier_error::AtelierError::is_entitlement)
/// to recognize credential failures.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Runs a schema-constrained text generation and returns the response parts.
    async fn generate_structured(&self, request: &StructuredPrompt)
    -> AtelierResult<Vec<ContentPart>>;

    /// Requests a single image and returns the response parts.
    async fn generate_image(&self, request: &ImagePrompt) -> AtelierResult<Vec<ContentPart>>;

    /// Submits an animation job.
    async fn submit_video(&self, request: &VideoPrompt) -> AtelierResult<JobHandle>;

    /// Queries the current state of a job.
    async fn poll_video(&self, job: &JobHandle) -> AtelierResult<JobHandle>;

    /// Downloads a finished video.
    async fn fetch_video(&self, uri: &str) -> AtelierResult<MediaPayload>;

    /// Name of the provider for logging.
    fn provider_name(&self) -> &'static str;
}
