//! Wire types for the Gemini REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A conversation turn: a role and its ordered parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One content part. Exactly one of the fields is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Base64 binary data with its MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type, e.g. "image/png"
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Reasoning budget configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    /// Maximum reasoning tokens
    pub thinking_budget: u32,
}

/// Image output configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Aspect ratio, e.g. "1:1"
    pub aspect_ratio: String,
    /// Resolution tier, e.g. "2K"
    pub image_size: String,
}

/// Generation options for `generateContent`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Response MIME type, "application/json" for structured output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Schema the response must conform to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    /// Reasoning budget
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
    /// Image output options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

/// `models/{model}:generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents
    pub contents: Vec<Content>,
    /// Generation options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Reason generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// `generateContent` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Response candidates, empty when the prompt was blocked
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Image given to the video model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoImage {
    /// Base64-encoded image bytes
    pub bytes_base64_encoded: String,
    /// MIME type of the image
    pub mime_type: String,
}

/// One video generation instance.
#[derive(Debug, Clone, Serialize)]
pub struct VideoInstance {
    /// Motion prompt
    pub prompt: String,
    /// Starting frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<VideoImage>,
}

/// Video generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoParameters {
    /// "16:9" or "9:16"
    pub aspect_ratio: String,
    /// e.g. "720p"
    pub resolution: String,
    /// Number of videos to generate
    pub sample_count: u32,
}

/// `models/{model}:predictLongRunning` request body.
#[derive(Debug, Clone, Serialize)]
pub struct PredictLongRunningRequest {
    /// Generation instances
    pub instances: Vec<VideoInstance>,
    /// Shared parameters
    pub parameters: VideoParameters,
}

/// Reference to a generated video file.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRef {
    /// Download URI
    #[serde(default)]
    pub uri: Option<String>,
}

/// One generated video.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedSample {
    /// Video reference
    #[serde(default)]
    pub video: Option<VideoRef>,
}

/// Result payload of a finished video operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    /// Generated videos
    #[serde(default)]
    pub generated_samples: Vec<GeneratedSample>,
}

/// Response wrapper of a finished operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    /// Video generation result
    #[serde(default)]
    pub generate_video_response: Option<GenerateVideoResponse>,
}

/// Error status as reported by Google APIs.
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

/// Long-running operation.
#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    /// Operation resource name, used for polling
    pub name: String,
    /// Whether the operation finished
    #[serde(default)]
    pub done: bool,
    /// Failure status, when finished unsuccessfully
    #[serde(default)]
    pub error: Option<Status>,
    /// Result, when finished successfully
    #[serde(default)]
    pub response: Option<OperationResponse>,
}

/// Error body returned with non-success HTTP statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// Error details
    pub error: Status,
}
