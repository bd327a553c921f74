//! Type conversions between Atelier and Gemini wire formats.

use crate::gemini::dto::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, Operation, Part, PredictLongRunningRequest, ThinkingConfig, VideoImage,
    VideoInstance, VideoParameters,
};
use atelier_core::JobHandle;
use atelier_error::{GeminiError, GeminiErrorKind, JsonError};
use atelier_interface::{ContentPart, ImagePrompt, StructuredPrompt, VideoPrompt};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;

fn user_text(prompt: &str) -> Vec<Content> {
    vec![Content {
        role: Some("user".to_string()),
        parts: vec![Part {
            text: Some(prompt.to_string()),
            inline_data: None,
        }],
    }]
}

/// Builds a schema-constrained JSON generation request.
pub fn to_structured_request(req: &StructuredPrompt) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: user_text(req.prompt()),
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(req.schema().clone()),
            thinking_config: (*req.thinking_budget()).map(|thinking_budget| ThinkingConfig {
                thinking_budget,
            }),
            image_config: None,
        }),
    }
}

/// Builds a single-image generation request.
pub fn to_image_request(req: &ImagePrompt) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: user_text(req.prompt()),
        generation_config: Some(GenerationConfig {
            image_config: Some(ImageConfig {
                aspect_ratio: req.aspect_ratio().clone(),
                image_size: req.resolution_tier().to_string(),
            }),
            ..GenerationConfig::default()
        }),
    }
}

/// Builds an image-to-video job request producing one video.
pub fn to_video_request(req: &VideoPrompt) -> PredictLongRunningRequest {
    let image = req.source_image();
    PredictLongRunningRequest {
        instances: vec![VideoInstance {
            prompt: req.prompt().clone(),
            image: Some(VideoImage {
                bytes_base64_encoded: image.to_base64(),
                mime_type: image.mime().clone(),
            }),
        }],
        parameters: VideoParameters {
            aspect_ratio: req.aspect_ratio().to_string(),
            resolution: req.resolution().clone(),
            sample_count: 1,
        },
    }
}

/// Flattens the first candidate into ordered parts, decoding inline data.
///
/// A response without candidates yields no parts.
#[track_caller]
pub fn from_content_response(
    response: &GenerateContentResponse,
) -> Result<Vec<ContentPart>, GeminiError> {
    let Some(content) = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
    else {
        return Ok(Vec::new());
    };

    let mut parts = Vec::with_capacity(content.parts.len());
    for part in &content.parts {
        if let Some(inline) = &part.inline_data {
            let data = STANDARD.decode(&inline.data).map_err(|e| {
                GeminiError::new(GeminiErrorKind::Base64Decode(format!(
                    "inline {} part: {}",
                    inline.mime_type, e
                )))
            })?;
            parts.push(ContentPart::InlineData {
                mime: inline.mime_type.clone(),
                data,
            });
        } else if let Some(text) = &part.text {
            parts.push(ContentPart::Text(text.clone()));
        }
    }
    Ok(parts)
}

/// Why the first candidate stopped, e.g. `"SAFETY"` or `"IMAGE_OTHER"`.
pub fn finish_reason(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.finish_reason.as_deref())
}

/// Maps an operation resource onto a job handle.
pub fn from_operation(operation: &Operation) -> JobHandle {
    if !operation.done {
        return JobHandle::pending(&operation.name);
    }

    if let Some(status) = &operation.error {
        return JobHandle::failed(&operation.name, status.message.clone());
    }

    let uri = operation
        .response
        .as_ref()
        .and_then(|r| r.generate_video_response.as_ref())
        .and_then(|r| r.generated_samples.first())
        .and_then(|sample| sample.video.as_ref())
        .and_then(|video| video.uri.clone());

    JobHandle::completed(&operation.name, uri)
}

/// Parses a success response body into its wire type.
#[track_caller]
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, JsonError> {
    match serde_json::from_str(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(JsonError::new(format!("Failed to parse response: {}", e))),
    }
}

/// Builds an error from a non-success HTTP response body.
///
/// Uses the message of a Google error envelope when the body is one, the raw
/// body otherwise.
#[track_caller]
pub fn api_error(status_code: u16, body: &str) -> GeminiError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string());

    GeminiError::new(GeminiErrorKind::HttpError {
        status_code,
        message,
    })
}
