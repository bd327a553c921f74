//! HTTP client for the Gemini REST API.

use crate::ApiKeySlot;
use crate::gemini::conversions;
use crate::gemini::dto::{GenerateContentResponse, Operation};
use async_trait::async_trait;
use atelier_core::{JobHandle, MediaPayload};
use atelier_error::{AtelierResult, GeminiError, GeminiErrorKind, HttpError};
use atelier_interface::{ContentPart, GenerativeProvider, ImagePrompt, StructuredPrompt, VideoPrompt};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

/// Public Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Model identifiers used for each generation path.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct GeminiModels {
    /// Structured text model
    recommendation: String,
    /// Image generation model
    image: String,
    /// Video generation model
    video: String,
}

impl Default for GeminiModels {
    fn default() -> Self {
        Self {
            recommendation: "gemini-3-pro-preview".to_string(),
            image: "gemini-3-pro-image-preview".to_string(),
            video: "veo-3.1-fast-generate-preview".to_string(),
        }
    }
}

/// Client for Gemini text, image, and Veo video generation.
///
/// The API key is read from the shared [`ApiKeySlot`] on every call, so a
/// key selected after construction is picked up immediately.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    models: GeminiModels,
    keys: ApiKeySlot,
}

impl GeminiClient {
    /// Creates a client against the public endpoint with default models.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[instrument(skip(keys))]
    pub fn new(keys: ApiKeySlot) -> AtelierResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("atelier/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(url = DEFAULT_BASE_URL, "Created Gemini client");

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            models: GeminiModels::default(),
            keys,
        })
    }

    /// Points the client at another endpoint, e.g. a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the model identifiers.
    pub fn with_models(mut self, models: GeminiModels) -> Self {
        self.models = models;
        self
    }

    /// Returns the model identifiers.
    pub fn models(&self) -> &GeminiModels {
        &self.models
    }

    /// Returns the endpoint base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[track_caller]
    fn api_key(&self) -> Result<String, GeminiError> {
        self.keys
            .get()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    /// Sends a request and returns the response if its status is a success.
    async fn send(&self, request: RequestBuilder) -> AtelierResult<Response> {
        let key = self.api_key()?;
        let response = request
            .header(API_KEY_HEADER, key)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API error");
            return Err(conversions::api_error(status.as_u16(), &body).into());
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> AtelierResult<T> {
        let response = self.send(request).await?;
        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
        })?;
        let parsed = conversions::parse_body(&body).inspect_err(|e| {
            error!(error = %e, "Failed to parse response");
        })?;
        Ok(parsed)
    }
}

#[async_trait]
impl GenerativeProvider for GeminiClient {
    #[instrument(skip(self, request), fields(model = %self.models.recommendation))]
    async fn generate_structured(
        &self,
        request: &StructuredPrompt,
    ) -> AtelierResult<Vec<ContentPart>> {
        let body = conversions::to_structured_request(request);
        let url = self.model_url(&self.models.recommendation, "generateContent");

        debug!(url = %url, "Sending structured generation request");
        let response: GenerateContentResponse =
            self.send_json(self.client.post(&url).json(&body)).await?;

        let parts = conversions::from_content_response(&response)?;
        debug!(parts = parts.len(), "Received structured response");
        Ok(parts)
    }

    #[instrument(skip(self, request), fields(model = %self.models.image, tier = %request.resolution_tier()))]
    async fn generate_image(&self, request: &ImagePrompt) -> AtelierResult<Vec<ContentPart>> {
        let body = conversions::to_image_request(request);
        let url = self.model_url(&self.models.image, "generateContent");

        debug!(url = %url, "Sending image generation request");
        let response: GenerateContentResponse =
            self.send_json(self.client.post(&url).json(&body)).await?;

        let parts = conversions::from_content_response(&response)?;
        debug!(parts = parts.len(), "Received image response");
        if !parts
            .iter()
            .any(|part| matches!(part, ContentPart::InlineData { .. }))
        {
            warn!(
                finish_reason = conversions::finish_reason(&response).unwrap_or("unknown"),
                "Image response carried no image"
            );
        }
        Ok(parts)
    }

    #[instrument(skip(self, request), fields(model = %self.models.video, ratio = %request.aspect_ratio()))]
    async fn submit_video(&self, request: &VideoPrompt) -> AtelierResult<JobHandle> {
        let body = conversions::to_video_request(request);
        let url = self.model_url(&self.models.video, "predictLongRunning");

        debug!(url = %url, "Submitting video job");
        let operation: Operation = self.send_json(self.client.post(&url).json(&body)).await?;

        debug!(operation = %operation.name, done = operation.done, "Video job accepted");
        Ok(conversions::from_operation(&operation))
    }

    #[instrument(skip(self, job), fields(operation = %job.id()))]
    async fn poll_video(&self, job: &JobHandle) -> AtelierResult<JobHandle> {
        let url = format!("{}/v1beta/{}", self.base_url, job.id());
        let operation: Operation = self.send_json(self.client.get(&url)).await?;

        debug!(done = operation.done, "Polled video job");
        Ok(conversions::from_operation(&operation))
    }

    #[instrument(skip(self))]
    async fn fetch_video(&self, uri: &str) -> AtelierResult<MediaPayload> {
        let response = self.send(self.client.get(uri)).await?;

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .filter(|value| value.starts_with("video/"))
            .unwrap_or("video/mp4")
            .to_string();

        let data = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read video body");
            HttpError::new(format!("Failed to read video body: {}", e))
        })?;

        debug!(bytes = data.len(), mime = %mime, "Downloaded video");
        Ok(MediaPayload::Video {
            mime,
            data: data.to_vec(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
