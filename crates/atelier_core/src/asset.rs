//! Generated assets held in memory for display.

use crate::{AspectRatio, GenerationKind, MediaPayload, ResolutionTier};
use serde::{Deserialize, Serialize};

/// Parameters of the request that produced an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AssetParameters {
    /// Image generation parameters.
    Image {
        /// Prompt as entered by the user
        prompt: String,
        /// Requested resolution tier
        resolution_tier: ResolutionTier,
    },
    /// Video generation parameters.
    Video {
        /// Requested frame shape
        aspect_ratio: AspectRatio,
        /// MIME type of the animated source image
        source_mime: String,
    },
}

/// A generated image or video plus the parameters that produced it.
///
/// Assets are never persisted by the orchestrator; they live until the
/// caller drops them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedAsset {
    /// Generated media
    payload: MediaPayload,
    /// Originating request parameters
    parameters: AssetParameters,
}

impl GeneratedAsset {
    /// Pairs a payload with its request parameters.
    pub fn new(payload: MediaPayload, parameters: AssetParameters) -> Self {
        Self {
            payload,
            parameters,
        }
    }

    /// Whether this is an image or a video.
    pub fn kind(&self) -> GenerationKind {
        match self.payload {
            MediaPayload::Image { .. } => GenerationKind::Image,
            MediaPayload::Video { .. } => GenerationKind::Video,
        }
    }

    /// Resolution tier of an image asset.
    pub fn resolution_tier(&self) -> Option<ResolutionTier> {
        match self.parameters {
            AssetParameters::Image {
                resolution_tier, ..
            } => Some(resolution_tier),
            AssetParameters::Video { .. } => None,
        }
    }

    /// Aspect ratio of a video asset.
    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        match self.parameters {
            AssetParameters::Video { aspect_ratio, .. } => Some(aspect_ratio),
            AssetParameters::Image { .. } => None,
        }
    }

    /// Encodes the media for direct display.
    pub fn to_data_url(&self) -> String {
        self.payload.to_data_url()
    }
}
