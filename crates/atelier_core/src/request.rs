//! Tagged generation requests.

use crate::{AspectRatio, GenerationKind, ResolutionTier, SourceImage};
use serde::{Deserialize, Serialize};

/// One user intent, owned by the call that issues it.
///
/// Each variant carries exactly the inputs its generation path needs, so a
/// video request without a source image cannot be built.
///
/// # Examples
///
/// ```
/// use atelier_core::{GenerationKind, GenerationRequest, ResolutionTier};
///
/// let request = GenerationRequest::image("tiramisu aux fraises", ResolutionTier::TwoK);
/// assert_eq!(request.kind(), GenerationKind::Image);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GenerationRequest {
    /// Recommend a cake for an occasion.
    Recommendation {
        /// Free-text description of the occasion
        occasion_text: String,
    },

    /// Render a concept image.
    Image {
        /// Description of the cake
        prompt: String,
        /// Output resolution tier
        resolution_tier: ResolutionTier,
    },

    /// Animate an uploaded image into a short video.
    Video {
        /// Image to animate
        source_image: SourceImage,
        /// Frame shape of the video
        aspect_ratio: AspectRatio,
    },
}

impl GenerationRequest {
    /// Builds a recommendation request.
    pub fn recommendation(occasion_text: impl Into<String>) -> Self {
        Self::Recommendation {
            occasion_text: occasion_text.into(),
        }
    }

    /// Builds an image request.
    pub fn image(prompt: impl Into<String>, resolution_tier: ResolutionTier) -> Self {
        Self::Image {
            prompt: prompt.into(),
            resolution_tier,
        }
    }

    /// Builds a video request.
    pub fn video(source_image: SourceImage, aspect_ratio: AspectRatio) -> Self {
        Self::Video {
            source_image,
            aspect_ratio,
        }
    }

    /// The generation path this request belongs to.
    pub fn kind(&self) -> GenerationKind {
        match self {
            GenerationRequest::Recommendation { .. } => GenerationKind::Recommendation,
            GenerationRequest::Image { .. } => GenerationKind::Image,
            GenerationRequest::Video { .. } => GenerationKind::Video,
        }
    }
}
