//! Binary media carried into and out of the provider.

use atelier_error::{StudioError, StudioErrorKind};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// A user-supplied image decoded to raw bytes with a known MIME type.
///
/// # Examples
///
/// ```
/// use atelier_core::SourceImage;
///
/// let image = SourceImage::from_data_url("data:image/jpeg;base64,/9j/4AAQ").unwrap();
/// assert_eq!(image.mime(), "image/jpeg");
/// assert_eq!(image.data().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SourceImage {
    /// MIME type, e.g. "image/png"
    mime: String,
    /// Raw image bytes
    #[getter(skip)]
    data: Vec<u8>,
}

impl SourceImage {
    /// Wraps raw bytes. Empty payloads and non-image MIME types are rejected.
    #[track_caller]
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Result<Self, StudioError> {
        let mime = mime.into();
        if data.is_empty() {
            return Err(StudioError::new(StudioErrorKind::InvalidInput(
                "source image is empty".to_string(),
            )));
        }
        if !mime.starts_with("image/") {
            return Err(StudioError::new(StudioErrorKind::InvalidInput(format!(
                "source must be an image, got '{}'",
                mime
            ))));
        }
        Ok(Self { mime, data })
    }

    /// Parses a `data:<mime>;base64,<payload>` URL as produced by browser file readers.
    #[track_caller]
    pub fn from_data_url(url: &str) -> Result<Self, StudioError> {
        let invalid = |msg: &str| StudioError::new(StudioErrorKind::InvalidInput(msg.to_string()));

        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| invalid("not a data URL"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| invalid("data URL has no payload"))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| invalid("data URL is not base64 encoded"))?;

        let data = STANDARD
            .decode(payload.trim())
            .map_err(|e| invalid(&format!("invalid base64 payload: {}", e)))?;

        Self::new(mime, data)
    }

    /// Raw image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Base64 encoding of the bytes, as the provider expects them inline.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}

/// Generated media returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MediaPayload {
    /// Generated image.
    Image {
        /// MIME type of the image
        mime: String,
        /// Binary image data
        data: Vec<u8>,
    },

    /// Generated video.
    Video {
        /// MIME type of the video
        mime: String,
        /// Binary video data
        data: Vec<u8>,
    },
}

impl MediaPayload {
    /// MIME type of the payload.
    pub fn mime(&self) -> &str {
        match self {
            MediaPayload::Image { mime, .. } | MediaPayload::Video { mime, .. } => mime,
        }
    }

    /// Binary payload.
    pub fn data(&self) -> &[u8] {
        match self {
            MediaPayload::Image { data, .. } | MediaPayload::Video { data, .. } => data,
        }
    }

    /// Encodes the payload as a `data:` URL for direct display.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime(), STANDARD.encode(self.data()))
    }
}
