//! Discrete generation settings offered to the user.

use serde::{Deserialize, Serialize};

/// Quality setting for generated images.
///
/// # Examples
///
/// ```
/// use atelier_core::ResolutionTier;
///
/// let tier: ResolutionTier = "4K".parse().unwrap();
/// assert_eq!(tier, ResolutionTier::FourK);
/// assert_eq!(tier.to_string(), "4K");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum ResolutionTier {
    /// 1K output (default)
    #[default]
    #[serde(rename = "1K")]
    #[strum(serialize = "1K")]
    OneK,
    /// 2K output
    #[serde(rename = "2K")]
    #[strum(serialize = "2K")]
    TwoK,
    /// 4K output
    #[serde(rename = "4K")]
    #[strum(serialize = "4K")]
    FourK,
}

/// Frame shape for animated videos.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum AspectRatio {
    /// Landscape
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Landscape,
    /// Portrait, the studio default for phone screens
    #[default]
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Portrait,
}
