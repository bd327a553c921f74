//! Generation kinds.

use serde::{Deserialize, Serialize};

/// The three independent generation paths of the studio.
///
/// At most one generation of each kind runs at a time per session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GenerationKind {
    /// Structured text recommendation
    Recommendation,
    /// Still image concept
    Image,
    /// Video animated from an image
    Video,
}
