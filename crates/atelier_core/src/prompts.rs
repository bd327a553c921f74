//! Prompt templates and user-facing status lines.

use serde_json::{Value, json};

/// Fixed direction given to the video model for every animation.
pub const ANIMATION_PROMPT: &str =
    "Soft cinematic animation, slow rotation, flickering candles, magical particles.";

/// Shown while the animation job is being submitted.
pub const STATUS_STARTING: &str = "Initialisation du moteur Veo...";

/// Shown between polls of a running animation job.
pub const STATUS_POLLING: &str = "Le chef sublime votre vidéo (cela peut prendre 1-2 minutes)...";

/// Shown while the finished video is downloaded.
pub const STATUS_FETCHING: &str = "Récupération de votre vidéo...";

/// Builds the recommendation instruction for an occasion.
pub fn recommendation_prompt(occasion: &str) -> String {
    format!(
        "L'utilisateur cherche un gâteau pour cette occasion: \"{occasion}\". \
         Suggère-lui un type de gâteau créatif et explique pourquoi émotionnellement ce choix est parfait. \
         Utilise un ton professionnel, élégant et expert en haute pâtisserie. \
         Ne mets aucun emoji dans ta réponse. \
         Réponds uniquement en JSON avec les clés \"name\" et \"reason\"."
    )
}

/// Wraps a cake description in the studio's photography direction.
pub fn image_prompt(description: &str) -> String {
    format!(
        "Create a luxurious, highly detailed professional photography of a birthday cake: \
         {description}. Elegant setting, soft lighting, 8k resolution."
    )
}

/// Response schema constraining recommendations to `{name, reason}`.
pub fn recommendation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "reason": { "type": "STRING" }
        },
        "required": ["name", "reason"]
    })
}
