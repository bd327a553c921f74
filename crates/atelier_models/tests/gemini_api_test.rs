//! Live tests against the Gemini API.
//!
//! These tests make real (billed) API calls and need `GEMINI_API_KEY`.
//!
//! Run with: cargo test --package atelier_models --features api -- --ignored

#![cfg(feature = "api")]

use atelier_core::{ResolutionTier, recommendation_prompt, recommendation_schema};
use atelier_interface::{GenerativeProvider, ImagePrompt, StructuredPrompt};
use atelier_models::{ApiKeySlot, EnvCredentials, GeminiClient};

fn client() -> Result<GeminiClient, Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let slot = ApiKeySlot::new();
    let _credentials = EnvCredentials::new(slot.clone());
    Ok(GeminiClient::new(slot)?)
}

#[tokio::test]
#[ignore] // Requires GEMINI_API_KEY
async fn test_gemini_structured_generation() -> Result<(), Box<dyn std::error::Error>> {
    let client = client()?;
    let prompt = StructuredPrompt::new(
        recommendation_prompt("anniversaire surprise"),
        recommendation_schema(),
        Some(1024),
    );

    let parts = client.generate_structured(&prompt).await?;
    let text: String = parts.iter().filter_map(|p| p.as_text()).collect();
    let value: serde_json::Value = serde_json::from_str(&text)?;
    assert!(value["name"].is_string());
    assert!(value["reason"].is_string());
    Ok(())
}

#[tokio::test]
#[ignore] // Requires GEMINI_API_KEY with image model access
async fn test_gemini_image_generation() -> Result<(), Box<dyn std::error::Error>> {
    let client = client()?;
    let prompt = ImagePrompt::new("a small lemon tart", ResolutionTier::OneK, "1:1");

    let parts = client.generate_image(&prompt).await?;
    assert!(
        parts
            .iter()
            .any(|p| matches!(p, atelier_interface::ContentPart::InlineData { .. }))
    );
    Ok(())
}
