//! Google Gemini and Veo REST integration.
//!
//! Text and image generation use `generateContent`; video animation uses
//! `predictLongRunning` and the operations endpoint for polling.

mod client;
pub mod conversions;
pub mod dto;

pub use client::{DEFAULT_BASE_URL, GeminiClient, GeminiModels};
