//! Google Gemini REST API driver.
//!
//! [`GeminiClient`] issues one `generateContent` call per request:
//! - text calls attach `responseSchema` with `responseMimeType: application/json`
//! - image calls ask for `responseModalities: ["IMAGE"]`
//! - inline image parts in the answer are decoded into `Output::Image`

mod client;
mod dto;
mod settings;

pub use client::GeminiClient;
pub use settings::GeminiSettings;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, clickforge_error::GeminiError>;
