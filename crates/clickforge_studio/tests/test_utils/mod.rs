//! Test utilities for studio tests.

#![allow(dead_code)]

pub mod mock_driver;

pub use mock_driver::{MockDriver, MockReply};

use clickforge_core::{AnalysisResult, GenerateRequest, Modality};

/// Analysis JSON for the metabolism scenario.
pub const ANALYSIS_JSON: &str = r#"{
    "opinion": "The title promises a list with stakes, and the thumbnail shows a plate of food with a red X. Together they read instantly.",
    "strengths": ["Number in the title", "Fear of loss hook", "High-contrast thumbnail"],
    "weaknesses": ["Generic stock food photo", "No face to connect with"],
    "improvements": ["Show a shocked face next to the food", "Name one surprising food in the title"],
    "competition": "Diet listicles are everywhere; most use the same X-over-food visual."
}"#;

/// Three combo ideas in a fixed order.
pub const IDEAS_JSON: &str = r#"{
    "combinations": [
        {"title": "I Quit These 10 Foods for 30 Days", "thumbnailPrompt": "first: a person pushing away a plate"},
        {"title": "Your Breakfast Is Slowing You Down", "thumbnailPrompt": "second: cereal bowl with a snail"},
        {"title": "Doctors Hate Food Number 7", "thumbnailPrompt": "third: a doctor frowning at a donut"}
    ]
}"#;

/// A script with three sections.
pub const SCRIPT_JSON: &str = r#"{
    "title": "10 Foods That Secretly Destroy Your Metabolism",
    "hook": "You eat at least three of these every week.",
    "sections": [
        {"heading": "Sugary cereal", "content": "It spikes insulin.", "visuals": "Slow-motion pour"},
        {"heading": "Diet soda", "content": "Sweetness without calories confuses appetite.", "visuals": "Can opening"},
        {"heading": "White bread", "content": "Refined flour digests fast.", "visuals": "Bread on a scale"}
    ],
    "cta": "Subscribe for part two.",
    "outro": "Eat smarter, not less."
}"#;

/// Parsed form of [`ANALYSIS_JSON`].
pub fn sample_analysis() -> AnalysisResult {
    serde_json::from_str(ANALYSIS_JSON).expect("sample analysis is valid")
}

/// Which call a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Analysis,
    Ideas,
    Image,
    Script,
}

/// Route a request by modality and response schema.
pub fn call_kind(request: &GenerateRequest) -> CallKind {
    if *request.modality() == Modality::Image {
        return CallKind::Image;
    }
    let schema = request
        .response_schema()
        .as_ref()
        .map(|s| s.to_string())
        .unwrap_or_default();
    if schema.contains("\"combinations\"") {
        CallKind::Ideas
    } else if schema.contains("\"hook\"") {
        CallKind::Script
    } else {
        CallKind::Analysis
    }
}

/// A driver answering every call of the happy path.
pub fn happy_driver() -> MockDriver {
    MockDriver::new(|request| match call_kind(request) {
        CallKind::Analysis => MockReply::text(ANALYSIS_JSON),
        CallKind::Ideas => MockReply::text(IDEAS_JSON),
        CallKind::Script => MockReply::text(SCRIPT_JSON),
        CallKind::Image => MockReply::image("image/png", request.prompt_text().as_bytes()),
    })
}
