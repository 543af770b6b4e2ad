//! Clickforge - a packaging studio for video titles and thumbnails.
//!
//! Give it a title and a thumbnail and it will:
//! - judge how well the two work together as one unit
//! - propose three new title + thumbnail combinations, drawing each thumbnail
//! - write a full narration script informed by the judgement
//!
//! All three jobs run against Google Gemini through the
//! [`ModelDriver`] seam, so tests and alternative providers can swap the driver.
//!
//! # Quick Start
//!
//! ```no_run
//! use clickforge::{ClickforgeConfig, ImageInput, build_studio};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let studio = build_studio(&ClickforgeConfig::load()?)?;
//!
//!     let title = "10 Foods That Destroy Your Metabolism";
//!     let thumbnail = ImageInput::raw(std::fs::read("thumb.jpg")?, "image/jpeg");
//!     let analysis = studio.analyze(title, thumbnail).await?;
//!     for combo in studio.generate_combos(&analysis, title).await? {
//!         println!("{}", combo.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `clickforge_error` - Error types
//! - `clickforge_core` - Result records and provider-neutral request types
//! - `clickforge_interface` - `ModelDriver` trait definition
//! - `clickforge_models` - Gemini REST driver
//! - `clickforge_studio` - Encoder, prompts, response contracts, jobs, session state
//!
//! This crate re-exports everything for convenience and adds layered
//! configuration plus the `clickforge` command-line shell.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod telemetry;

pub use config::ClickforgeConfig;
pub use telemetry::init_tracing;

pub use clickforge_core::{
    AnalysisResult, ComboIdea, ComboIdeaBatch, EncodedImage, GenerateRequest, GenerateResponse,
    GeneratedCombo, ImageMime, Input, Modality, Output, ScriptResult, ScriptSection,
};
pub use clickforge_error::{
    ClickforgeError, ClickforgeErrorKind, ClickforgeResult, ConfigError, ContractError,
    ContractErrorKind, FileError, FileErrorKind, GeminiError, GeminiErrorKind, InputError,
    InputErrorKind, JobError, JobErrorKind,
};
pub use clickforge_interface::ModelDriver;
pub use clickforge_models::{GeminiClient, GeminiSettings};
pub use clickforge_studio::{
    COMBO_COUNT, ImageInput, JobKind, JobSlot, MAX_IMAGE_BYTES, Schema, Session, SlotState,
    StructuredResponse, Studio, StudioSettings, Ticket, encode_image, prompts,
};

/// Build a Gemini-backed studio from loaded configuration.
///
/// A missing API key is not an error here; each job reports it before its
/// first call.
pub fn build_studio(config: &ClickforgeConfig) -> ClickforgeResult<Studio<GeminiClient>> {
    let client = GeminiClient::new(config.gemini.clone())?;
    Ok(Studio::new(client, config.studio.clone()))
}
