//! Core data types for Clickforge.
//!
//! Two groups live here:
//! - the value records each studio job produces ([`AnalysisResult`],
//!   [`GeneratedCombo`], [`ScriptResult`]) plus the intermediate [`ComboIdea`]
//! - the provider-neutral request/response types a model driver consumes
//!   ([`GenerateRequest`], [`GenerateResponse`])

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod combo;
mod image;
mod input;
mod output;
mod request;
mod script;

pub use analysis::AnalysisResult;
pub use combo::{ComboIdea, ComboIdeaBatch, GeneratedCombo};
pub use image::{EncodedImage, ImageMime};
pub use input::Input;
pub use output::Output;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, Modality};
pub use script::{ScriptResult, ScriptSection};
