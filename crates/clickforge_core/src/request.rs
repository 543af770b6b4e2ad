//! Request and response types for model calls.

use crate::{EncodedImage, Input, Output};
use clickforge_error::{BuilderError, BuilderErrorKind, ClickforgeResult};
use serde::{Deserialize, Serialize};

/// What the model should answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Modality {
    /// Text, JSON-constrained when a response schema is attached
    #[default]
    Text,
    /// Inline image parts
    Image,
}

/// Provider-neutral generation request.
///
/// # Examples
///
/// ```
/// use clickforge_core::{GenerateRequest, Input, Modality};
///
/// let request = GenerateRequest::builder()
///     .inputs(vec![Input::Text("A neon kitchen at midnight".to_string())])
///     .model("gemini-2.5-flash-image")
///     .modality(Modality::Image)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model().as_deref(), Some("gemini-2.5-flash-image"));
/// assert!(request.response_schema().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(default, setter(into))]
pub struct GenerateRequest {
    /// Prompt parts, in order
    inputs: Vec<Input>,
    /// Model identifier; the driver's default when `None`
    #[builder(setter(into, strip_option))]
    model: Option<String>,
    /// Response schema constraining text output
    #[builder(setter(into, strip_option))]
    response_schema: Option<serde_json::Value>,
    /// Requested output modality
    modality: Modality,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Single-prompt text request constrained by a JSON schema.
    pub fn structured(
        model: &str,
        prompt: String,
        image: Option<EncodedImage>,
        schema: serde_json::Value,
    ) -> ClickforgeResult<Self> {
        let mut inputs = vec![Input::Text(prompt)];
        inputs.extend(image.map(Input::Image));

        Self::builder()
            .inputs(inputs)
            .model(model)
            .response_schema(schema)
            .modality(Modality::Text)
            .build()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())).into())
    }

    /// Single-prompt image request.
    pub fn image(model: &str, prompt: String) -> ClickforgeResult<Self> {
        Self::builder()
            .inputs(vec![Input::Text(prompt)])
            .model(model)
            .modality(Modality::Image)
            .build()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())).into())
    }

    /// Concatenated text parts of the prompt.
    pub fn prompt_text(&self) -> String {
        self.inputs
            .iter()
            .filter_map(|input| match input {
                Input::Text(text) => Some(text.as_str()),
                Input::Image(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use clickforge_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![
///         Output::Text("Here you go".to_string()),
///         Output::Image { mime: "image/png".to_string(), data: vec![1, 2, 3] },
///     ],
/// };
///
/// assert_eq!(response.text(), "Here you go");
/// assert_eq!(response.first_image().unwrap().mime_type, "image/png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// All text parts joined together.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .filter_map(|output| match output {
                Output::Text(text) => Some(text.as_str()),
                Output::Image { .. } => None,
            })
            .collect()
    }

    /// First inline image part, re-encoded for transport.
    pub fn first_image(&self) -> Option<EncodedImage> {
        self.outputs.iter().find_map(|output| match output {
            Output::Image { mime, data } => Some(EncodedImage::from_bytes(mime.clone(), data)),
            Output::Text(_) => None,
        })
    }
}
