//! Wire types for the `generateContent` REST endpoint.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clickforge_core::{GenerateRequest, GenerateResponse, Input, Modality, Output};
use clickforge_error::{GeminiError, GeminiErrorKind};
use serde::{Deserialize, Serialize};

use super::GeminiResult;

//
// ─── REQUEST ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, alias = "inline_data", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<Blob>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Blob {
    #[serde(alias = "mime_type")]
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentRequest {
    /// Translate a provider-neutral request into a single user turn.
    pub fn from_request(req: &GenerateRequest) -> Self {
        let parts = req
            .inputs()
            .iter()
            .map(|input| match input {
                Input::Text(text) => Part {
                    text: Some(text.clone()),
                    inline_data: None,
                },
                Input::Image(image) => Part {
                    text: None,
                    inline_data: Some(Blob {
                        mime_type: image.mime_type.clone(),
                        data: image.data.clone(),
                    }),
                },
            })
            .collect();

        let generation_config = match (req.modality(), req.response_schema()) {
            (Modality::Image, _) => Some(GenerationConfig {
                response_modalities: Some(vec!["IMAGE".to_string()]),
                ..Default::default()
            }),
            (Modality::Text, Some(schema)) => Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema.clone()),
                ..Default::default()
            }),
            (Modality::Text, None) => None,
        };

        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config,
        }
    }
}

//
// ─── RESPONSE ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: Option<u64>,
    #[serde(default)]
    pub candidates_token_count: Option<u64>,
}

impl GenerateContentResponse {
    /// Flatten the first candidate into outputs, decoding inline images.
    pub fn into_response(self) -> GeminiResult<GenerateResponse> {
        if self.candidates.is_empty() {
            if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(GeminiError::new(GeminiErrorKind::Blocked(reason)));
            }
        }

        let parts = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default();

        let mut outputs = Vec::with_capacity(parts.len());
        for part in parts {
            if let Some(text) = part.text {
                outputs.push(Output::Text(text));
            }
            if let Some(blob) = part.inline_data {
                let data = STANDARD.decode(blob.data.as_bytes()).map_err(|e| {
                    GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string()))
                })?;
                outputs.push(Output::Image {
                    mime: blob.mime_type,
                    data,
                });
            }
        }

        Ok(GenerateResponse { outputs })
    }
}

//
// ─── ERRORS ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub details: Vec<serde_json::Value>,
}

/// Map a non-2xx answer to an error kind.
///
/// Key problems come back as 400 with `API_KEY_INVALID` in the details, or as
/// 401/403; both count as configuration errors.
pub(crate) fn classify_http_error(status_code: u16, body: &str) -> GeminiErrorKind {
    let parsed = serde_json::from_str::<ApiErrorEnvelope>(body).ok();
    let message = parsed
        .as_ref()
        .map(|envelope| envelope.error.message.clone())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.chars().take(200).collect());

    let mentions_key = body.contains("API_KEY_INVALID") || message.contains("API key not valid");
    let unauthenticated = parsed
        .as_ref()
        .and_then(|envelope| envelope.error.status.as_deref())
        .is_some_and(|status| status == "UNAUTHENTICATED" || status == "PERMISSION_DENIED");
    let detail_reason = parsed.as_ref().is_some_and(|envelope| {
        envelope
            .error
            .details
            .iter()
            .any(|detail| detail.get("reason").and_then(|r| r.as_str()) == Some("API_KEY_INVALID"))
    });

    if matches!(status_code, 401 | 403) || mentions_key || unauthenticated || detail_reason {
        GeminiErrorKind::InvalidApiKey(message)
    } else {
        GeminiErrorKind::HttpError {
            status_code,
            message,
        }
    }
}
