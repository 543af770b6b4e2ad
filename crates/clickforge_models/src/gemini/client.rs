//! Google Gemini REST client.
//!
//! # Example
//!
//! ```no_run
//! use clickforge_models::{GeminiClient, GeminiSettings};
//! use clickforge_core::GenerateRequest;
//! use clickforge_interface::ModelDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(GeminiSettings::default().with_env_api_key())?;
//!
//! let request = GenerateRequest::image("gemini-2.5-flash-image", "A neon donut".to_string())?;
//! let response = client.generate(&request).await?;
//! assert!(response.first_image().is_some());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use clickforge_core::{GenerateRequest, GenerateResponse};
use clickforge_error::{ClickforgeResult, GeminiError, GeminiErrorKind};
use clickforge_interface::ModelDriver;

use super::GeminiResult;
use super::dto::{GenerateContentRequest, GenerateContentResponse, classify_http_error};
use super::settings::GeminiSettings;

/// Client for the Gemini `generateContent` REST endpoint.
///
/// Construction never fails on a missing key; the key is checked on every
/// call before any network traffic, so callers see a configuration error
/// from the job that needed it.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    settings: GeminiSettings,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client from explicit settings.
    #[instrument(name = "gemini_client_new", skip(settings))]
    pub fn new(settings: GeminiSettings) -> ClickforgeResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(*settings.request_timeout_secs()))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        if !settings.has_api_key() {
            warn!("No Gemini API key configured; calls will fail until one is set");
        }

        Ok(Self { http, settings })
    }

    /// Create a client with default settings and the key from the environment.
    pub fn from_env() -> ClickforgeResult<Self> {
        Self::new(GeminiSettings::default().with_env_api_key())
    }

    /// Settings this client was built with.
    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url().trim_end_matches('/'),
            model.trim_start_matches("models/")
        )
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let api_key = self
            .settings
            .api_key()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        let model = req
            .model()
            .as_deref()
            .unwrap_or(self.settings.default_model().as_str());
        let body = GenerateContentRequest::from_request(req);

        debug!(model, modality = ?req.modality(), "Sending request to Gemini API");

        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, model, "Failed to send request to Gemini API");
                if e.is_timeout() {
                    GeminiError::new(GeminiErrorKind::Timeout(
                        self.settings.request_timeout_secs() * 1000,
                    ))
                } else {
                    GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let kind = classify_http_error(status.as_u16(), &body);
            error!(status = %status, error = %kind, model, "Gemini API returned error");
            return Err(GeminiError::new(kind));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = %e, model, "Failed to parse Gemini response");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        if let Some(usage) = parsed.usage_metadata {
            debug!(
                model,
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "Gemini usage"
            );
        }
        if let Some(reason) = parsed
            .candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
            .filter(|reason| *reason != "STOP")
        {
            warn!(model, finish_reason = reason, "Gemini stopped early");
        }

        parsed.into_response()
    }
}

#[async_trait]
impl ModelDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> ClickforgeResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.settings.default_model()
    }
}
