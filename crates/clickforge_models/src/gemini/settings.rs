//! Connection settings for the Gemini REST API.

use serde::{Deserialize, Serialize};
use std::env;

/// Default REST endpoint root.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini connection settings, usually read from the `[gemini]` config table.
///
/// The API key is never serialized or printed.
///
/// # Examples
///
/// ```
/// use clickforge_models::GeminiSettings;
///
/// let settings = GeminiSettings::default().with_api_key("secret-key");
/// assert!(settings.has_api_key());
/// assert!(!format!("{:?}", settings).contains("secret-key"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct GeminiSettings {
    /// API key; falls back to `GEMINI_API_KEY` / `API_KEY` via [`Self::with_env_api_key`]
    #[serde(skip_serializing)]
    #[getter(skip)]
    api_key: Option<String>,
    /// REST endpoint root
    base_url: String,
    /// Model used when a request names none
    default_model: String,
    /// HTTP client timeout in seconds
    request_timeout_secs: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: "gemini-2.5-flash".to_string(),
            request_timeout_secs: 120,
        }
    }
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl GeminiSettings {
    /// Set the API key explicitly.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a different endpoint root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fill a missing key from `GEMINI_API_KEY`, then `API_KEY`.
    pub fn with_env_api_key(mut self) -> Self {
        if !self.has_api_key() {
            self.api_key = env::var("GEMINI_API_KEY")
                .or_else(|_| env::var("API_KEY"))
                .ok()
                .filter(|key| !key.trim().is_empty());
        }
        self
    }

    /// Whether a non-blank key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// The configured key, ignoring blank values.
    pub(crate) fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
