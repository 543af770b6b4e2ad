//! Model selection and timeouts for studio jobs.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-job model names and the caller-side call timeout.
///
/// Read from the `[studio]` config table; every field has a default.
///
/// # Examples
///
/// ```
/// use clickforge_studio::StudioSettings;
/// use std::time::Duration;
///
/// let settings = StudioSettings::default().with_call_timeout(Duration::from_secs(5));
/// assert_eq!(settings.call_timeout(), Duration::from_secs(5));
/// assert_eq!(settings.script_model(), "gemini-2.5-pro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct StudioSettings {
    /// Model for the title + thumbnail analysis
    analysis_model: String,
    /// Model proposing combo titles and thumbnail prompts
    ideas_model: String,
    /// Model drawing combo thumbnails
    image_model: String,
    /// Model writing the script
    script_model: String,
    /// Upper bound on a single model call, in milliseconds
    #[getter(skip)]
    call_timeout_ms: u64,
}

impl Default for StudioSettings {
    fn default() -> Self {
        Self {
            analysis_model: "gemini-2.5-flash".to_string(),
            ideas_model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            script_model: "gemini-2.5-pro".to_string(),
            call_timeout_ms: 60_000,
        }
    }
}

impl StudioSettings {
    /// Upper bound on a single model call.
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }

    /// Replace the call timeout.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Use one model for every text job.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.analysis_model = model.clone();
        self.ideas_model = model.clone();
        self.script_model = model;
        self
    }

    /// Replace the image model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }
}
