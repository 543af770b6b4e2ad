//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GeminiErrorKind {
    /// No API key in configuration or environment
    #[display("Gemini API key not configured (set GEMINI_API_KEY or gemini.api_key)")]
    MissingApiKey,
    /// The service rejected the configured API key
    #[display("Gemini API key rejected: {}", _0)]
    InvalidApiKey(String),
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request could not be sent or the response body could not be read
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The call did not settle within the allotted time
    #[display("Model call timed out after {} ms", _0)]
    Timeout(u64),
    /// Base64 decoding of an inline part failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// The prompt was blocked by the service's safety filters
    #[display("Prompt blocked by Gemini: {}", _0)]
    Blocked(String),
}

impl GeminiErrorKind {
    /// Whether this condition stems from configuration rather than the call itself.
    ///
    /// A missing or rejected API key can't be fixed by retrying the job.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::MissingApiKey | GeminiErrorKind::InvalidApiKey(_)
        )
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use clickforge_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// assert!(err.kind.is_configuration());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
