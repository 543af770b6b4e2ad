//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, ContractError, FileError, GeminiError, InputError, JobError,
};

/// Every error condition Clickforge can report.
///
/// # Examples
///
/// ```
/// use clickforge_error::{ClickforgeError, ConfigError};
///
/// let err: ClickforgeError = ConfigError::new("bad toml").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// assert!(err.is_configuration());
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ClickforgeErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Gemini service error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Rejected user input
    #[from(InputError)]
    Input(InputError),
    /// Model output did not match its declared shape
    #[from(ContractError)]
    Contract(ContractError),
    /// A studio job failed
    #[from(JobError)]
    Job(JobError),
    /// Local file access failed
    #[from(FileError)]
    File(FileError),
}

/// Clickforge error with kind discrimination.
///
/// # Examples
///
/// ```
/// use clickforge_error::{ClickforgeResult, GeminiError, GeminiErrorKind};
///
/// fn call() -> ClickforgeResult<()> {
///     Err(GeminiError::new(GeminiErrorKind::MissingApiKey))?
/// }
///
/// let err = call().unwrap_err();
/// assert!(err.is_configuration());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Clickforge Error: {}", _0)]
pub struct ClickforgeError(Box<ClickforgeErrorKind>);

impl ClickforgeError {
    /// Create a new error from a kind.
    pub fn new(kind: ClickforgeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ClickforgeErrorKind {
        &self.0
    }

    /// Whether the error comes from configuration (missing or rejected API key,
    /// unreadable config files) rather than a single failed call.
    pub fn is_configuration(&self) -> bool {
        match self.kind() {
            ClickforgeErrorKind::Config(_) => true,
            ClickforgeErrorKind::Gemini(e) => e.kind.is_configuration(),
            _ => false,
        }
    }

    /// Human-readable message without source locations, for direct display.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ClickforgeErrorKind::Config(e) => e.message.clone(),
            ClickforgeErrorKind::Builder(e) => e.kind().to_string(),
            ClickforgeErrorKind::Gemini(e) => e.kind.to_string(),
            ClickforgeErrorKind::Input(e) => e.kind.user_message(),
            ClickforgeErrorKind::Contract(e) => format!("Malformed response: {}", e.kind),
            ClickforgeErrorKind::Job(e) => e.kind.user_message(),
            ClickforgeErrorKind::File(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to ClickforgeErrorKind
impl<T> From<T> for ClickforgeError
where
    T: Into<ClickforgeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Clickforge operations.
pub type ClickforgeResult<T> = std::result::Result<T, ClickforgeError>;
