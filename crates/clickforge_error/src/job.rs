//! Job-level failures surfaced to the presentation shell.

/// Failure of one of the three studio jobs.
///
/// The `String` payloads carry the rendered underlying cause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum JobErrorKind {
    /// Analysis call or its response failed
    #[display("Analysis failed: {}", _0)]
    AnalysisFailed(String),
    /// Combo generation call or its response failed
    #[display("Combo generation failed: {}", _0)]
    ImageGenerationFailed(String),
    /// A combo image call returned no inline image
    #[display("Image data not found in response for prompt: {}", prompt)]
    ImageDataMissing {
        /// Thumbnail prompt that produced no image
        prompt: String,
    },
    /// Script call or its response failed
    #[display("Script generation failed: {}", _0)]
    ScriptFailed(String),
}

impl JobErrorKind {
    /// Message suitable for direct display.
    pub fn user_message(&self) -> String {
        match self {
            JobErrorKind::AnalysisFailed(_) => {
                "Failed to analyze combination. Please check the API key and try again.".to_string()
            }
            JobErrorKind::ImageGenerationFailed(_) => {
                "Failed to generate new combinations. Please try again.".to_string()
            }
            JobErrorKind::ImageDataMissing { prompt } => {
                format!("Image data not found in response for prompt: {}", prompt)
            }
            JobErrorKind::ScriptFailed(_) => "Failed to generate script. Please try again.".to_string(),
        }
    }
}

/// Job error with source location tracking.
///
/// # Examples
///
/// ```
/// use clickforge_error::{JobError, JobErrorKind};
///
/// let err = JobError::new(JobErrorKind::ScriptFailed("HTTP 500".into()));
/// assert!(format!("{}", err).contains("HTTP 500"));
/// assert_eq!(err.kind.user_message(), "Failed to generate script. Please try again.");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Job Error: {} at line {} in {}", kind, line, file)]
pub struct JobError {
    /// The kind of error that occurred
    pub kind: JobErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl JobError {
    /// Create a new JobError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: JobErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
