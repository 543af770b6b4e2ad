//! Input validation errors raised before any model call.

/// Input validation conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InputErrorKind {
    /// Title is empty or whitespace
    #[display("Title must not be empty")]
    EmptyTitle,
    /// No thumbnail was supplied
    #[display("No thumbnail provided")]
    MissingImage,
    /// Image MIME type outside the accepted set
    #[display("Unsupported image format: {}", _0)]
    UnsupportedFormat(String),
    /// Image exceeds the size limit
    #[display("Image is {} bytes, limit is {} bytes", size, limit)]
    TooLarge {
        /// Size of the rejected image in bytes
        size: usize,
        /// Maximum accepted size in bytes
        limit: usize,
    },
    /// A data URI could not be split into MIME type and base64 payload
    #[display("Invalid data URI: {}", _0)]
    InvalidDataUri(String),
}

impl InputErrorKind {
    /// Message suitable for showing next to the input form.
    pub fn user_message(&self) -> String {
        match self {
            InputErrorKind::EmptyTitle | InputErrorKind::MissingImage => {
                "Please provide both a thumbnail and a title.".to_string()
            }
            InputErrorKind::UnsupportedFormat(_) => {
                "Unsupported file type. Please use PNG, JPG, or WEBP.".to_string()
            }
            InputErrorKind::TooLarge { .. } => "File size should not exceed 4MB.".to_string(),
            InputErrorKind::InvalidDataUri(_) => {
                "The selected image could not be read. Please choose another file.".to_string()
            }
        }
    }
}

/// Input error with source location tracking.
///
/// # Examples
///
/// ```
/// use clickforge_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::UnsupportedFormat("image/gif".into()));
/// assert!(format!("{}", err).contains("image/gif"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The kind of error that occurred
    pub kind: InputErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
