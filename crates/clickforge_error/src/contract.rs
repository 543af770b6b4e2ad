//! Structured-response contract violations (malformed model output).

/// Ways a model response can fail its declared shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContractErrorKind {
    /// Response text is not valid JSON or does not deserialize
    #[display("Response is not valid JSON: {}", _0)]
    InvalidJson(String),
    /// A required field is absent or null
    #[display("Missing required field `{}`", _0)]
    MissingField(String),
    /// A field is present with the wrong type
    #[display("Field `{}` should be {}", path, expected)]
    WrongType {
        /// JSON path of the offending value
        path: String,
        /// Expected schema type
        expected: String,
    },
    /// A batch holds fewer records than the job needs
    #[display("Expected {} records, got {}", expected, actual)]
    BatchSize {
        /// Records required
        expected: usize,
        /// Records received
        actual: usize,
    },
}

/// Malformed response error with source location tracking.
///
/// # Examples
///
/// ```
/// use clickforge_error::{ContractError, ContractErrorKind};
///
/// let err = ContractError::new(ContractErrorKind::MissingField("weaknesses".into()));
/// assert!(format!("{}", err).contains("Malformed response"));
/// assert!(format!("{}", err).contains("weaknesses"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Malformed response: {} at line {} in {}", kind, line, file)]
pub struct ContractError {
    /// The kind of error that occurred
    pub kind: ContractErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ContractError {
    /// Create a new ContractError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
