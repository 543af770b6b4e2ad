//! Local file access errors raised by the command-line shell.

/// Kinds of file access failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FileErrorKind {
    /// Failed to read a file
    #[display("Failed to read {}: {}", path, message)]
    Read {
        /// Path that was read
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Failed to write a file
    #[display("Failed to write {}: {}", path, message)]
    Write {
        /// Path that was written
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Failed to create an output directory
    #[display("Failed to create directory {}: {}", path, message)]
    DirectoryCreation {
        /// Directory path
        path: String,
        /// Underlying I/O message
        message: String,
    },
}

/// File error with location tracking.
///
/// # Examples
///
/// ```
/// use clickforge_error::{FileError, FileErrorKind};
///
/// let err = FileError::new(FileErrorKind::Read {
///     path: "thumb.png".to_string(),
///     message: "No such file or directory".to_string(),
/// });
/// assert!(format!("{}", err).contains("thumb.png"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("File Error: {} at line {} in {}", kind, line, file)]
pub struct FileError {
    /// The kind of error that occurred
    pub kind: FileErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FileError {
    /// Create a new FileError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FileErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
