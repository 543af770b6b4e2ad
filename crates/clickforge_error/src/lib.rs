//! Error types for Clickforge.
//!
//! # Error Hierarchy
//!
//! Every concern follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind with the source location that created it
//! - Constructors use `#[track_caller]` so the location is captured automatically
//!
//! [`ClickforgeError`] unifies them and knows how to present itself to a user
//! via [`ClickforgeError::user_message`].
//!
//! # Examples
//!
//! ```
//! use clickforge_error::{ClickforgeResult, InputError, InputErrorKind};
//!
//! fn check_title(title: &str) -> ClickforgeResult<()> {
//!     if title.trim().is_empty() {
//!         Err(InputError::new(InputErrorKind::EmptyTitle))?
//!     }
//!     Ok(())
//! }
//!
//! let err = check_title("  ").unwrap_err();
//! assert_eq!(err.user_message(), "Please provide both a thumbnail and a title.");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod contract;
mod error;
mod file;
mod gemini;
mod input;
mod job;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use contract::{ContractError, ContractErrorKind};
pub use error::{ClickforgeError, ClickforgeErrorKind, ClickforgeResult};
pub use file::{FileError, FileErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use input::{InputError, InputErrorKind};
pub use job::{JobError, JobErrorKind};
