//! Model provider integrations for Clickforge.
//!
//! Each provider sits behind its own feature flag and implements
//! [`clickforge_interface::ModelDriver`].
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - enabled by default via the `gemini` feature
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use clickforge_models::{GeminiClient, GeminiSettings};
//! use clickforge_interface::ModelDriver;
//! use clickforge_core::{GenerateRequest, Input};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(GeminiSettings::default().with_env_api_key())?;
//! let request = GenerateRequest::builder()
//!     .inputs(vec![Input::Text("Hello".to_string())])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiClient, GeminiResult, GeminiSettings};
