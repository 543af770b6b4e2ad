//! Output parts of a model response.

use serde::{Deserialize, Serialize};

/// Supported output parts from a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Text output, possibly JSON when a response schema was declared.
    Text(String),

    /// Inline image output.
    Image {
        /// MIME type of the image
        mime: String,
        /// Decoded image bytes
        data: Vec<u8>,
    },
}
