//! Input parts of a model request.

use crate::EncodedImage;
use serde::{Deserialize, Serialize};

/// One part of a prompt sent to a model.
///
/// # Examples
///
/// ```
/// use clickforge_core::{EncodedImage, Input};
///
/// let parts = vec![
///     Input::Text("Describe this thumbnail".to_string()),
///     Input::Image(EncodedImage::new("image/jpeg", "/9j/4AAQ")),
/// ];
/// assert_eq!(parts.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text instruction.
    Text(String),
    /// Inline image attachment.
    Image(EncodedImage),
}
