//! Title + thumbnail combination records.

use crate::EncodedImage;
use clickforge_error::ClickforgeResult;
use serde::{Deserialize, Serialize};

/// A proposed title with the prompt for its thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboIdea {
    /// Proposed video title
    pub title: String,
    /// Image-generation prompt for the matching thumbnail
    pub thumbnail_prompt: String,
}

/// The envelope the combo-ideas call returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboIdeaBatch {
    /// Ideas in the order the model produced them
    pub combinations: Vec<ComboIdea>,
}

/// A finished combination: title plus generated thumbnail as a data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCombo {
    /// Proposed video title
    pub title: String,
    /// `data:<mime>;base64,<payload>`
    pub image_url: String,
}

impl GeneratedCombo {
    /// Pair a title with a generated image.
    pub fn new(title: impl Into<String>, image: &EncodedImage) -> Self {
        Self {
            title: title.into(),
            image_url: image.to_data_uri(),
        }
    }

    /// Split the data URI back into MIME type and payload.
    pub fn image(&self) -> ClickforgeResult<EncodedImage> {
        EncodedImage::from_data_uri(&self.image_url)
    }
}
