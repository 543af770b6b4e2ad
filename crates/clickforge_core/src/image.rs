//! Base64 image payloads and data URIs.

use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::{Engine, alphabet};
use clickforge_error::{ClickforgeResult, InputError, InputErrorKind};
use serde::{Deserialize, Serialize};

/// Standard alphabet; accepts payloads with or without trailing `=`.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Thumbnail formats accepted for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ImageMime {
    /// `image/png`
    #[display("image/png")]
    Png,
    /// `image/jpeg`
    #[display("image/jpeg")]
    Jpeg,
    /// `image/webp`
    #[display("image/webp")]
    Webp,
}

impl ImageMime {
    /// Match a declared MIME type against the accepted set.
    ///
    /// # Examples
    ///
    /// ```
    /// use clickforge_core::ImageMime;
    ///
    /// assert_eq!(ImageMime::parse("image/JPEG"), Some(ImageMime::Jpeg));
    /// assert_eq!(ImageMime::parse("image/gif"), None);
    /// ```
    pub fn parse(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// Canonical MIME string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    /// Guess from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
        }
    }
}

/// A base64 payload with its MIME type tracked alongside.
///
/// The payload never carries a `data:` prefix.
///
/// # Examples
///
/// ```
/// use clickforge_core::EncodedImage;
///
/// let image = EncodedImage::from_bytes("image/png", &[0x89, 0x50, 0x4E, 0x47]);
/// let uri = image.to_data_uri();
/// assert_eq!(uri, "data:image/png;base64,iVBORw==");
///
/// let parsed = EncodedImage::from_data_uri(&uri).unwrap();
/// assert_eq!(parsed, image);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    /// MIME type, e.g. `image/png`
    pub mime_type: String,
    /// Raw base64 payload
    pub data: String,
}

impl EncodedImage {
    /// Wrap an already-encoded payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Base64-encode raw bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    /// Split a `data:<mime>;base64,<payload>` URI.
    pub fn from_data_uri(uri: &str) -> ClickforgeResult<Self> {
        let invalid = || InputError::new(InputErrorKind::InvalidDataUri(preview(uri)));

        let rest = uri.trim().strip_prefix("data:").ok_or_else(invalid)?;
        let (header, payload) = rest.split_once(',').ok_or_else(invalid)?;
        let mime_type = header.strip_suffix(";base64").ok_or_else(invalid)?;
        if mime_type.is_empty() {
            return Err(invalid().into());
        }

        Ok(Self::new(mime_type, payload))
    }

    /// Join MIME type and payload into a data URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the payload back to bytes. Padding is optional.
    pub fn decode(&self) -> ClickforgeResult<Vec<u8>> {
        LENIENT.decode(self.data.trim().as_bytes()).map_err(|e| {
            InputError::new(InputErrorKind::InvalidDataUri(format!("bad base64 payload: {}", e)))
                .into()
        })
    }
}

fn preview(uri: &str) -> String {
    uri.chars().take(40).collect()
}
