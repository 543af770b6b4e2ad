//! Thumbnail validation and base64 encoding.

use clickforge_core::{EncodedImage, ImageMime};
use clickforge_error::{ClickforgeResult, InputError, InputErrorKind};

/// Largest accepted thumbnail, exclusive (4 MiB).
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

/// Validate a thumbnail and encode it for transport.
///
/// The MIME type must be PNG, JPEG or WebP and the file must be smaller than
/// [`MAX_IMAGE_BYTES`]. The returned payload carries no `data:` prefix.
///
/// # Examples
///
/// ```
/// use clickforge_studio::encode_image;
///
/// let encoded = encode_image(&[0xFF, 0xD8, 0xFF], "image/jpeg").unwrap();
/// assert_eq!(encoded.mime_type, "image/jpeg");
/// assert_eq!(encoded.data, "/9j/");
///
/// assert!(encode_image(b"GIF89a", "image/gif").is_err());
/// ```
pub fn encode_image(bytes: &[u8], mime_type: &str) -> ClickforgeResult<EncodedImage> {
    let mime = accepted_mime(mime_type)?;
    check_size(bytes.len())?;
    Ok(EncodedImage::from_bytes(mime.as_str(), bytes))
}

fn accepted_mime(mime_type: &str) -> Result<ImageMime, InputError> {
    ImageMime::parse(mime_type)
        .ok_or_else(|| InputError::new(InputErrorKind::UnsupportedFormat(mime_type.to_string())))
}

fn check_size(size: usize) -> Result<(), InputError> {
    if size >= MAX_IMAGE_BYTES {
        return Err(InputError::new(InputErrorKind::TooLarge {
            size,
            limit: MAX_IMAGE_BYTES,
        }));
    }
    Ok(())
}

/// Thumbnail as handed over by the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageInput {
    /// File bytes with the declared MIME type
    Raw {
        /// File contents
        bytes: Vec<u8>,
        /// Declared MIME type
        mime_type: String,
    },
    /// Already base64-encoded
    Encoded(EncodedImage),
}

impl ImageInput {
    /// Raw file bytes plus declared MIME type.
    pub fn raw(bytes: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self::Raw {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    /// A `data:<mime>;base64,...` URI, as a browser file reader produces.
    pub fn data_uri(uri: &str) -> ClickforgeResult<Self> {
        Ok(Self::Encoded(EncodedImage::from_data_uri(uri)?))
    }

    /// Validate and encode, applying the same rules to both forms.
    pub fn into_encoded(self) -> ClickforgeResult<EncodedImage> {
        match self {
            Self::Raw { bytes, mime_type } => encode_image(&bytes, &mime_type),
            Self::Encoded(image) => {
                accepted_mime(&image.mime_type)?;
                let bytes = image.decode()?;
                encode_image(&bytes, &image.mime_type)
            }
        }
    }
}

impl From<EncodedImage> for ImageInput {
    fn from(image: EncodedImage) -> Self {
        Self::Encoded(image)
    }
}
