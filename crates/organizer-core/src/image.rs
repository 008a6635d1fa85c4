//! Image attachments stored inline as data URLs.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Full image and thumbnail, each a `data:` URL.
///
/// Items without an attachment carry `null` for both fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl ImageAttachment {
    pub fn none() -> Self {
        Self::default()
    }

    /// Encode raw image bytes. The thumbnail is the full image.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let url = format!("data:{mime};base64,{}", STANDARD.encode(bytes));
        Self {
            image: Some(url.clone()),
            thumbnail: Some(url),
        }
    }

    /// Read an image file and encode it, inferring the MIME type from the
    /// extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mime = mime_for(path).ok_or_else(|| ValidationError::InvalidValue {
            field: "image".into(),
            message: format!("{} is not a supported image type", path.display()),
        })?;
        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "encoded image attachment");
        Ok(Self::from_bytes(mime, &bytes))
    }

    pub fn is_present(&self) -> bool {
        self.image.is_some()
    }

    /// Decode the full image back into bytes.
    pub fn decode(&self) -> Option<Vec<u8>> {
        let url = self.image.as_deref()?;
        let (_, payload) = url.split_once(";base64,")?;
        STANDARD.decode(payload).ok()
    }
}

/// Content used for items created from a captured image.
pub fn capture_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("Image: {name}")
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
