//! Embedded media references and extracted binary assets.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A reference to embedded media in the source document.
///
/// The payload is optional: the fetch layer may fail to download an
/// image, in which case conversion still emits a reference to the
/// derived name and records a warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRef {
    /// Stable source identifier (API object id)
    pub source_id: String,

    /// Alternative text for the rendered image reference
    pub alt_text: Option<String>,

    /// Target rendered name, if the source supplies one
    pub name_hint: Option<String>,

    /// MIME type (e.g., "image/png") if known
    pub mime_type: Option<String>,

    /// Binary payload, when the fetch layer obtained it
    #[serde(skip_serializing)]
    pub data: Option<Vec<u8>>,
}

impl ImageRef {
    /// Create an image reference with no payload.
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            alt_text: None,
            name_hint: None,
            mime_type: None,
            data: None,
        }
    }

    /// Parse an embedded `data:` URI into an image reference.
    ///
    /// Source documents sometimes inline small images as
    /// `data:<mime>;base64,<payload>`. Returns `None` when the string is
    /// not a base64 data URI or the payload does not decode.
    pub fn from_data_uri(source_id: impl Into<String>, uri: &str) -> Option<Self> {
        let pattern = Regex::new(r"^data:([^;,]+);base64,(.+)$").unwrap();
        let caps = pattern.captures(uri.trim())?;
        let mime = caps.get(1)?.as_str().to_string();
        let data = BASE64.decode(caps.get(2)?.as_str()).ok()?;

        Some(Self {
            source_id: source_id.into(),
            alt_text: None,
            name_hint: None,
            mime_type: Some(mime),
            data: Some(data),
        })
    }

    /// Set the binary payload and return self.
    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the alternative text and return self.
    pub fn with_alt_text(mut self, alt: impl Into<String>) -> Self {
        self.alt_text = Some(alt.into());
        self
    }

    /// Set the target rendered name and return self.
    pub fn with_name_hint(mut self, hint: impl Into<String>) -> Self {
        self.name_hint = Some(hint.into());
        self
    }

    /// Set the MIME type and return self.
    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    /// Check if the binary payload is present.
    pub fn has_payload(&self) -> bool {
        self.data.is_some()
    }

    /// The MIME type, falling back to magic-byte detection on the payload.
    pub fn effective_mime_type(&self) -> Option<String> {
        if let Some(ref mime) = self.mime_type {
            return Some(mime.clone());
        }
        self.data
            .as_deref()
            .and_then(detect_mime_type)
            .map(str::to_string)
    }
}

/// A binary asset produced by one export call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedAsset {
    /// Rendered name, unique within the export call
    pub name: String,

    /// Raw binary data
    #[serde(skip_serializing)]
    pub data: Vec<u8>,

    /// MIME type (e.g., "image/png")
    pub mime_type: String,
}

impl ExportedAsset {
    /// Create a new asset.
    pub fn new(name: impl Into<String>, data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Get the size of the asset data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Get the file extension for this asset's MIME type.
    pub fn extension(&self) -> &'static str {
        extension_for_mime(&self.mime_type)
    }
}

/// Map a MIME type to a file extension.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/tiff" => "tiff",
        "image/bmp" => "bmp",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        "image/x-emf" | "image/emf" => "emf",
        "application/pdf" => "pdf",
        _ => "bin",
    }
}

/// Detect MIME type from data magic bytes.
pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
    if data.len() < 8 {
        return None;
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }

    // GIF: GIF87a or GIF89a
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }

    // TIFF: 49 49 2A 00 (little-endian) or 4D 4D 00 2A (big-endian)
    if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
        return Some("image/tiff");
    }

    // BMP: BM
    if data.starts_with(b"BM") {
        return Some("image/bmp");
    }

    // WEBP: RIFF....WEBP
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    None
}
