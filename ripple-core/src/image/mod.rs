//! Image encoding for profile photos.
//!
//! A photo field holds one of two shapes: a *Local-form* value (the image
//! bytes embedded in a `data:` URL, produced client-side before upload) or a
//! *Remote-form* value (a URL pointing at an already-hosted image). The
//! submission pipeline uses [`classify`] to decide whether an upload is
//! needed and [`decode_data_url`] to reconstruct the selected file from a
//! Local-form value.

use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

/// Structural prefix marking a Local-form (embedded-data) image value.
static LOCAL_IMAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/(png|jpe?g|gif|webp);base64,").expect("literal pattern compiles")
});

/// Whether a photo field value embeds image bytes or references a hosted
/// image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoKind {
    /// Locally-encoded data URL, not yet uploaded anywhere.
    Local,
    /// Ordinary URL (or any other string, including the empty string).
    Remote,
}

/// Classify a photo field value. Pure and total: any string that does not
/// carry the embedded-data prefix is `Remote`.
pub fn classify(value: &str) -> PhotoKind {
    if LOCAL_IMAGE_RE.is_match(value) {
        PhotoKind::Local
    } else {
        PhotoKind::Remote
    }
}

/// A file the user picked for the current submission attempt.
///
/// Transient: lives only for one submission, at most one per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name, used by upload backends to derive an extension.
    pub name: String,
    /// Declared content type (e.g. `image/png`).
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Whether the declared content type marks this as an image.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Encode a selected file as a previewable data URL.
///
/// Files whose declared content type is not an image are skipped silently:
/// the picker accepts them, the preview simply never materializes.
pub fn encode_selected(file: &SelectedFile) -> Option<String> {
    if !file.is_image() {
        return None;
    }
    Some(format!(
        "data:{};base64,{}",
        file.content_type,
        STANDARD.encode(&file.bytes)
    ))
}

/// Read a file from disk and encode it as a data URL.
///
/// The content type is inferred from the extension; non-image selections
/// produce `Ok(None)` without surfacing an error, matching
/// [`encode_selected`].
pub async fn encode_file(path: &Path) -> Result<Option<String>> {
    let content_type = match content_type_for(path) {
        Some(mime) => mime,
        None => return Ok(None),
    };
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(encode_selected(&SelectedFile {
        name,
        content_type: content_type.to_string(),
        bytes,
    }))
}

/// Decode a Local-form value back into its content type and raw bytes.
///
/// Returns `None` for Remote-form values and for malformed payloads.
pub fn decode_data_url(value: &str) -> Option<(String, Vec<u8>)> {
    if classify(value) != PhotoKind::Local {
        return None;
    }
    let rest = value.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => Some("image/png"),
        Some("jpg") | Some("jpeg") => Some("image/jpeg"),
        Some("gif") => Some("image/gif"),
        Some("webp") => Some("image/webp"),
        _ => None,
    }
}
