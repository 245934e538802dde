//! Attachment (uploaded file) checks

use std::fmt;

/// Largest accepted attachment: 5 MiB
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types the server accepts
pub const ALLOWED_ATTACHMENT_TYPES: &[&str] = &["image/jpeg", "image/png", "application/pdf"];

/// Why an attachment was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentError {
    /// Larger than [`MAX_ATTACHMENT_BYTES`]
    TooLarge,
    /// MIME type outside [`ALLOWED_ATTACHMENT_TYPES`]
    UnsupportedType,
}

impl fmt::Display for AttachmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentError::TooLarge => {
                write!(f, "attachment exceeds {} bytes", MAX_ATTACHMENT_BYTES)
            }
            AttachmentError::UnsupportedType => write!(f, "attachment type is not allowed"),
        }
    }
}

impl std::error::Error for AttachmentError {}

/// Validates an attachment by size and declared MIME type.
///
/// Size is checked first, so an oversized file of the wrong type reports
/// [`AttachmentError::TooLarge`].
pub fn check_attachment(size: u64, content_type: &str) -> Result<(), AttachmentError> {
    if size > MAX_ATTACHMENT_BYTES {
        return Err(AttachmentError::TooLarge);
    }
    if !ALLOWED_ATTACHMENT_TYPES.contains(&content_type) {
        return Err(AttachmentError::UnsupportedType);
    }
    Ok(())
}

/// Best-effort MIME type from a file name's extension
pub fn guess_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
