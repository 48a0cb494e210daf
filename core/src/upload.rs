//! File uploads and the pre-flight checks hosts run before calling the API.
//!
//! The client operations never enforce these limits themselves; the backend
//! has the final word (413/400). Hosts call `validate_*` to reject obviously
//! bad input before spending an upload on it.

use std::path::Path;

use thiserror::Error;

pub const MAX_TEXT_CHARS: usize = 5000;
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub const IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg", "image/gif", "image/bmp", "image/webp"];
pub const DOCUMENT_TYPES: &[&str] = &["image/png", "image/jpeg", "application/pdf"];

/// A file to send as one multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    /// Read a file from disk, inferring its MIME type from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let content_type = mime_for_path(path);
        Ok(Self {
            file_name,
            content_type: content_type.to_string(),
            bytes,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some text to translate.")]
    EmptyText,

    #[error("Text is too long ({chars} characters, maximum 5000).")]
    TextTooLong { chars: usize },

    #[error("File is empty.")]
    EmptyFile,

    #[error("File too large ({bytes} bytes, maximum 10MB).")]
    FileTooLarge { bytes: usize },

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
}

pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    let chars = text.chars().count();
    if chars > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong { chars });
    }
    Ok(())
}

pub fn validate_image(upload: &Upload) -> Result<(), ValidationError> {
    validate_upload(upload, IMAGE_TYPES)
}

pub fn validate_document(upload: &Upload) -> Result<(), ValidationError> {
    validate_upload(upload, DOCUMENT_TYPES)
}

fn validate_upload(upload: &Upload, allowed: &[&str]) -> Result<(), ValidationError> {
    if upload.is_empty() {
        return Err(ValidationError::EmptyFile);
    }
    if upload.len() > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge { bytes: upload.len() });
    }
    if !allowed.contains(&upload.content_type.as_str()) {
        return Err(ValidationError::UnsupportedType(upload.content_type.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn text_limits() {
        assert_eq!(validate_text("  \n"), Err(ValidationError::EmptyText));
        assert!(validate_text(&"a".repeat(MAX_TEXT_CHARS)).is_ok());
        assert_eq!(
            validate_text(&"a".repeat(MAX_TEXT_CHARS + 1)),
            Err(ValidationError::TextTooLong { chars: MAX_TEXT_CHARS + 1 })
        );
    }

    #[test]
    fn text_limit_counts_characters_not_bytes() {
        // 5000 two-byte characters is still within the limit.
        assert!(validate_text(&"é".repeat(MAX_TEXT_CHARS)).is_ok());
    }

    #[test]
    fn image_rules() {
        assert!(validate_image(&Upload::new("a.png", "image/png", vec![1])).is_ok());
        assert_eq!(
            validate_image(&Upload::new("a.pdf", "application/pdf", vec![1])),
            Err(ValidationError::UnsupportedType("application/pdf".to_string()))
        );
        assert_eq!(
            validate_image(&Upload::new("a.png", "image/png", Vec::new())),
            Err(ValidationError::EmptyFile)
        );
        let big = Upload::new("a.png", "image/png", vec![0; MAX_UPLOAD_BYTES + 1]);
        assert!(matches!(validate_image(&big), Err(ValidationError::FileTooLarge { .. })));
    }

    #[test]
    fn document_rules_accept_pdf_but_not_gif() {
        assert!(validate_document(&Upload::new("f.pdf", "application/pdf", vec![1])).is_ok());
        assert!(validate_document(&Upload::new("f.gif", "image/gif", vec![1])).is_err());
    }

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_for_path(Path::new("scan.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("form.pdf")), "application/pdf");
        assert_eq!(mime_for_path(Path::new("notes")), "application/octet-stream");
    }

    #[test]
    fn from_path_reads_bytes_and_name() {
        let mut file = tempfile::Builder::new().suffix(".webp").tempfile().unwrap();
        file.write_all(b"RIFF").unwrap();
        let upload = Upload::from_path(file.path()).unwrap();
        assert_eq!(upload.content_type, "image/webp");
        assert_eq!(upload.bytes, b"RIFF");
        assert!(upload.file_name.ends_with(".webp"));
    }
}
