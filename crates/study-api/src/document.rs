//! Documents accepted by the upload endpoint.

use std::path::Path;

use crate::error::ApiError;

/// MIME type of the only document kind the ingestion pipeline accepts.
pub const PDF_MIME: &str = "application/pdf";

const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// A PDF ready to be sent as the multipart `file` field.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadDocument {
    filename: String,
    bytes: Vec<u8>,
}

impl UploadDocument {
    /// Wrap in-memory bytes, checking the file name and the PDF signature.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnsupportedDocument`] for empty names, non-PDF
    /// extensions, or content that does not start with `%PDF-`.
    pub fn from_bytes(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ApiError> {
        let filename = filename.into();
        let reject = |reason: &str| ApiError::UnsupportedDocument {
            filename: filename.clone(),
            reason: reason.to_string(),
        };

        if filename.trim().is_empty() {
            return Err(reject("empty filename"));
        }
        let mime = mime_guess::from_path(&filename).first_raw();
        if mime != Some(PDF_MIME) {
            return Err(reject("only PDF documents are accepted"));
        }
        if !bytes.starts_with(PDF_SIGNATURE) {
            return Err(reject("file content is not a PDF"));
        }

        Ok(Self { filename, bytes })
    }

    /// Read a document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnsupportedDocument`] if the file cannot be read or
    /// is not a PDF.
    pub async fn from_path(path: &Path) -> Result<Self, ApiError> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::UnsupportedDocument {
                filename: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Self::from_bytes(filename, bytes)
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Build the multipart body for `POST /uploads/{workspace_id}`.
    pub(crate) fn to_form(&self) -> Result<reqwest::multipart::Form, ApiError> {
        let part = reqwest::multipart::Part::bytes(self.bytes.clone())
            .file_name(self.filename.clone())
            .mime_str(PDF_MIME)?;
        Ok(reqwest::multipart::Form::new().part("file", part))
    }
}

impl std::fmt::Debug for UploadDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadDocument")
            .field("filename", &self.filename)
            .field("len", &self.bytes.len())
            .finish()
    }
}
