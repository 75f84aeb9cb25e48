//! Upload payload value object

use crate::core::error::DomainError;

/// A document selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    file_name: String,
    bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DomainError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(DomainError::EmptyFileName);
        }
        Ok(Self { file_name, bytes })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIME type guessed from the file extension
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => "application/pdf",
            Some("txt") => "text/plain",
            Some("md") => "text/markdown",
            _ => "application/octet-stream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_guess() {
        let pdf = UploadFile::new("Manual.PDF", vec![1]).unwrap();
        assert_eq!(pdf.mime_type(), "application/pdf");

        let txt = UploadFile::new("notes.txt", vec![]).unwrap();
        assert_eq!(txt.mime_type(), "text/plain");

        let other = UploadFile::new("archive", vec![]).unwrap();
        assert_eq!(other.mime_type(), "application/octet-stream");
    }

    #[test]
    fn test_blank_file_name_rejected() {
        assert_eq!(
            UploadFile::new(" ", vec![]).unwrap_err(),
            DomainError::EmptyFileName
        );
    }
}
