//! Reading documents from disk for upload

use docqa_domain::{DomainError, UploadFile};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentReadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} has no usable file name")]
    NoFileName { path: PathBuf },

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Load a document into an [`UploadFile`], named after the path's last component
pub async fn read_document(path: &Path) -> Result<UploadFile, DocumentReadError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DocumentReadError::NoFileName {
            path: path.to_path_buf(),
        })?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| DocumentReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(UploadFile::new(file_name, bytes)?)
}
