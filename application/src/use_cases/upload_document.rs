//! Upload Document use case
//!
//! Sends a document to the backend and returns the session it opened.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
use crate::ports::qa_backend::{BackendError, QaBackend};
use docqa_domain::{UploadFile, UploadReceipt};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum UploadDocumentError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

impl UploadDocumentError {
    pub fn server_message(&self) -> Option<&str> {
        match self {
            UploadDocumentError::Backend(e) => e.server_message(),
        }
    }
}

pub struct UploadDocumentUseCase<B: QaBackend + 'static> {
    backend: Arc<B>,
    logger: Arc<dyn ConversationLogger>,
}

impl<B: QaBackend + 'static> UploadDocumentUseCase<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(&self, file: &UploadFile) -> Result<UploadReceipt, UploadDocumentError> {
        info!("Uploading {} ({} bytes)", file.file_name(), file.len());

        match self.backend.upload(file).await {
            Ok(receipt) => {
                info!("Upload accepted, session {}", receipt.session_id);
                self.logger.log(ConversationEvent::new(
                    "upload",
                    json!({
                        "file_name": file.file_name(),
                        "bytes": file.len(),
                        "session_id": receipt.session_id.as_str(),
                        "message": receipt.message,
                    }),
                ));
                Ok(receipt)
            }
            Err(e) => {
                warn!("Upload of {} failed: {}", file.file_name(), e);
                self.logger.log(ConversationEvent::new(
                    "error",
                    json!({
                        "operation": "upload",
                        "file_name": file.file_name(),
                        "error": e.to_string(),
                    }),
                ));
                Err(e.into())
            }
        }
    }
}
