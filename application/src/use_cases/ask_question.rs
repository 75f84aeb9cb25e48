//! Ask Question use case
//!
//! Sends one question to the backend, scoped to the current session.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
use crate::ports::qa_backend::{BackendError, QaBackend};
use docqa_domain::{Answer, Question, SessionId};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum AskQuestionError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Input for the AskQuestion use case
#[derive(Debug, Clone)]
pub struct AskQuestionInput {
    pub question: Question,
    /// `None` until a document has been uploaded
    pub session_id: Option<SessionId>,
}

impl AskQuestionInput {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            session_id: None,
        }
    }

    pub fn with_session(mut self, session_id: Option<SessionId>) -> Self {
        self.session_id = session_id;
        self
    }
}

pub struct AskQuestionUseCase<B: QaBackend + 'static> {
    backend: Arc<B>,
    logger: Arc<dyn ConversationLogger>,
}

impl<B: QaBackend + 'static> AskQuestionUseCase<B> {
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

    pub async fn execute(&self, input: AskQuestionInput) -> Result<Answer, AskQuestionError> {
        let session = input.session_id.as_ref().map(SessionId::as_str);
        info!("Asking question (session: {})", session.unwrap_or("none"));
        debug!("Question: {}", input.question);

        self.logger.log(ConversationEvent::new(
            "question",
            json!({ "question": input.question.content(), "session_id": session }),
        ));

        match self
            .backend
            .ask(&input.question, input.session_id.as_ref())
            .await
        {
            Ok(answer) => {
                debug!("Received answer with {} sources", answer.sources.len());
                self.logger.log(ConversationEvent::new(
                    "answer",
                    json!({
                        "answer": answer.answer,
                        "sources": answer.sources,
                        "answer_found": answer.answer_found,
                    }),
                ));
                Ok(answer)
            }
            Err(e) => {
                warn!("Ask failed: {}", e);
                self.logger.log(ConversationEvent::new(
                    "error",
                    json!({ "operation": "ask", "error": e.to_string() }),
                ));
                Err(e.into())
            }
        }
    }
}
