//! Chat controller
//!
//! Drives the two forms of the chat: the upload form and the question form.
//! It holds the session identifier handed out by the last successful upload
//! and one in-flight guard per form. Everything it shows goes through the
//! [`ChatView`] port.

use crate::config::ChatBehavior;
use crate::ports::chat_view::ChatView;
use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::qa_backend::QaBackend;
use crate::use_cases::ask_question::{AskQuestionInput, AskQuestionUseCase};
use crate::use_cases::submit_guard::SubmitGuard;
use crate::use_cases::upload_document::UploadDocumentUseCase;
use docqa_domain::{Answer, Message, Question, SessionId, UploadFile};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// What happened to a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to send (blank question, no file selected)
    Skipped,
    /// The form already has a request in flight
    Busy,
    /// The question was answered and rendered
    Answered(Answer),
    /// The upload succeeded and opened this session
    Uploaded(SessionId),
    /// The request failed; the error string has been rendered
    Failed(String),
}

pub struct ChatController<B: QaBackend + 'static> {
    ask: AskQuestionUseCase<B>,
    upload: UploadDocumentUseCase<B>,
    view: Arc<dyn ChatView>,
    behavior: ChatBehavior,
    session: RwLock<Option<SessionId>>,
    ask_guard: SubmitGuard,
    upload_guard: SubmitGuard,
}

impl<B: QaBackend + 'static> ChatController<B> {
    pub fn new(backend: Arc<B>, view: Arc<dyn ChatView>) -> Self {
        Self {
            ask: AskQuestionUseCase::new(backend.clone()),
            upload: UploadDocumentUseCase::new(backend),
            view,
            behavior: ChatBehavior::default(),
            session: RwLock::new(None),
            ask_guard: SubmitGuard::new(),
            upload_guard: SubmitGuard::new(),
        }
    }

    pub fn with_behavior(mut self, behavior: ChatBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.ask = self.ask.with_logger(logger.clone());
        self.upload = self.upload.with_logger(logger);
        self
    }

    /// Start from an existing session instead of uploading
    pub fn with_session(self, session_id: SessionId) -> Self {
        self.set_session_id(Some(session_id));
        self
    }

    pub fn behavior(&self) -> &ChatBehavior {
        &self.behavior
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.session.read().unwrap().clone()
    }

    pub fn set_session_id(&self, session_id: Option<SessionId>) {
        *self.session.write().unwrap() = session_id;
    }

    pub fn is_asking(&self) -> bool {
        self.ask_guard.is_busy()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload_guard.is_busy()
    }

    /// Handle a question submission.
    ///
    /// Renders the user message and a pending bot message, then replaces the
    /// pending text with the answer (or the locale error string).
    pub async fn submit_question(&self, input: &str) -> SubmitOutcome {
        let Some(question) = Question::try_new(input) else {
            return SubmitOutcome::Skipped;
        };
        let Some(_permit) = self.ask_guard.try_acquire() else {
            debug!("Question submitted while another is in flight");
            return SubmitOutcome::Busy;
        };

        let locale = self.behavior.locale;
        self.view.append(Message::user(question.content()));
        let pending = self.view.append(Message::bot(locale.pending_answer()));

        let input = AskQuestionInput::new(question).with_session(self.session_id());
        match self.ask.execute(input).await {
            Ok(answer) => {
                self.view.replace_text(pending, &answer.answer);
                if self.behavior.source_policy().should_show_sources(&answer) {
                    self.view
                        .attach_sources(pending, locale.sources_header(), &answer.sources);
                }
                SubmitOutcome::Answered(answer)
            }
            Err(e) => {
                self.view.replace_text(pending, locale.ask_failed());
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    /// Handle an upload submission.
    ///
    /// On success the returned session replaces the current one; on failure
    /// the current session is left as it was.
    pub async fn submit_upload(&self, file: Option<UploadFile>) -> SubmitOutcome {
        let Some(file) = file else {
            return SubmitOutcome::Skipped;
        };
        let Some(_permit) = self.upload_guard.try_acquire() else {
            debug!("Upload submitted while another is in flight");
            return SubmitOutcome::Busy;
        };

        let locale = self.behavior.locale;
        let status = self.view.append(Message::bot(locale.uploading()));

        match self.upload.execute(&file).await {
            Ok(receipt) => {
                self.set_session_id(Some(receipt.session_id.clone()));
                self.view.replace_text(status, &receipt.message);
                SubmitOutcome::Uploaded(receipt.session_id)
            }
            Err(e) => {
                let text = match e.server_message() {
                    Some(detail) => format!("{} {}", locale.upload_failed(), detail),
                    None => locale.upload_failed().to_string(),
                };
                self.view.replace_text(status, &text);
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}
