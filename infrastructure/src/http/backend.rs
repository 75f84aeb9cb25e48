//! reqwest implementation of the backend port

use super::error::{HttpBackendError, from_transport};
use super::wire::{AskRequestBody, ErrorBody, UPLOAD_FIELD};
use async_trait::async_trait;
use docqa_application::{BackendError, QaBackend};
use docqa_domain::{Answer, Question, SessionId, UploadFile, UploadReceipt};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Endpoint the original front end talks to
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/";

const DEFAULT_USER_AGENT: &str = concat!("docqa/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`HttpQaBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBackendConfig {
    pub base_url: String,
    /// `None` waits for as long as the backend takes
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl HttpBackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Backend reached over HTTP
pub struct HttpQaBackend {
    client: Client,
    upload_url: Url,
    ask_url: Url,
}

impl HttpQaBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self, HttpBackendError> {
        let base = Self::parse_base(&config.base_url)?;
        let join = |path: &str| {
            base.join(path)
                .map_err(|e| HttpBackendError::InvalidBaseUrl {
                    url: config.base_url.clone(),
                    reason: e.to_string(),
                })
        };
        let upload_url = join("upload/")?;
        let ask_url = join("ask/")?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            upload_url,
            ask_url,
        })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    pub fn ask_url(&self) -> &Url {
        &self.ask_url
    }

    /// Parse the base URL, adding the trailing slash `Url::join` needs
    fn parse_base(raw: &str) -> Result<Url, HttpBackendError> {
        let trimmed = raw.trim();
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        };
        let url = Url::parse(&normalized).map_err(|e| HttpBackendError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(HttpBackendError::InvalidBaseUrl {
                url: raw.to_string(),
                reason: "not a base URL".to_string(),
            });
        }
        Ok(url)
    }

    /// Decode a 2xx body, or turn anything else into `BackendError::Status`
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            debug!("Backend returned {}: {}", status, body);
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await.map_err(from_transport)?;
        serde_json::from_slice(&bytes).map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl QaBackend for HttpQaBackend {
    async fn upload(&self, file: &UploadFile) -> Result<UploadReceipt, BackendError> {
        info!("POST {} ({})", self.upload_url, file.file_name());

        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.file_name().to_string())
            .mime_str(file.mime_type())
            .map_err(|e| BackendError::InvalidRequest(format!("MIME error: {}", e)))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(from_transport)?;

        Self::decode(response).await
    }

    async fn ask(
        &self,
        question: &Question,
        session: Option<&SessionId>,
    ) -> Result<Answer, BackendError> {
        info!("POST {}", self.ask_url);

        let body = AskRequestBody {
            question: question.content(),
            session_id: session.map(SessionId::as_str),
        };

        let response = self
            .client
            .post(self.ask_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(from_transport)?;

        Self::decode(response).await
    }
}
