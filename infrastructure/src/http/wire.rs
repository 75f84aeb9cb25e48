//! Wire formats for the two backend endpoints

use serde::{Deserialize, Serialize};

/// JSON body of `POST ask/`
///
/// `session_id` is sent as `null` before any upload.
#[derive(Debug, Serialize)]
pub(crate) struct AskRequestBody<'a> {
    pub question: &'a str,
    pub session_id: Option<&'a str>,
}

/// Body sent alongside a non-2xx status
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Multipart field carrying the uploaded document
pub(crate) const UPLOAD_FIELD: &str = "file";
