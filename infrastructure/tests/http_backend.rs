//! HttpQaBackend against an in-process axum server

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use docqa_application::{BackendError, ChatController, MemoryChatView, QaBackend, SubmitOutcome};
use docqa_domain::{Question, SessionId, UploadFile};
use docqa_infrastructure::{HttpBackendConfig, HttpQaBackend};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct Recorded {
    asks: Arc<Mutex<Vec<Value>>>,
}

async fn upload_handler(mut multipart: Multipart) -> Response {
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await.unwrap();

        if name.ends_with(".exe") {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Unsupported file type." })),
            )
                .into_response();
        }
        return Json(json!({
            "message": format!("{} uploaded ({} bytes, {})", name, data.len(), content_type),
            "session_id": "sess-42",
        }))
        .into_response();
    }
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "No file provided." })),
    )
        .into_response()
}

async fn ask_handler(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Response {
    recorded.asks.lock().unwrap().push(body.clone());

    match body["question"].as_str().unwrap_or_default() {
        "" => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Question is required." })),
        )
            .into_response(),
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        "garbled" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "summary?" => Json(json!({
            "answer": "a summary",
            "sources": null,
        }))
        .into_response(),
        "weather?" => Json(json!({
            "answer": "죄송합니다. 주어진 문서의 내용에 대해서만 답변할 수 있습니다.",
            "sources": ["unrelated passage"],
        }))
        .into_response(),
        question => Json(json!({
            "answer": format!("answer to {}", question),
            "sources": ["p.1 intro", "p.4 refunds"],
            "answer_found": true,
        }))
        .into_response(),
    }
}

async fn slow_handler() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({ "answer": "late" }))
}

async fn spawn_server() -> (SocketAddr, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/api/upload/", post(upload_handler))
        .route("/api/ask/", post(ask_handler))
        .route("/slow/ask/", post(slow_handler))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, recorded)
}

fn backend(addr: SocketAddr) -> HttpQaBackend {
    HttpQaBackend::new(HttpBackendConfig::new(format!("http://{}/api", addr))).unwrap()
}

fn question(text: &str) -> Question {
    Question::try_new(text).unwrap()
}

#[tokio::test]
async fn test_upload_sends_multipart_file_field() {
    let (addr, _) = spawn_server().await;
    let backend = backend(addr);

    let file = UploadFile::new("manual.pdf", b"%PDF-1.7 body".to_vec()).unwrap();
    let receipt = backend.upload(&file).await.unwrap();

    assert_eq!(receipt.session_id.as_str(), "sess-42");
    assert_eq!(receipt.message, "manual.pdf uploaded (13 bytes, application/pdf)");
}

#[tokio::test]
async fn test_upload_error_body_is_surfaced() {
    let (addr, _) = spawn_server().await;
    let backend = backend(addr);

    let file = UploadFile::new("setup.exe", vec![0x4d, 0x5a]).unwrap();
    let err = backend.upload(&file).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.server_message(), Some("Unsupported file type."));
}

#[tokio::test]
async fn test_ask_posts_question_and_session() {
    let (addr, recorded) = spawn_server().await;
    let backend = backend(addr);

    let answer = backend.ask(&question("refunds?"), None).await.unwrap();
    assert_eq!(answer.answer, "answer to refunds?");
    assert_eq!(answer.sources, vec!["p.1 intro", "p.4 refunds"]);
    assert_eq!(answer.answer_found, Some(true));

    let session = SessionId::new("sess-42").unwrap();
    backend
        .ask(&question("exchanges?"), Some(&session))
        .await
        .unwrap();

    let asks = recorded.asks.lock().unwrap();
    assert_eq!(asks[0], json!({ "question": "refunds?", "session_id": null }));
    assert_eq!(
        asks[1],
        json!({ "question": "exchanges?", "session_id": "sess-42" })
    );
}

#[tokio::test]
async fn test_null_sources_still_answer() {
    let (addr, _) = spawn_server().await;
    let view = Arc::new(MemoryChatView::new());
    let controller = ChatController::new(Arc::new(backend(addr)), view.clone());

    let outcome = controller.submit_question("summary?").await;
    assert!(matches!(outcome, SubmitOutcome::Answered(ref a) if a.sources.is_empty()));
    let answered = view.last().unwrap();
    assert_eq!(answered.text, "a summary");
    assert!(answered.sources.is_none());
}

#[tokio::test]
async fn test_non_json_error_status() {
    let (addr, _) = spawn_server().await;
    let err = backend(addr).ask(&question("boom"), None).await.unwrap_err();

    assert!(matches!(
        err,
        BackendError::Status {
            status: 500,
            message: None
        }
    ));
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let (addr, _) = spawn_server().await;
    let err = backend(addr)
        .ask(&question("garbled"), None)
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = backend(addr).ask(&question("anyone?"), None).await.unwrap_err();
    assert!(matches!(err, BackendError::ConnectionError(_)));
}

#[tokio::test]
async fn test_configured_timeout() {
    let (addr, _) = spawn_server().await;
    let backend = HttpQaBackend::new(
        HttpBackendConfig::new(format!("http://{}/slow/", addr))
            .with_timeout(Some(Duration::from_millis(100))),
    )
    .unwrap();

    let err = backend.ask(&question("slow?"), None).await.unwrap_err();
    assert!(matches!(err, BackendError::Timeout));
}

#[tokio::test]
async fn test_chat_flow_over_http() {
    let (addr, recorded) = spawn_server().await;
    let view = Arc::new(MemoryChatView::new());
    let controller = ChatController::new(Arc::new(backend(addr)), view.clone());

    let file = UploadFile::new("policy.txt", b"Refunds within 7 days.".to_vec()).unwrap();
    assert_eq!(
        controller.submit_upload(Some(file)).await,
        SubmitOutcome::Uploaded(SessionId::new("sess-42").unwrap())
    );

    let outcome = controller.submit_question("refunds?").await;
    assert!(matches!(outcome, SubmitOutcome::Answered(_)));
    let answered = view.last().unwrap();
    assert_eq!(answered.text, "answer to refunds?");
    assert_eq!(
        answered.sources.unwrap().1,
        vec!["p.1 intro".to_string(), "p.4 refunds".to_string()]
    );

    // Legacy reply without answer_found: the apology hides its sources
    controller.submit_question("weather?").await;
    assert!(view.last().unwrap().sources.is_none());

    let failed = controller.submit_question("boom").await;
    assert!(matches!(failed, SubmitOutcome::Failed(_)));
    assert_eq!(
        view.last().unwrap().text,
        "오류가 발생했습니다. 잠시 후 다시 시도해주세요."
    );

    let asks = recorded.asks.lock().unwrap();
    assert!(asks.iter().all(|a| a["session_id"] == "sess-42"));
}
