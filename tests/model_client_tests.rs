use multilingual_chatbot::config::ModelConfig;
use multilingual_chatbot::message::{ChatResponse, SupportedLanguagesResponse};
use multilingual_chatbot::routes::create_router;
use multilingual_chatbot::services::engine::Engine;
use multilingual_chatbot::services::model_client::{ModelChatbot, ModelError};
use multilingual_chatbot::state::AppState;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::util::ServiceExt;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn_inference_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Echoes the forced language token and input back as the generated text.
async fn echo_generate(Json(req): Json<Value>) -> Json<Value> {
    let lang = req["forced_bos_lang"].as_str().unwrap_or_default();
    let input = req["inputs"].as_str().unwrap_or_default();
    let beams = req["parameters"]["num_beams"].as_u64().unwrap_or_default();
    Json(json!({ "generated_text": format!("[{lang}/{beams}] {input}") }))
}

fn model_config(base_url: String) -> ModelConfig {
    ModelConfig {
        base_url,
        timeout: Duration::from_secs(5),
        ..ModelConfig::default()
    }
}

async fn echo_chatbot() -> ModelChatbot {
    let url = spawn_inference_stub(Router::new().route("/generate", post(echo_generate))).await;
    ModelChatbot::new(&model_config(url)).unwrap()
}

#[tokio::test]
async fn test_generates_with_forced_language_token() {
    let bot = echo_chatbot().await;
    assert_eq!(
        bot.generate_response("नमस्ते, कैसे हो आप?", "hi").await,
        "[hi_IN/5] नमस्ते, कैसे हो आप?"
    );
    assert_eq!(bot.generate_response("hello", "te").await, "[te_IN/5] hello");
}

#[tokio::test]
async fn test_unsupported_language_becomes_error_reply() {
    // Never contacted: the language check comes first.
    let bot = ModelChatbot::new(&model_config("http://127.0.0.1:9".to_string())).unwrap();

    let err = bot.try_generate("bonjour", "fr").await.unwrap_err();
    assert!(matches!(err, ModelError::UnsupportedLanguage(ref code) if code == "fr"));
    assert_eq!(
        bot.generate_response("bonjour", "fr").await,
        "Error: Unsupported language: fr"
    );
}

#[tokio::test]
async fn test_server_failure_becomes_error_reply() {
    let router = Router::new().route(
        "/generate",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model loading") }),
    );
    let url = spawn_inference_stub(router).await;
    let bot = ModelChatbot::new(&model_config(url)).unwrap();

    let err = bot.try_generate("hello", "hi").await.unwrap_err();
    assert!(matches!(err, ModelError::Status { ref body, .. } if body == "model loading"));

    let reply = bot.generate_response("hello", "hi").await;
    assert!(reply.starts_with("Error: "), "{reply}");
    assert!(reply.contains("503"), "{reply}");
}

#[tokio::test]
async fn test_malformed_reply_is_a_decode_error() {
    let router = Router::new().route("/generate", post(|| async { Json(json!({ "text": "hi" })) }));
    let url = spawn_inference_stub(router).await;
    let bot = ModelChatbot::new(&model_config(url)).unwrap();

    let err = bot.try_generate("hello", "te").await.unwrap_err();
    assert!(matches!(err, ModelError::Decode(_)), "{err}");
}

#[tokio::test]
async fn test_model_engine_through_api() {
    let state = Arc::new(AppState::new(Engine::Model(echo_chatbot().await)));
    let app = create_router().with_state(state);

    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"message": "hello", "language": "hi"}"#))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat_resp: ChatResponse = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(chat_resp.response, "[hi_IN/5] hello");
    assert_eq!(chat_resp.language, "hi");

    // Unsupported languages still answer 200 with the error text.
    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"message": "hello", "language": "en"}"#))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat_resp: ChatResponse = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(chat_resp.response, "Error: Unsupported language: en");

    let req = Request::builder()
        .uri("/supported-languages")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let langs: SupportedLanguagesResponse = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(langs.languages, vec!["hi", "te"]);
}
