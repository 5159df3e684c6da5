// src/routes/chat.rs
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, SupportedLanguagesResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;

    info!(
        engine = state.engine.name(),
        language = %payload.language,
        chars = payload.message.chars().count(),
        "chat request"
    );

    let response = state
        .engine
        .respond(&payload.message, &payload.language)
        .await?;

    Ok(Json(ChatResponse {
        response,
        language: payload.language,
    }))
}

pub async fn supported_languages_handler(
    State(state): State<SharedState>,
) -> Json<SupportedLanguagesResponse> {
    Json(SupportedLanguagesResponse {
        languages: state.engine.supported_languages(),
    })
}
