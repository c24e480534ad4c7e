//! Chat handler — relays one user message to the completion API.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use chrono::{SecondsFormat, Utc};
use stackit_core::prompt;

use super::{json_object, non_empty_str};
use crate::AppState;
use crate::error::{AppError, AppResult, NO_DATA_PROVIDED, NO_INPUT_PROVIDED};
use crate::models::ChatResponse;

/// `POST /api/chat` — answer a developer question.
///
/// The body is read raw so that missing or non-JSON payloads map to
/// `No data provided` rather than an extractor rejection.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ChatResponse>> {
    let message = chat_message(&body)?;

    let messages = prompt::chat_messages(&message);
    let response = state.completion.complete(&messages).await?;

    Ok(Json(ChatResponse {
        response,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }))
}

fn chat_message(body: &[u8]) -> AppResult<String> {
    let data = json_object(body).ok_or(AppError::InvalidRequest(NO_DATA_PROVIDED))?;
    non_empty_str(&data, "message")
        .map(str::to_string)
        .ok_or(AppError::InvalidRequest(NO_INPUT_PROVIDED))
}
