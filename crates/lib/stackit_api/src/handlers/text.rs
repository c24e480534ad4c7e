//! Text assistant handlers — rewrite existing text or draft new content.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use stackit_core::prompt::{self, EnhancementKind};
use tracing::debug;

use super::{json_object, non_empty_str};
use crate::AppState;
use crate::error::{
    AppError, AppResult, ENHANCE_FAILED, GENERATE_FAILED, PROMPT_REQUIRED,
    TEXT_AND_TYPE_REQUIRED, UNSUPPORTED_ENHANCEMENT,
};
use crate::models::{EnhanceTextResponse, GenerateContentResponse};

/// `POST /api/enhance-text` — rewrite `text` in the style named by `type`.
pub async fn enhance_text_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<EnhanceTextResponse>> {
    let data = json_object(&body).ok_or(AppError::InvalidRequest(TEXT_AND_TYPE_REQUIRED))?;

    let (Some(text), Some(kind)) = (non_empty_str(&data, "text"), non_empty_str(&data, "type"))
    else {
        return Err(AppError::InvalidRequest(TEXT_AND_TYPE_REQUIRED));
    };
    let kind =
        EnhancementKind::parse(kind).ok_or(AppError::InvalidRequest(UNSUPPORTED_ENHANCEMENT))?;

    debug!(%kind, bytes = text.len(), "enhancing text");

    let messages = prompt::enhancement_messages(kind, text, non_empty_str(&data, "context"));
    let enhanced_text = state
        .completion
        .complete(&messages)
        .await
        .map_err(AppError::upstream(ENHANCE_FAILED))?;

    Ok(Json(EnhanceTextResponse { enhanced_text }))
}

/// `POST /api/generate-content` — draft text for `prompt`, optionally framed by `context`.
pub async fn generate_content_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<GenerateContentResponse>> {
    let data = json_object(&body).ok_or(AppError::InvalidRequest(PROMPT_REQUIRED))?;
    let prompt_text =
        non_empty_str(&data, "prompt").ok_or(AppError::InvalidRequest(PROMPT_REQUIRED))?;

    let messages = prompt::generation_messages(prompt_text, non_empty_str(&data, "context"));
    let generated_text = state
        .completion
        .complete(&messages)
        .await
        .map_err(AppError::upstream(GENERATE_FAILED))?;

    Ok(Json(GenerateContentResponse { generated_text }))
}
