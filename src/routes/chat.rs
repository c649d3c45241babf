// src/routes/chat.rs
use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // Any body we cannot read a userMessage from gets the same 400.
    // Accepted text is forwarded exactly as sent.
    let utterance = payload
        .ok()
        .and_then(|Json(req)| req.user_message)
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(AppError::missing_user_message)?;

    let coach = state
        .coach
        .as_ref()
        .ok_or(AppError::Configuration("GEMINI_API_KEY"))?;

    let reply = coach.reply(&utterance).await?;
    Ok(Json(reply.into()))
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
