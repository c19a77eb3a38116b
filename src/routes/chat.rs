// src/routes/chat.rs
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub const NO_MESSAGE: &str = "No message provided";

/// One prompt in, one reply out. Nothing is kept between requests.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let message = match request.message {
        Some(m) if !m.is_empty() => m,
        _ => return Err(AppError::BadRequest(NO_MESSAGE.to_string())),
    };

    debug!(chars = message.chars().count(), "forwarding message upstream");
    let reply = state.generator.generate(&message).await?;
    debug!(chars = reply.chars().count(), "got reply");

    Ok(Json(ChatResponse { reply }))
}
