//! HTTP endpoints
//!
//! REST API for the chat assistant. The upstream gateway authenticates the
//! caller and forwards the user id in `x-user-id`; requests without it are
//! rejected before any handler logic runs.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/api/chatbot", post(chat))
        .route("/api/chat-history", get(chat_history))
        .route("/api/chat-messages/:id", delete(delete_message))
        .route("/api/chat-messages", delete(clear_history))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_origins))
        .with_state(state)
}

/// Build the CORS layer from configured origins; empty config stays
/// same-origin only
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "invalid CORS origin ignored");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    success: bool,
    reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_id: Option<Uuid>,
}

/// One chat turn
async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    let user_id = user_id_from(&headers)?;

    let handled = state.engine.handle_message(&user_id, &request.message).await;

    Ok(Json(ChatResponse {
        success: true,
        reply: handled.reply,
        message_id: handled.exchange_id,
    }))
}

/// Full chat history for the caller, oldest first
async fn chat_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StatusCode> {
    let user_id = user_id_from(&headers)?;

    let exchanges = state
        .history
        .list_all(&user_id)
        .await
        .map_err(internal_error)?;

    Ok(Json(exchanges))
}

/// Delete a single message, refusing when it belongs to someone else
async fn delete_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, StatusCode> {
    let user_id = user_id_from(&headers)?;

    let deleted = state
        .history
        .delete_one(&user_id, id)
        .await
        .map_err(internal_error)?;

    if !deleted {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(serde_json::json!({ "success": true })))
}

/// Clear the caller's entire history
async fn clear_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StatusCode> {
    let user_id = user_id_from(&headers)?;

    let removed = state
        .history
        .delete_all(&user_id)
        .await
        .map_err(internal_error)?;

    Ok(Json(serde_json::json!({ "success": true, "removed": removed })))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

fn user_id_from(headers: &HeaderMap) -> Result<String, StatusCode> {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
        .ok_or(StatusCode::UNAUTHORIZED)
}

fn internal_error(err: shop_agent_core::Error) -> StatusCode {
    tracing::error!(error = %err, "request failed");
    StatusCode::INTERNAL_SERVER_ERROR
}
