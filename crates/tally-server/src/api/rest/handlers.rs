//! API endpoint handlers.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use super::extractors::JsonExtractor;
use super::types::{ApiEnvelope, AppState, HealthResponse};
use tally_core::{dispatch, CallContext, ResponseCode};

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Method endpoint: runs the validation-and-dispatch pipeline against the
/// injected scoring backend and mirrors the reply code as the HTTP status.
#[axum::debug_handler]
pub(super) async fn method(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonExtractor(body): JsonExtractor<Value>,
) -> Response {
    let mut ctx = CallContext::new(request_id(&headers));
    let reply = dispatch(&body, &mut ctx, state.backend.as_ref());
    info!(
        request_id = %ctx.request_id,
        code = reply.code.as_u16(),
        has = ?ctx.has,
        nclients = ctx.nclients,
        "method call complete"
    );
    let status =
        StatusCode::from_u16(reply.code.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ApiEnvelope::from_reply(reply))).into_response()
}

/// Fallback for unknown routes.
pub(super) async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiEnvelope::error(
            ResponseCode::NotFound,
            ResponseCode::NotFound.reason(),
        )),
    )
        .into_response()
}

fn request_id(headers: &HeaderMap) -> String {
    headers
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}
