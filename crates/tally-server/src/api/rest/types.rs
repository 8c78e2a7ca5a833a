//! REST API type definitions.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tally_core::{Reply, ResponseCode, ScoringBackend};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ScoringBackend>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Response envelope: `response` on success, `error` otherwise, with the
/// numeric code mirrored inside either shape.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiEnvelope {
    Success { response: Value, code: u16 },
    Error { error: String, code: u16 },
}

impl ApiEnvelope {
    /// Wrap a dispatcher reply.
    pub fn from_reply(reply: Reply) -> Self {
        if !reply.code.is_error() {
            return ApiEnvelope::Success {
                response: reply.payload,
                code: reply.code.as_u16(),
            };
        }
        let error = match reply.payload {
            Value::String(message) if !message.is_empty() => message,
            _ => reply.code.reason().to_string(),
        };
        ApiEnvelope::Error {
            error,
            code: reply.code.as_u16(),
        }
    }

    pub fn error(code: ResponseCode, message: impl Into<String>) -> Self {
        ApiEnvelope::Error {
            error: message.into(),
            code: code.as_u16(),
        }
    }
}
