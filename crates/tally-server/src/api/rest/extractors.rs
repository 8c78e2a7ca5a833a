//! Custom request extractors.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::json;

/// JSON extractor whose rejection is the API's error envelope instead of
/// axum's plain-text one.
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let message = match &rejection {
                    JsonRejection::MissingJsonContentType(_) => {
                        "missing 'Content-Type: application/json' header".to_string()
                    }
                    other => format!("unreadable request body: {}", other),
                };
                Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": message, "code": 400 })),
                ))
            }
        }
    }
}
