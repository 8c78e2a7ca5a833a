//! The authenticated method dispatcher.
//!
//! Three sequential gates, each terminal on failure: parse the envelope,
//! authenticate, then route, construct and execute the concrete request.
//! Nothing below this module decides a status code, and no backend error
//! detail crosses the reply boundary.

use serde_json::{json, Map, Value};
use tracing::{debug, error};

use crate::auth::is_authenticated;
use crate::backend::ScoringBackend;
use crate::error::{BackendError, FieldError, ResponseCode};
use crate::requests::{ClientsInterestsRequest, MethodRequest, OnlineScoreRequest};

/// Score returned to admin callers without consulting the backend.
const ADMIN_SCORE: i64 = 42;

/// The closed set of dispatchable methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    OnlineScore,
    ClientsInterests,
}

impl Method {
    /// Resolve a wire-level method name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "online_score" => Some(Method::OnlineScore),
            "clients_interests" => Some(Method::ClientsInterests),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::OnlineScore => "online_score",
            Method::ClientsInterests => "clients_interests",
        }
    }
}

/// Per-call side-channel record, owned by the transport and written only
/// by the dispatcher for the current call.
#[derive(Debug, Default, Clone)]
pub struct CallContext {
    pub request_id: String,
    /// `online_score`: which declared fields the caller supplied.
    pub has: Vec<&'static str>,
    /// `clients_interests`: number of distinct clients served.
    pub nclients: Option<usize>,
}

impl CallContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        CallContext {
            request_id: request_id.into(),
            ..CallContext::default()
        }
    }
}

/// The dispatcher's (payload, status) pair. Error replies carry their
/// message string as the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub payload: Value,
    pub code: ResponseCode,
}

impl Reply {
    pub fn ok(payload: Value) -> Self {
        Reply {
            payload,
            code: ResponseCode::Ok,
        }
    }

    pub fn error(code: ResponseCode, message: impl Into<String>) -> Self {
        Reply {
            payload: Value::String(message.into()),
            code,
        }
    }
}

/// Run a call through the three-gate pipeline.
pub fn dispatch(body: &Value, ctx: &mut CallContext, backend: &dyn ScoringBackend) -> Reply {
    let envelope = match MethodRequest::parse(body) {
        Ok(envelope) => envelope,
        Err(err) => return Reply::error(ResponseCode::InvalidRequest, err.to_string()),
    };
    debug!(request_id = %ctx.request_id, method = %envelope.method, "envelope parsed");

    // Reject before any method-specific validation so an unauthenticated
    // caller cannot probe the schemas.
    if !is_authenticated(&envelope) {
        return Reply::error(ResponseCode::Forbidden, ResponseCode::Forbidden.reason());
    }

    let Some(method) = Method::from_name(&envelope.method) else {
        return Reply::error(
            ResponseCode::InvalidRequest,
            format!("method {} not found", envelope.method),
        );
    };

    match run(method, &envelope, ctx, backend) {
        Ok(payload) => Reply::ok(payload),
        Err(MethodError::Validation(err)) => {
            Reply::error(ResponseCode::InvalidRequest, err.to_string())
        }
        Err(MethodError::Backend(err)) => {
            error!(request_id = %ctx.request_id, error = %err, "scoring backend failed");
            Reply::error(
                ResponseCode::InternalError,
                ResponseCode::InternalError.reason(),
            )
        }
    }
}

/// Failure modes of a routed call, translated into a reply by `dispatch`.
enum MethodError {
    Validation(FieldError),
    Backend(BackendError),
}

impl From<FieldError> for MethodError {
    fn from(err: FieldError) -> Self {
        MethodError::Validation(err)
    }
}

impl From<BackendError> for MethodError {
    fn from(err: BackendError) -> Self {
        MethodError::Backend(err)
    }
}

fn run(
    method: Method,
    envelope: &MethodRequest,
    ctx: &mut CallContext,
    backend: &dyn ScoringBackend,
) -> Result<Value, MethodError> {
    match method {
        Method::OnlineScore => {
            let request = OnlineScoreRequest::parse(envelope)?;
            ctx.has = request.supplied();
            if request.is_admin {
                return Ok(json!({ "score": ADMIN_SCORE }));
            }
            let score = backend.score(&request.query())?;
            Ok(json!({ "score": score }))
        }
        Method::ClientsInterests => {
            let request = ClientsInterestsRequest::parse(envelope)?;
            let mut interests = Map::new();
            for &client_id in &request.client_ids {
                let found = backend.interests(client_id)?;
                interests.insert(client_id.to_string(), json!(found));
            }
            ctx.nclients = Some(interests.len());
            Ok(Value::Object(interests))
        }
    }
}
